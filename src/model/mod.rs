pub mod ids;
pub mod contact;

// Re-exports for convenience
pub use ids::Id;
pub use contact::Contact;
