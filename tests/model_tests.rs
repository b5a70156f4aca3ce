use agenda::model::*;

#[test]
fn create_assigns_fresh_id() {
    let a = Contact::create("Ana".into(), "ana@x.com".into(), "111".into());
    let b = Contact::create("Ana".into(), "ana@x.com".into(), "111".into());
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, b.name);
}

#[test]
fn create_keeps_fields_as_given() {
    let c = Contact::create("Ana".into(), "ana@x.com".into(), "+51 999".into());
    assert_eq!(c.name, "Ana");
    assert_eq!(c.email, "ana@x.com");
    assert_eq!(c.phone, "+51 999");
}

#[test]
fn contact_serde_roundtrip() {
    let c = Contact::create("Ana".into(), "ana@x.com".into(), "111".into());
    let json = serde_json::to_string(&c).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(c, back);
}

#[test]
fn contact_json_uses_plain_id_string() {
    let c = Contact::create("Ana".into(), "ana@x.com".into(), "111".into());
    let value: serde_json::Value = serde_json::to_value(&c).unwrap();
    assert_eq!(value["id"], c.id.to_string());
}
