use agenda::db::*;
use agenda::model::*;
use agenda::store::{ContactStore, SqliteStore};
use agenda::ContactController;

fn ana() -> Contact {
    Contact::create("Ana".into(), "ana@x.com".into(), "111".into())
}

// ==========================================================================
// CONTACT REPO TESTS
// ==========================================================================

#[test]
fn contact_insert_and_find_all() {
    let conn = schema::test_connection();
    let contact = ana();
    contact_repo::insert(&conn, &contact).unwrap();

    let found = contact_repo::find_all(&conn).unwrap();
    assert_eq!(found, vec![contact]);
}

#[test]
fn contact_delete_returns_false_for_missing_row() {
    let conn = schema::test_connection();
    assert!(!contact_repo::delete(&conn, Id::generate()).unwrap());
}

#[test]
fn contact_count_tracks_inserts_and_deletes() {
    let conn = schema::test_connection();
    let a = ana();
    contact_repo::insert(&conn, &a).unwrap();
    contact_repo::insert(&conn, &ana()).unwrap();
    assert_eq!(contact_repo::count(&conn).unwrap(), 2);

    contact_repo::delete(&conn, a.id).unwrap();
    assert_eq!(contact_repo::count(&conn).unwrap(), 1);
}

#[test]
#[should_panic(expected = "contact id collision")]
fn contact_insert_same_id_twice_is_fatal() {
    let conn = schema::test_connection();
    let contact = ana();
    contact_repo::insert(&conn, &contact).unwrap();
    let _ = contact_repo::insert(&conn, &contact);
}

#[test]
fn initialize_is_idempotent() {
    let conn = schema::test_connection();
    contact_repo::insert(&conn, &ana()).unwrap();
    schema::initialize(&conn).unwrap();
    assert_eq!(contact_repo::count(&conn).unwrap(), 1);
}

// ==========================================================================
// FILE-BACKED PERSISTENCE
// ==========================================================================

#[test]
fn contacts_survive_reopen_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.db");

    let (first, third) = {
        let mut c = ContactController::new(SqliteStore::open(&path).unwrap());
        let first = c.add("Ana", "ana@x.com", "111").unwrap();
        let second = c.add("Luis", "luis@x.com", "222").unwrap();
        let third = c.add("Marta", "marta@x.com", "333").unwrap();
        c.delete(second.id).unwrap();
        (first, third)
    };

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.list().unwrap(), vec![first, third]);
}

#[test]
fn from_connection_creates_schema() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut store = SqliteStore::from_connection(conn).unwrap();
    store
        .add("Ana".into(), "ana@x.com".into(), "111".into())
        .unwrap();
    assert_eq!(contact_repo::count(store.connection()).unwrap(), 1);
}

#[test]
fn store_operations_surface_database_errors() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .connection()
        .execute_batch("DROP TABLE contacts;")
        .unwrap();

    assert!(matches!(store.list(), Err(agenda::AgendaError::Database(_))));
    assert!(matches!(
        store.remove(Id::generate()),
        Err(agenda::AgendaError::Database(_))
    ));
    assert!(matches!(
        store.add("Ana".into(), "ana@x.com".into(), "111".into()),
        Err(agenda::AgendaError::Database(_))
    ));
}
