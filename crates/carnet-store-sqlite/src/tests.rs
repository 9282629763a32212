//! Integration tests for `SqliteStore` against an in-memory database.

use carnet_core::{
  Contact, Gender, OutcomeKind,
  form::{delete_contact, load_for_edit, submit},
  store::ContactStore,
};
use rusqlite::Connection;

use crate::{Error, SCHEMA_VERSION, SqliteStore};

fn store() -> SqliteStore {
  SqliteStore::open_in_memory().expect("in-memory store")
}

fn contact(name: &str, email: &str) -> Contact {
  Contact {
    name:      name.into(),
    firstname: "Camille".into(),
    birthdate: "14/07/1989".into(),
    phone:     "0102030405".into(),
    email:     email.into(),
    gender:    Gender::Other("O".into()),
  }
}

// ─── Store operations ────────────────────────────────────────────────────────

#[test]
fn empty_store_lists_nothing() {
  let s = store();
  assert!(s.list_all().unwrap().is_empty());
  assert!(s.is_email_unique("a@x.com").unwrap());
}

#[test]
fn insert_then_find_roundtrips_every_field() {
  let s = store();
  let c = Contact {
    name:      "Lefèvre".into(),
    firstname: "Zoé".into(),
    birthdate: "29/02/2000".into(),
    phone:     "+33 6 00 00 00 00".into(),
    email:     "zoe@example.fr".into(),
    gender:    Gender::Female,
  };
  s.insert(&c).unwrap();

  let found = s.find_by_email("zoe@example.fr").unwrap();
  assert_eq!(found, Some(c));
}

#[test]
fn find_missing_returns_none() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();
  assert!(s.find_by_email("b@x.com").unwrap().is_none());
}

#[test]
fn find_is_exact_match() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();
  assert!(s.find_by_email("A@x.com").unwrap().is_none());
  assert!(s.find_by_email("a@x.co").unwrap().is_none());
}

#[test]
fn list_all_is_in_insertion_order() {
  let s = store();
  s.insert(&contact("Zola", "z@x.com")).unwrap();
  s.insert(&contact("Abel", "a@x.com")).unwrap();
  s.insert(&contact("Moreau", "m@x.com")).unwrap();

  let rows = s.list_all().unwrap();
  let emails: Vec<_> = rows.iter().map(|r| r.email.as_str()).collect();
  assert_eq!(emails, ["z@x.com", "a@x.com", "m@x.com"]);
  assert_eq!(rows[0], contact("Zola", "z@x.com").summary());
}

#[test]
fn uniqueness_flips_with_insert_and_delete() {
  let s = store();
  let c = contact("Petit", "a@x.com");

  s.insert(&c).unwrap();
  assert!(!s.is_email_unique(&c.email).unwrap());

  assert!(s.delete_by_email(&c.email).unwrap());
  assert!(s.is_email_unique(&c.email).unwrap());
}

#[test]
fn duplicate_insert_is_rejected_by_the_table() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();

  let err = s.insert(&contact("Grand", "a@x.com")).unwrap_err();
  assert!(matches!(err, Error::EmailTaken(ref e) if e == "a@x.com"));
  assert_eq!(s.list_all().unwrap().len(), 1);
}

#[test]
fn update_replaces_all_fields() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();

  let replacement = Contact {
    name:      "Grand".into(),
    firstname: "Louis".into(),
    birthdate: "01/01/1970".into(),
    phone:     "0909090909".into(),
    email:     "a@x.com".into(),
    gender:    Gender::Male,
  };
  s.update_by_email("a@x.com", &replacement).unwrap();

  assert_eq!(s.find_by_email("a@x.com").unwrap(), Some(replacement));
  assert_eq!(s.list_all().unwrap().len(), 1);
}

#[test]
fn update_can_change_the_email() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();

  s.update_by_email("a@x.com", &contact("Petit", "new@x.com"))
    .unwrap();

  assert!(s.is_email_unique("a@x.com").unwrap());
  assert!(s.find_by_email("new@x.com").unwrap().is_some());
}

#[test]
fn update_into_taken_email_is_rejected() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();
  s.insert(&contact("Grand", "b@x.com")).unwrap();

  let err = s
    .update_by_email("a@x.com", &contact("Petit", "b@x.com"))
    .unwrap_err();
  assert!(matches!(err, Error::EmailTaken(_)));
  assert_eq!(s.find_by_email("a@x.com").unwrap(), Some(contact("Petit", "a@x.com")));
}

#[test]
fn update_missing_row_is_not_found() {
  let s = store();
  let err = s
    .update_by_email("ghost@x.com", &contact("Petit", "ghost@x.com"))
    .unwrap_err();
  assert!(matches!(err, Error::NotFound(ref e) if e == "ghost@x.com"));
  assert!(s.list_all().unwrap().is_empty());
}

#[test]
fn delete_missing_returns_false() {
  let s = store();
  s.insert(&contact("Petit", "a@x.com")).unwrap();
  assert!(!s.delete_by_email("nobody@x.com").unwrap());
  assert_eq!(s.list_all().unwrap().len(), 1);
}

#[test]
fn null_columns_read_as_empty_strings() {
  let conn = Connection::open_in_memory().unwrap();
  let s = SqliteStore::from_connection(conn).unwrap();
  s.conn_for_tests()
    .execute("INSERT INTO contact (email) VALUES ('bare@x.com')", [])
    .unwrap();

  let c = s.find_by_email("bare@x.com").unwrap().unwrap();
  assert_eq!(c.name, "");
  assert_eq!(c.gender, Gender::Other(String::new()));
}

// ─── Schema lifecycle ────────────────────────────────────────────────────────

#[test]
fn fresh_database_is_stamped_with_current_version() {
  let s = store();
  let version: i32 = s
    .conn_for_tests()
    .pragma_query_value(None, "user_version", |r| r.get(0))
    .unwrap();
  assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn version_change_drops_and_recreates_the_table() {
  let conn = Connection::open_in_memory().unwrap();
  conn
    .execute_batch(
      "CREATE TABLE contact (id INTEGER PRIMARY KEY, email TEXT);
       INSERT INTO contact (email) VALUES ('old@x.com');
       PRAGMA user_version = 99;",
    )
    .unwrap();

  let s = SqliteStore::from_connection(conn).unwrap();
  assert!(s.list_all().unwrap().is_empty());

  s.insert(&contact("Petit", "a@x.com")).unwrap();
  assert_eq!(s.find_by_email("a@x.com").unwrap(), Some(contact("Petit", "a@x.com")));
}

#[test]
fn reopening_same_version_keeps_rows() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("contacts.db");

  let s = SqliteStore::open(&path).unwrap();
  s.insert(&contact("Petit", "a@x.com")).unwrap();
  s.close().unwrap();

  let s = SqliteStore::open(&path).unwrap();
  assert_eq!(s.list_all().unwrap().len(), 1);
  assert!(!s.is_email_unique("a@x.com").unwrap());
  s.close().unwrap();
}

// ─── Form scenarios ──────────────────────────────────────────────────────────

#[test]
fn duplicate_create_is_a_uniqueness_error() {
  let s = store();
  assert!(submit(&s, &contact("Petit", "a@x.com"), None).is_success());

  let outcome = submit(&s, &contact("Grand", "a@x.com"), None);
  assert_eq!(outcome.kind, OutcomeKind::UniquenessError);
  assert_eq!(s.list_all().unwrap().len(), 1);
}

#[test]
fn edit_with_same_email_updates_phone() {
  let s = store();
  submit(&s, &contact("Petit", "a@x.com"), None);

  let previous = load_for_edit(&s, "a@x.com").unwrap();
  let mut edited = previous.clone();
  edited.phone = "0611223344".into();

  let outcome = submit(&s, &edited, Some(&previous));
  assert_eq!(outcome.kind, OutcomeKind::Success);
  assert_eq!(
    s.find_by_email("a@x.com").unwrap().unwrap().phone,
    "0611223344"
  );
}

#[test]
fn edit_into_other_contacts_email_leaves_row_unchanged() {
  let s = store();
  submit(&s, &contact("Petit", "a@x.com"), None);
  submit(&s, &contact("Grand", "b@x.com"), None);

  let previous = load_for_edit(&s, "a@x.com").unwrap();
  let mut edited = previous.clone();
  edited.email = "b@x.com".into();
  edited.name = "Autre".into();

  let outcome = submit(&s, &edited, Some(&previous));
  assert_eq!(outcome.kind, OutcomeKind::UniquenessError);
  assert_eq!(s.find_by_email("a@x.com").unwrap(), Some(previous));
}

#[test]
fn uppercase_email_is_a_validation_error() {
  let s = store();
  let outcome = submit(&s, &contact("Petit", "A@x.com"), None);
  assert_eq!(outcome.kind, OutcomeKind::ValidationError);
  assert_eq!(outcome.message, "Error: the email address is not valid!");
  assert!(s.list_all().unwrap().is_empty());
}

#[test]
fn deleting_unknown_email_reports_failure() {
  let s = store();
  let outcome = delete_contact(&s, "ghost@x.com");
  assert_eq!(outcome.kind, OutcomeKind::StorageError);
}
