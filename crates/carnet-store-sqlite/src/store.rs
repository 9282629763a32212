//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use carnet_core::{Contact, ContactSummary, store::ContactStore};
use rusqlite::{Connection, ErrorCode, OptionalExtension as _, params};
use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  encode::{RawContact, RawSummary},
  schema::{CREATE_CONTACT, DROP_CONTACT, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact list backed by a single SQLite connection.
///
/// Open it once per session, pass it by reference, and [`close`] it when
/// done.
///
/// [`close`]: SqliteStore::close
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening contact store");
    Self::from_connection(Connection::open(path)?)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    Self::from_connection(Connection::open_in_memory()?)
  }

  /// Wrap an already-open connection and run schema initialisation.
  pub fn from_connection(conn: Connection) -> Result<Self> {
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  /// Close the underlying connection, reporting any error SQLite raises.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &Connection { &self.conn }

  /// Create the `contact` table, or drop and recreate it when the stored
  /// schema version differs from [`SCHEMA_VERSION`].
  fn init_schema(&self) -> Result<()> {
    let version: i32 =
      self
        .conn
        .pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version == SCHEMA_VERSION {
      self.conn.execute_batch(CREATE_CONTACT)?;
      return Ok(());
    }

    if version == 0 {
      info!(version = SCHEMA_VERSION, "creating contact table");
    } else {
      warn!(
        from = version,
        to = SCHEMA_VERSION,
        "schema version changed; dropping all contacts"
      );
      self.conn.execute_batch(DROP_CONTACT)?;
    }

    self.conn.execute_batch(CREATE_CONTACT)?;
    self
      .conn
      .pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
  }
}

/// Map a UNIQUE violation on `contact.email` to [`Error::EmailTaken`].
fn classify_write_error(err: rusqlite::Error, email: &str) -> Error {
  match err {
    rusqlite::Error::SqliteFailure(ref e, _)
      if e.code == ErrorCode::ConstraintViolation =>
    {
      Error::EmailTaken(email.to_owned())
    }
    other => Error::Database(other),
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  fn list_all(&self) -> Result<Vec<ContactSummary>> {
    let mut stmt = self
      .conn
      .prepare_cached("SELECT name, firstname, phone, email FROM contact ORDER BY id")?;
    let rows = stmt
      .query_map([], RawSummary::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(count = rows.len(), "listed contacts");
    Ok(rows.into_iter().map(RawSummary::into_summary).collect())
  }

  fn find_by_email(&self, email: &str) -> Result<Option<Contact>> {
    let raw = self
      .conn
      .prepare_cached(
        "SELECT name, firstname, birthdate, phone, email, gender
         FROM contact WHERE email = ?1",
      )?
      .query_row(params![email], RawContact::from_row)
      .optional()?;

    Ok(raw.map(RawContact::into_contact))
  }

  fn is_email_unique(&self, email: &str) -> Result<bool> {
    let taken = self
      .conn
      .prepare_cached("SELECT 1 FROM contact WHERE email = ?1")?
      .exists(params![email])?;
    Ok(!taken)
  }

  fn insert(&self, contact: &Contact) -> Result<()> {
    self
      .conn
      .prepare_cached(
        "INSERT INTO contact (name, firstname, birthdate, phone, email, gender)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
      )?
      .execute(params![
        contact.name,
        contact.firstname,
        contact.birthdate,
        contact.phone,
        contact.email,
        contact.gender.as_str(),
      ])
      .map_err(|e| classify_write_error(e, &contact.email))?;

    debug!(email = %contact.email, "inserted contact");
    Ok(())
  }

  fn update_by_email(&self, current_email: &str, contact: &Contact) -> Result<()> {
    let changed = self
      .conn
      .prepare_cached(
        "UPDATE contact
         SET name = ?1, firstname = ?2, birthdate = ?3,
             phone = ?4, email = ?5, gender = ?6
         WHERE email = ?7",
      )?
      .execute(params![
        contact.name,
        contact.firstname,
        contact.birthdate,
        contact.phone,
        contact.email,
        contact.gender.as_str(),
        current_email,
      ])
      .map_err(|e| classify_write_error(e, &contact.email))?;

    if changed == 0 {
      return Err(Error::NotFound(current_email.to_owned()));
    }

    debug!(from = current_email, to = %contact.email, "updated contact");
    Ok(())
  }

  fn delete_by_email(&self, email: &str) -> Result<bool> {
    let removed = self
      .conn
      .prepare_cached("DELETE FROM contact WHERE email = ?1")?
      .execute(params![email])?;

    debug!(email, removed, "deleted contact");
    Ok(removed > 0)
  }
}
