//! Row types read straight from the `contact` table.
//!
//! Columns are nullable in the DDL; a NULL reads back as an empty string.

use carnet_core::{Contact, ContactSummary, Gender};

/// Columns selected by `find_by_email`.
pub const CONTACT_COLUMNS: &str = "name, firstname, birthdate, phone, email, gender";

/// Columns selected by `list_all`.
pub const SUMMARY_COLUMNS: &str = "name, firstname, phone, email";

pub struct RawContact {
  pub name:      Option<String>,
  pub firstname: Option<String>,
  pub birthdate: Option<String>,
  pub phone:     Option<String>,
  pub email:     Option<String>,
  pub gender:    Option<String>,
}

impl RawContact {
  /// Read a row selected with [`CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      name:      row.get(0)?,
      firstname: row.get(1)?,
      birthdate: row.get(2)?,
      phone:     row.get(3)?,
      email:     row.get(4)?,
      gender:    row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Contact {
    Contact {
      name:      self.name.unwrap_or_default(),
      firstname: self.firstname.unwrap_or_default(),
      birthdate: self.birthdate.unwrap_or_default(),
      phone:     self.phone.unwrap_or_default(),
      email:     self.email.unwrap_or_default(),
      gender:    Gender::from(self.gender.unwrap_or_default()),
    }
  }
}

pub struct RawSummary {
  pub name:      Option<String>,
  pub firstname: Option<String>,
  pub phone:     Option<String>,
  pub email:     Option<String>,
}

impl RawSummary {
  /// Read a row selected with [`SUMMARY_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      name:      row.get(0)?,
      firstname: row.get(1)?,
      phone:     row.get(2)?,
      email:     row.get(3)?,
    })
  }

  pub fn into_summary(self) -> ContactSummary {
    ContactSummary {
      name:      self.name.unwrap_or_default(),
      firstname: self.firstname.unwrap_or_default(),
      phone:     self.phone.unwrap_or_default(),
      email:     self.email.unwrap_or_default(),
    }
  }
}
