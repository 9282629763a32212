//! Contact — the single entity stored by carnet.
//!
//! A contact is addressed by its email everywhere outside the storage layer.
//! The numeric row id assigned by the backend is never exposed.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Flat string-keyed form record, as collected from the front end.
pub type Record = BTreeMap<String, String>;

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Gender as selected on the form. Anything other than `F` or `M` is kept
/// verbatim as [`Gender::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
  Female,
  Male,
  Other(String),
}

impl Gender {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Female => "F",
      Self::Male => "M",
      Self::Other(s) => s.as_str(),
    }
  }
}

impl From<&str> for Gender {
  fn from(s: &str) -> Self {
    match s {
      "F" => Self::Female,
      "M" => Self::Male,
      other => Self::Other(other.to_owned()),
    }
  }
}

impl From<String> for Gender {
  fn from(s: String) -> Self {
    match s.as_str() {
      "F" | "M" => Self::from(s.as_str()),
      _ => Self::Other(s),
    }
  }
}

impl From<Gender> for String {
  fn from(g: Gender) -> Self {
    match g {
      Gender::Other(s) => s,
      other => other.as_str().to_owned(),
    }
  }
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// Every mutable field of a stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub name:      String,
  pub firstname: String,
  /// `DD/MM/YYYY`, kept as entered.
  pub birthdate: String,
  pub phone:     String,
  /// Unique across all contacts; the external key for lookup and writes.
  pub email:     String,
  pub gender:    Gender,
}

impl Contact {
  /// Build a contact from a form record. Missing keys read as empty strings.
  pub fn from_record(record: &Record) -> Self {
    let field = |key: &str| record.get(key).cloned().unwrap_or_default();
    Self {
      name:      field("name"),
      firstname: field("firstname"),
      birthdate: field("birthdate"),
      phone:     field("phone"),
      email:     field("email"),
      gender:    Gender::from(field("gender")),
    }
  }

  pub fn to_record(&self) -> Record {
    [
      ("name", self.name.clone()),
      ("firstname", self.firstname.clone()),
      ("birthdate", self.birthdate.clone()),
      ("phone", self.phone.clone()),
      ("email", self.email.clone()),
      ("gender", self.gender.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect()
  }

  /// The list-view projection of this contact.
  pub fn summary(&self) -> ContactSummary {
    ContactSummary {
      name:      self.name.clone(),
      firstname: self.firstname.clone(),
      phone:     self.phone.clone(),
      email:     self.email.clone(),
    }
  }
}

// ─── List row ────────────────────────────────────────────────────────────────

/// One row of the contact list: no birthdate, gender or id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
  pub name:      String,
  pub firstname: String,
  pub phone:     String,
  pub email:     String,
}

impl fmt::Display for ContactSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}\n{} | {}",
      self.name, self.firstname, self.phone, self.email
    )
  }
}
