//! Contact form submission: validation, uniqueness, and the create/edit
//! branch.
//!
//! The form is in edit mode when a previously loaded contact is supplied and
//! in create mode otherwise. Every submission ends in exactly one
//! [`Outcome`]; errors never escape to the caller.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
  contact::{Contact, Record},
  error::{Error, Result},
  store::ContactStore,
  validate::validate_contact,
};

const EMAIL_TAKEN_MSG: &str = "Error: this email address is already used!";
const INSERT_FAILED_MSG: &str = "Error: contact could not be saved in database";
const UPDATE_FAILED_MSG: &str = "Error: contact could not be updated";

// ─── Outcome ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeKind {
  Success,
  ValidationError,
  UniquenessError,
  StorageError,
}

/// The user-facing result of a form action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
  pub kind:    OutcomeKind,
  pub message: String,
  /// The email the action was about; for a submission, the submitted one.
  pub email:   String,
}

impl Outcome {
  fn new(kind: OutcomeKind, message: impl Into<String>, email: &str) -> Self {
    Self { kind, message: message.into(), email: email.to_owned() }
  }

  pub fn is_success(&self) -> bool { self.kind == OutcomeKind::Success }
}

// ─── Submission ──────────────────────────────────────────────────────────────

/// Submit the form with `contact`'s values.
///
/// With `previous == None` the contact is inserted; otherwise the row stored
/// under `previous.email` is overwritten. The email is only re-checked for
/// uniqueness when it differs from `previous.email`.
pub fn submit<S: ContactStore>(
  store: &S,
  contact: &Contact,
  previous: Option<&Contact>,
) -> Outcome {
  let email = contact.email.as_str();
  match apply(store, contact, previous) {
    Ok(()) => {
      let message = match previous {
        None => format!("Success: contact {email} was successfully saved in database!"),
        Some(_) => format!("Success: contact {email} was successfully updated!"),
      };
      Outcome::new(OutcomeKind::Success, message, email)
    }
    Err(Error::Validation(e)) => {
      Outcome::new(OutcomeKind::ValidationError, e.to_string(), email)
    }
    Err(Error::EmailTaken(_)) => {
      Outcome::new(OutcomeKind::UniquenessError, EMAIL_TAKEN_MSG, email)
    }
    Err(e @ (Error::Storage(_) | Error::NotFound(_))) => {
      warn!(email, error = %e, "contact write failed");
      let message = if previous.is_some() {
        UPDATE_FAILED_MSG
      } else {
        INSERT_FAILED_MSG
      };
      Outcome::new(OutcomeKind::StorageError, message, email)
    }
  }
}

/// [`submit`] for a flat form record.
pub fn submit_record<S: ContactStore>(
  store: &S,
  record: &Record,
  previous: Option<&Contact>,
) -> Outcome {
  submit(store, &Contact::from_record(record), previous)
}

fn apply<S: ContactStore>(
  store: &S,
  contact: &Contact,
  previous: Option<&Contact>,
) -> Result<()> {
  validate_contact(contact)?;

  match previous {
    None => {
      ensure_unique(store, &contact.email)?;
      store.insert(contact).map_err(Error::storage)?;
      info!(email = %contact.email, "contact created");
    }
    Some(prev) => {
      if prev.email != contact.email {
        ensure_unique(store, &contact.email)?;
      }
      store
        .update_by_email(&prev.email, contact)
        .map_err(Error::storage)?;
      info!(from = %prev.email, to = %contact.email, "contact updated");
    }
  }

  Ok(())
}

fn ensure_unique<S: ContactStore>(store: &S, email: &str) -> Result<()> {
  if store.is_email_unique(email).map_err(Error::storage)? {
    Ok(())
  } else {
    Err(Error::EmailTaken(email.to_owned()))
  }
}

// ─── Edit mode helpers ───────────────────────────────────────────────────────

/// Load the contact stored under `email` so the form can be opened in edit
/// mode.
pub fn load_for_edit<S: ContactStore>(store: &S, email: &str) -> Result<Contact> {
  store
    .find_by_email(email)
    .map_err(Error::storage)?
    .ok_or_else(|| Error::NotFound(email.to_owned()))
}

/// Delete the contact stored under `email`.
pub fn delete_contact<S: ContactStore>(store: &S, email: &str) -> Outcome {
  match store.delete_by_email(email) {
    Ok(true) => {
      info!(email, "contact deleted");
      Outcome::new(
        OutcomeKind::Success,
        format!("Success: the contact {email} was deleted!"),
        email,
      )
    }
    result => {
      if let Err(e) = result {
        warn!(email, error = %e, "contact delete failed");
      }
      Outcome::new(
        OutcomeKind::StorageError,
        format!("Error: the contact {email} could not be deleted!"),
        email,
      )
    }
  }
}
