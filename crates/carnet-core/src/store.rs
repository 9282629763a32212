//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `carnet-store-sqlite`). The form
//! orchestration in [`crate::form`] depends on this abstraction only.

use crate::contact::{Contact, ContactSummary};

/// Single-table access to the stored contacts, keyed by email.
///
/// Every call is synchronous and blocks until the backend answers.
pub trait ContactStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every contact as a list row, in storage order.
  fn list_all(&self) -> Result<Vec<ContactSummary>, Self::Error>;

  /// The contact stored under exactly `email`, if any.
  fn find_by_email(&self, email: &str) -> Result<Option<Contact>, Self::Error>;

  /// `true` when no stored contact uses `email`.
  fn is_email_unique(&self, email: &str) -> Result<bool, Self::Error>;

  /// Persist a new contact. Fails if its email is already stored.
  fn insert(&self, contact: &Contact) -> Result<(), Self::Error>;

  /// Overwrite every field of the contact stored under `current_email`.
  ///
  /// `contact.email` may differ from `current_email`; the backend rejects the
  /// write if another contact already uses it. Fails if no contact is stored
  /// under `current_email`.
  fn update_by_email(
    &self,
    current_email: &str,
    contact: &Contact,
  ) -> Result<(), Self::Error>;

  /// Remove the contact stored under `email`. Returns whether a row was
  /// removed.
  fn delete_by_email(&self, email: &str) -> Result<bool, Self::Error>;
}
