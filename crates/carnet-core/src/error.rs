//! Error types for `carnet-core`.

use thiserror::Error;

/// A form field failed its shape check.
///
/// Variants are reported in the order the form is checked: name, first name,
/// birthdate, email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Error: invalid last name!")]
  InvalidName,

  #[error("Error: invalid first name!")]
  InvalidFirstname,

  #[error("Error: date of birth is not valid!")]
  InvalidBirthdate,

  #[error("Error: the email address is not valid!")]
  InvalidEmail,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("email address already in use: {0}")]
  EmailTaken(String),

  #[error("no contact with email {0}")]
  NotFound(String),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box any backend error into [`Error::Storage`].
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
