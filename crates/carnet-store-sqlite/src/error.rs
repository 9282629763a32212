//! Error type for `carnet-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  /// The UNIQUE constraint on `contact.email` rejected the write.
  #[error("email address already in use: {0}")]
  EmailTaken(String),

  /// An update targeted an email that no row uses.
  #[error("no contact with email {0}")]
  NotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
