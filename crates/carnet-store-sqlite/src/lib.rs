//! SQLite backend for the carnet contact list.
//!
//! One connection, one `contact` table, every call blocking on the caller's
//! thread.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
