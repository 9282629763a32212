//! Core types and trait definitions for the carnet contact list.
//!
//! This crate is free of database dependencies. The SQLite backend and the
//! command-line front end both depend on it.

pub mod contact;
pub mod error;
pub mod form;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactSummary, Gender, Record};
pub use error::{Error, Result, ValidationError};
pub use form::{Outcome, OutcomeKind};
