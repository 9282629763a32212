//! SQL schema for the carnet SQLite store.
//!
//! The schema version lives in `PRAGMA user_version`. There are no
//! migrations: a database stamped with any other non-zero version has its
//! `contact` table dropped and recreated.

/// Version stamped into `PRAGMA user_version` after initialisation.
pub const SCHEMA_VERSION: i32 = 1;

/// Contact table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const CREATE_CONTACT: &str = "
CREATE TABLE IF NOT EXISTS contact (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT,
    firstname TEXT,
    birthdate TEXT,   -- DD/MM/YYYY as entered
    phone     TEXT,
    email     TEXT UNIQUE,
    gender    TEXT    -- 'F' | 'M' | anything else
);
";

pub const DROP_CONTACT: &str = "DROP TABLE IF EXISTS contact;";
