//! SQLite database holding the `storage_entries` key/value table.
//!
//! # Responsibility
//! - Open connections for the SQLite storage backend.
//! - Keep the `storage_entries` schema at the version this build expects.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - `SqliteStorage` only accepts connections at exactly the latest version.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or validating the board database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer build; its entries are left untouched.
    SchemaTooNew { found: u32, supported: u32 },
    /// Connection was opened without running the storage migrations.
    SchemaNotMigrated { found: u32, expected: u32 },
}

impl DbError {
    /// Classifies a schema version that differs from `latest`.
    pub(crate) fn schema_mismatch(found: u32, latest: u32) -> Self {
        if found > latest {
            Self::SchemaTooNew {
                found,
                supported: latest,
            }
        } else {
            Self::SchemaNotMigrated {
                found,
                expected: latest,
            }
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "board database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "board database schema v{found} is newer than this build supports (v{supported})"
            ),
            Self::SchemaNotMigrated { found, expected } => write!(
                f,
                "board database schema v{found} lacks `storage_entries` v{expected}; open it with `open_db`"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
