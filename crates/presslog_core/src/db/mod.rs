//! SQLite connection bootstrap for the news reporting store.
//!
//! # Responsibility
//! - Open and configure the single connection used by one report run.
//! - Surface missing-database and engine failures as typed errors.
//!
//! # Invariants
//! - File-backed connections are opened read-only; reports never mutate
//!   the news schema or its rows.
//! - Exactly one connection is opened per invocation and released on drop.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    MissingDatabase { path: PathBuf },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingDatabase { path } => {
                write!(f, "database file `{}` does not exist", path.display())
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingDatabase { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
