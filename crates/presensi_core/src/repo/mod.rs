//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repositories receive an injected connection; they never own a global
//!   handle.
//! - Repository APIs return semantic errors (not-found, duplicate) in
//!   addition to DB transport errors.
//! - Invalid persisted state is rejected (`InvalidData`), never masked.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::attendance::AttendanceKind;

pub mod attendance_repo;
pub mod catalog_repo;
pub mod geo_repo;
pub mod journal_repo;
pub mod permission_repo;
pub mod stats;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Shared repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, id: i64 },
    /// The daily-uniqueness constraint rejected a second attendance action
    /// of the same kind for the same user and calendar day.
    DuplicateDaily(AttendanceKind),
    /// A unique display-name constraint rejected an insert.
    DuplicateName {
        entity: &'static str,
        name: String,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::DuplicateDaily(kind) => write!(
                f,
                "attendance `{}` already recorded for today",
                kind.as_db()
            ),
            Self::DuplicateName { entity, name } => {
                write!(f, "{entity} name `{name}` already exists")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns whether `err` is a SQLite constraint violation whose message
/// mentions `needle` (used to map UNIQUE failures to semantic errors).
fn is_constraint_on(err: &rusqlite::Error, needle: &str) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, Some(message)) => {
            failure.code == rusqlite::ErrorCode::ConstraintViolation && message.contains(needle)
        }
        _ => false,
    }
}
