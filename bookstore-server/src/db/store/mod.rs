//! Store Module
//!
//! CRUD and transactional operations over the SQLite pool. Every multi-row
//! write goes through a transaction; an early return drops the transaction
//! and rolls back, so no partial write ever commits.

pub mod author;
pub mod book;
pub mod customer;
pub mod order;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Foreign-key / unique / check violation: the referenced row does not
    /// exist or the write conflicts with existing data. Distinct from
    /// [`RepoError::Database`], which covers transient store failure.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return RepoError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for store operations
pub type RepoResult<T> = Result<T, RepoError>;
