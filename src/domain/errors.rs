//! Domain error types
//!
//! Every failure a service can report falls into one of these kinds. The HTTP
//! layer maps each kind to a status code.

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Lookup, update or delete against a missing record or relation target
    #[error("{0}")]
    NotFound(String),
    /// A uniqueness key is already taken
    #[error("{0}")]
    Conflict(String),
    /// Input is well-formed but cannot be applied (e.g. unresolved authors)
    #[error("{0}")]
    BadRequest(String),
    /// Field-level validation failures, all of them
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Replace the message of a conflict, leaving other kinds untouched.
    pub fn with_conflict_message(self, message: &str) -> Self {
        match self {
            DomainError::Conflict(_) => DomainError::Conflict(message.to_string()),
            other => other,
        }
    }
}

// The UNIQUE columns are the final authority on duplicates, so a violation
// raised at commit time surfaces as a conflict like the pre-check does.
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        if matches!(e, DbErr::RecordNotUpdated) {
            return DomainError::NotFound("Record not found.".into());
        }

        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Unique constraint violation: {}", detail);
                DomainError::Conflict("A record with the same unique key already exists.".into())
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}
