//! Domain-level error types.

use thiserror::Error;

/// A post payload that breaks an entity invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: `{field}` {message}")]
pub struct ValidationError {
    /// Name of the offending field as it appears on the wire.
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "is required",
        }
    }

    pub fn empty(field: &'static str) -> Self {
        Self {
            field,
            message: "must not be empty",
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
