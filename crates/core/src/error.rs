//! Domain error model.

use thiserror::Error;

use crate::credits::Credits;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// ownership, budget rules). Storage failures belong to the data provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A create request was malformed or incomplete.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// The entity exists but belongs to a different organizer.
    #[error("unauthorized")]
    Unauthorized,

    /// Allocating the requested credits would exceed the event budget.
    #[error("not enough budget: requested {requested}, remaining {remaining}")]
    NotEnoughBudget { requested: Credits, remaining: Credits },

    /// A child entity was addressed through the wrong parent.
    #[error("foreign key mismatch: {0}")]
    ForeignMismatch(String),
}

/// Discriminant of [`DomainError`], for callers that only branch on the kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unauthorized,
    NotEnoughBudget,
    ForeignMismatch,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn foreign_mismatch(msg: impl Into<String>) -> Self {
        Self::ForeignMismatch(msg.into())
    }

    /// Invalid identifiers are reported as validation failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) | DomainError::InvalidId(_) => ErrorKind::Validation,
            DomainError::NotFound => ErrorKind::NotFound,
            DomainError::Unauthorized => ErrorKind::Unauthorized,
            DomainError::NotEnoughBudget { .. } => ErrorKind::NotEnoughBudget,
            DomainError::ForeignMismatch(_) => ErrorKind::ForeignMismatch,
        }
    }
}
