use thiserror::Error;

use eventadmin_core::{Credits, DomainError, ErrorKind};
use eventadmin_infra::ProviderError;

pub type AdminResult<T> = Result<T, AdminError>;

/// Caller-visible failure of an admin operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    /// Malformed or incomplete request; nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Referenced entity does not exist.
    #[error("not found")]
    NotFound,
    /// Entity belongs to another organizer.
    #[error("unauthorized")]
    Unauthorized,
    /// User allocation would exceed the event budget; nothing was persisted.
    #[error("not enough budget: requested {requested}, remaining {remaining}")]
    NotEnoughBudget { requested: Credits, remaining: Credits },
    /// Child entity addressed through an event it does not belong to.
    #[error("foreign key mismatch: {0}")]
    ForeignMismatch(String),
    /// The data provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<DomainError> for AdminError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => AdminError::Validation(msg),
            DomainError::InvalidId(msg) => AdminError::Validation(msg),
            DomainError::NotFound => AdminError::NotFound,
            DomainError::Unauthorized => AdminError::Unauthorized,
            DomainError::NotEnoughBudget {
                requested,
                remaining,
            } => AdminError::NotEnoughBudget {
                requested,
                remaining,
            },
            DomainError::ForeignMismatch(msg) => AdminError::ForeignMismatch(msg),
        }
    }
}

impl AdminError {
    /// Domain kind of the failure; `None` for provider failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AdminError::Validation(_) => Some(ErrorKind::Validation),
            AdminError::NotFound => Some(ErrorKind::NotFound),
            AdminError::Unauthorized => Some(ErrorKind::Unauthorized),
            AdminError::NotEnoughBudget { .. } => Some(ErrorKind::NotEnoughBudget),
            AdminError::ForeignMismatch(_) => Some(ErrorKind::ForeignMismatch),
            AdminError::Provider(_) => None,
        }
    }

    /// Business-rule rejections, as opposed to bad input or backend failure.
    pub fn is_rule_rejection(&self) -> bool {
        matches!(
            self,
            AdminError::Unauthorized
                | AdminError::NotEnoughBudget { .. }
                | AdminError::ForeignMismatch(_)
        )
    }
}
