// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("wrong credentials")]
    WrongCredentials,

    #[error("insufficient role: {0}")]
    InsufficientRole(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Transport-independent error classification the API layer maps to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    ValidationFailed,
    WrongCredentials,
    InsufficientRole,
    StorageFailure,
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_role(msg: impl Into<String>) -> Self {
        Self::InsufficientRole(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => {
                ErrorKind::ValidationFailed
            }
            Self::Domain(DomainError::NotFound(_)) | Self::NotFound(_) => ErrorKind::NotFound,
            Self::Domain(DomainError::Conflict(_)) | Self::Conflict(_) => ErrorKind::Conflict,
            Self::Domain(DomainError::Persistence(_)) | Self::Storage(_) => {
                ErrorKind::StorageFailure
            }
            Self::WrongCredentials => ErrorKind::WrongCredentials,
            Self::InsufficientRole(_) => ErrorKind::InsufficientRole,
        }
    }
}
