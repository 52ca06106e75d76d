//! Users Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::document::DocumentError;
use kernel::error::{app_error::AppError, errors::AppErrors, kind::ErrorKind};
use kernel::validation::codes;
use thiserror::Error;

use crate::domain::value_object::{address::AddressError, profile_image::ProfileImageError};

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

/// Code reported for every store failure
pub const REPOSITORY_ERROR: &str = "Repository.Error";

/// Code reported when the caller abandons the request
pub const REQUEST_CANCELLED: &str = "Request.Cancelled";

/// Code reported when a lookup misses
pub const USER_NOT_FOUND: &str = "User.NotFound";

/// Code reported when a create request carries no address
pub const EMPTY_ADDRESS: &str = "EMPTY_ADDRESS";

/// Users-specific error variants
#[derive(Debug, Error)]
pub enum UsersError {
    /// No user stored under the document
    #[error("User with document '{document}' was not found.")]
    NotFound { document: String },

    /// Create request without an address
    #[error("The address cannot be empty.")]
    MissingAddress,

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    ProfileImage(#[from] ProfileImageError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored item could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller cancelled before the store answered
    #[error("The request was cancelled.")]
    Cancelled,
}

impl UsersError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::NotFound { .. } => ErrorKind::NotFound,
            UsersError::MissingAddress
            | UsersError::Address(_)
            | UsersError::ProfileImage(_)
            | UsersError::Document(_) => ErrorKind::Validation,
            UsersError::Database(_) | UsersError::Serialization(_) => {
                ErrorKind::Unexpected
            }
            UsersError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Stable code surfaced to callers
    pub fn code(&self) -> &'static str {
        match self {
            UsersError::NotFound { .. } => USER_NOT_FOUND,
            UsersError::MissingAddress => EMPTY_ADDRESS,
            UsersError::Address(e) => e.code(),
            UsersError::ProfileImage(e) => e.code(),
            UsersError::Document(DocumentError::Empty) => codes::EMPTY_DOCUMENT,
            UsersError::Document(DocumentError::InvalidLength { .. }) => codes::DOCUMENT_LENGTH,
            UsersError::Database(_) | UsersError::Serialization(_) => {
                REPOSITORY_ERROR
            }
            UsersError::Cancelled => REQUEST_CANCELLED,
        }
    }

    pub fn is_store_failure(&self) -> bool {
        self.kind() == ErrorKind::Unexpected
    }

    /// Convert to AppError
    ///
    /// Store failures get a generic description; the detail stays in logs.
    pub fn to_app_error(&self) -> AppError {
        let description = if self.is_store_failure() {
            "An error occurred while accessing the user repository.".to_string()
        } else {
            self.to_string()
        };
        AppError::new(self.kind(), self.code(), description)
    }

    /// Log, then convert into a single-element failure list
    pub fn into_app_errors(self) -> AppErrors {
        self.log();
        let app_error = self.to_app_error();
        AppErrors::from(app_error.with_source(self))
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            UsersError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UsersError::Serialization(e) => {
                tracing::error!(error = %e, "Users item serialization error");
            }
            UsersError::NotFound { document } => {
                tracing::warn!(document = %document, "User not found");
            }
            UsersError::MissingAddress
            | UsersError::Address(_)
            | UsersError::ProfileImage(_)
            | UsersError::Document(_) => {
                tracing::warn!(code = self.code(), error = %self, "User entity rejected");
            }
            UsersError::Cancelled => {
                tracing::debug!("User request cancelled");
            }
        }
    }
}

impl From<UsersError> for AppError {
    fn from(err: UsersError) -> Self {
        err.to_app_error()
    }
}
