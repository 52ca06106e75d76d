//! Clients Error Types
//!
//! This module provides client-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::document::DocumentError;
use kernel::error::{app_error::AppError, errors::AppErrors, kind::ErrorKind};
use kernel::validation::codes;
use thiserror::Error;

/// Clients-specific result type alias
pub type ClientsResult<T> = Result<T, ClientsError>;

/// Code reported for every store failure
pub const REPOSITORY_ERROR: &str = "Repository.Error";

/// Code reported when the caller abandons the request
pub const REQUEST_CANCELLED: &str = "Request.Cancelled";

/// Code reported when a lookup misses
pub const CLIENT_NOT_FOUND: &str = "Client.NotFound";

/// Clients-specific error variants
#[derive(Debug, Error)]
pub enum ClientsError {
    /// No client stored under the document
    #[error("Client with document '{document}' was not found.")]
    NotFound { document: String },

    /// Document rejected while building the entity
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

impl ClientsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientsError::NotFound { .. } => ErrorKind::NotFound,
            ClientsError::Document(_) => ErrorKind::Validation,
            ClientsError::Database(_) | ClientsError::Serialization(_) => ErrorKind::Unexpected,
            ClientsError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Stable code surfaced to callers
    pub fn code(&self) -> &'static str {
        match self {
            ClientsError::NotFound { .. } => CLIENT_NOT_FOUND,
            ClientsError::Document(DocumentError::Empty) => codes::EMPTY_DOCUMENT,
            ClientsError::Document(DocumentError::InvalidLength { .. }) => codes::DOCUMENT_LENGTH,
            ClientsError::Database(_) | ClientsError::Serialization(_) => REPOSITORY_ERROR,
            ClientsError::Cancelled => REQUEST_CANCELLED,
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
            "An error occurred while accessing the client repository.".to_string()
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
            ClientsError::Database(e) => {
                tracing::error!(error = %e, "Clients database error");
            }
            ClientsError::Serialization(e) => {
                tracing::error!(error = %e, "Clients item serialization error");
            }
            ClientsError::NotFound { document } => {
                tracing::warn!(document = %document, "Client not found");
            }
            ClientsError::Document(e) => {
                tracing::warn!(error = %e, "Client document rejected");
            }
            ClientsError::Cancelled => {
                tracing::debug!("Client request cancelled");
            }
        }
    }
}

impl From<ClientsError> for AppError {
    fn from(err: ClientsError) -> Self {
        err.to_app_error()
    }
}
