//! Get User By Document Use Case
//!
//! Exact-key lookup. Malformed documents are rejected before the store is
//! touched.

use std::sync::Arc;

use kernel::document::{Document, DocumentError};
use kernel::error::app_error::AppError;
use kernel::error::errors::AppResult;
use tokio_util::sync::CancellationToken;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::UsersError;

pub const DOCUMENT_EMPTY: &str = "User.Document.Empty";
pub const DOCUMENT_INVALID_FORMAT: &str = "User.Document.InvalidFormat";

/// Get user by document use case
pub struct GetUserByDocumentUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserByDocumentUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, document: &str, cancel: &CancellationToken) -> AppResult<User> {
        let document = Document::parse(document).map_err(|e| match e {
            DocumentError::Empty => {
                AppError::validation(DOCUMENT_EMPTY, "The document cannot be empty.")
            }
            DocumentError::InvalidLength { .. } => AppError::validation(
                DOCUMENT_INVALID_FORMAT,
                "The document must have 11 or 14 characters.",
            ),
        })?;

        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(UsersError::Cancelled),
            result = self.repo.read_by_key(&document) => result,
        };
        let user = read.map_err(UsersError::into_app_errors)?;

        tracing::debug!(document = %user.document, "User found");

        Ok(user)
    }
}
