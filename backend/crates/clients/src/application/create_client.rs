//! Create Client Use Case
//!
//! Validates the request, adapts it into a [`Client`] and writes it.

use std::sync::Arc;

use kernel::error::errors::{AppErrors, AppResult};
use tokio_util::sync::CancellationToken;

use crate::application::{adapter, validator};
use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::error::ClientsError;

/// Create client input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateClientInput {
    pub document: String,
    pub name: String,
    pub email: String,
}

/// Create client use case
pub struct CreateClientUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
}

impl<R> CreateClientUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validation failures never reach the adapter or the repository.
    /// The store call is attempted once; a fired token abandons it.
    pub async fn execute(
        &self,
        input: CreateClientInput,
        cancel: &CancellationToken,
    ) -> AppResult<Client> {
        if let Some(errors) = AppErrors::from_vec(validator::validate(&input)) {
            tracing::warn!(
                errors = errors.len(),
                codes = ?errors.codes(),
                "Create client request rejected"
            );
            return Err(errors);
        }

        let client = adapter::from_input_to_entity(input).map_err(ClientsError::into_app_errors)?;

        let written = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientsError::Cancelled),
            result = self.repo.write(&client) => result,
        };
        written.map_err(ClientsError::into_app_errors)?;

        tracing::info!(document = %client.document, "Client created");

        Ok(client)
    }
}
