//! Create User Use Case
//!
//! Validates the request, adapts it into a [`User`] and writes it.

use std::sync::Arc;

use kernel::error::errors::{AppErrors, AppResult};
use tokio_util::sync::CancellationToken;

use crate::application::config::UsersConfig;
use crate::application::{adapter, validator};
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::UsersError;

/// Address payload of a create request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInput {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

/// Create user input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserInput {
    pub document: String,
    pub name: String,
    pub email: String,
    pub address: Option<AddressInput>,
    /// Original name of the uploaded picture, if any
    pub profile_image_file_name: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        input: CreateUserInput,
        cancel: &CancellationToken,
    ) -> AppResult<User> {
        if let Some(errors) = AppErrors::from_vec(validator::validate(&input)) {
            tracing::warn!(
                errors = errors.len(),
                codes = ?errors.codes(),
                "Create user request rejected"
            );
            return Err(errors);
        }

        let user = adapter::from_input_to_entity(input, &self.config)
            .map_err(UsersError::into_app_errors)?;

        let written = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(UsersError::Cancelled),
            result = self.repo.write(&user) => result,
        };
        written.map_err(UsersError::into_app_errors)?;

        tracing::info!(
            document = %user.document,
            has_profile_image = user.profile_image.is_some(),
            "User created"
        );

        Ok(user)
    }
}
