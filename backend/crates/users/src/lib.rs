//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, Address / ProfileImage value objects, repository traits
//! - `application/` - Create and get-by-document use cases, validator, adapter
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with a mandatory postal address
//! - Optional profile image reference partitioned by upload date
//! - Exact-key lookup by tax document

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use application::{CreateUserUseCase, GetUserByDocumentUseCase};
pub use domain::{User, UserRepository};
pub use error::{UsersError, UsersResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::AppError,
    errors::{AppErrors, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::{address::*, profile_image::*};
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
