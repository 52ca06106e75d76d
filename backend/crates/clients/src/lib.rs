//! Clients Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Client entity, repository traits
//! - `application/` - Create use case, request validator, entity adapter
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Clients are keyed by their tax document. A create request is validated
//! as a whole, adapted into a [`Client`](domain::entity::Client) and written
//! with overwrite semantics.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{CreateClientInput, CreateClientUseCase};
pub use domain::{Client, ClientRepository};
pub use error::{ClientsError, ClientsResult};
pub use infra::{InMemoryClientRepository, PgClientRepository};
pub use presentation::router::{clients_router, clients_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::AppError,
    errors::{AppErrors, AppResult},
    kind::ErrorKind,
};
