//! Application Layer
//!
//! Use cases and the request-to-entity pipeline.

pub mod adapter;
pub mod create_client;
pub mod validator;

// Re-exports
pub use create_client::{CreateClientInput, CreateClientUseCase};
