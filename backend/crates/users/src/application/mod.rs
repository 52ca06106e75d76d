//! Application Layer
//!
//! Use cases and the request-to-entity pipeline.

pub mod adapter;
pub mod config;
pub mod create_user;
pub mod get_user_by_document;
pub mod validator;

// Re-exports
pub use config::UsersConfig;
pub use create_user::{AddressInput, CreateUserInput, CreateUserUseCase};
pub use get_user_by_document::GetUserByDocumentUseCase;
