//! Domain Layer
//!
//! Contains the user entity, value objects, and the repository port.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::User;
pub use repository::{LocalUserRepository, UserRepository};
