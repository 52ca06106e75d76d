//! Domain Layer
//!
//! Contains the client entity and the repository port.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::Client;
pub use repository::{ClientRepository, LocalClientRepository};
