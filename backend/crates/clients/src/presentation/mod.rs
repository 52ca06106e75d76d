//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ClientsAppState;
pub use router::{clients_router, clients_router_generic};
