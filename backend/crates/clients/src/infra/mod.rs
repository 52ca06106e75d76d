//! Infrastructure Layer
//!
//! Store implementations of the client repository port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryClientRepository;
pub use postgres::PgClientRepository;
