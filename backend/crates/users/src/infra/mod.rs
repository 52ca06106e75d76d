//! Infrastructure Layer
//!
//! Store implementations of the user repository port.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
