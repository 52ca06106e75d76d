//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::document::Document;

use crate::domain::entity::User;
use crate::error::UsersResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a user, overwriting any item stored under the same document
    async fn write(&self, user: &User) -> UsersResult<()>;

    /// Fetch the user stored under the document
    ///
    /// Returns `UsersError::NotFound` on a miss.
    async fn read_by_key(&self, document: &Document) -> UsersResult<User>;
}
