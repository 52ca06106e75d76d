//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::document::Document;

use crate::domain::entity::Client;
use crate::error::ClientsResult;

/// Client repository trait
#[trait_variant::make(ClientRepository: Send)]
pub trait LocalClientRepository {
    /// Persist a client, overwriting any item stored under the same document
    async fn write(&self, client: &Client) -> ClientsResult<()>;

    /// Fetch the client stored under the document
    ///
    /// Returns `ClientsError::NotFound` on a miss.
    async fn read_by_key(&self, document: &Document) -> ClientsResult<Client>;
}
