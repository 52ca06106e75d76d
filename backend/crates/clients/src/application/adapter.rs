//! Client Entity Adapter
//!
//! Maps a validated request into the domain entity.

use kernel::document::Document;

use crate::application::create_client::CreateClientInput;
use crate::domain::entity::Client;
use crate::error::ClientsResult;

/// Trim the request fields and build the entity
///
/// Fails only if the document breaks its invariant, which the validator
/// already guards against.
pub fn from_input_to_entity(input: CreateClientInput) -> ClientsResult<Client> {
    let document = Document::parse(&input.document)?;

    Ok(Client::new(document, input.name.trim(), input.email.trim()))
}
