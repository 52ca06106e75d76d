//! In-memory Repository Implementation
//!
//! Process-local store backing the test fakes; the api binary always uses Postgres.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::document::Document;
use tokio::sync::RwLock;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::error::{ClientsError, ClientsResult};

/// Clients keyed by document string
#[derive(Clone, Default)]
pub struct InMemoryClientRepository {
    items: Arc<RwLock<HashMap<String, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl ClientRepository for InMemoryClientRepository {
    async fn write(&self, client: &Client) -> ClientsResult<()> {
        self.items
            .write()
            .await
            .insert(client.document.to_string(), client.clone());

        tracing::debug!(document = %client.document, "Client item written");
        Ok(())
    }

    async fn read_by_key(&self, document: &Document) -> ClientsResult<Client> {
        match self.items.read().await.get(document.as_str()) {
            Some(client) => Ok(client.clone()),
            None => {
                tracing::warn!(document = %document, "Client item not found");
                Err(ClientsError::NotFound {
                    document: document.to_string(),
                })
            }
        }
    }
}
