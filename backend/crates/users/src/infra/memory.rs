//! In-memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use kernel::document::Document;
use tokio::sync::RwLock;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};

/// Users keyed by document string
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    items: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
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

impl UserRepository for InMemoryUserRepository {
    async fn write(&self, user: &User) -> UsersResult<()> {
        self.items
            .write()
            .await
            .insert(user.document.to_string(), user.clone());

        tracing::debug!(document = %user.document, "User item written");
        Ok(())
    }

    async fn read_by_key(&self, document: &Document) -> UsersResult<User> {
        let items = self.items.read().await;
        items.get(document.as_str()).cloned().ok_or_else(|| {
            tracing::warn!(document = %document, "User item not found");
            UsersError::NotFound {
                document: document.to_string(),
            }
        })
    }
}
