//! PostgreSQL Repository Implementation
//!
//! One JSONB item per client in the `clients` table, keyed by document.

use kernel::document::Document;
use sqlx::PgPool;

use crate::domain::entity::Client;
use crate::domain::repository::ClientRepository;
use crate::error::{ClientsError, ClientsResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ClientRepository for PgClientRepository {
    async fn write(&self, client: &Client) -> ClientsResult<()> {
        let item = serde_json::to_value(client)?;

        sqlx::query(
            r#"
            INSERT INTO clients (document, item, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (document) DO UPDATE
            SET item = EXCLUDED.item,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(client.document.as_str())
        .bind(item)
        .execute(&self.pool)
        .await?;

        tracing::debug!(document = %client.document, "Client item written");

        Ok(())
    }

    async fn read_by_key(&self, document: &Document) -> ClientsResult<Client> {
        let item = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT item FROM clients WHERE document = $1",
        )
        .bind(document.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match item {
            Some(item) => {
                tracing::debug!(document = %document, "Client item read");
                Ok(serde_json::from_value(item)?)
            }
            None => {
                tracing::warn!(document = %document, "Client item not found");
                Err(ClientsError::NotFound {
                    document: document.to_string(),
                })
            }
        }
    }
}
