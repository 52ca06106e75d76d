//! PostgreSQL Repository Implementation

use kernel::document::Document;
use sqlx::PgPool;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn write(&self, user: &User) -> UsersResult<()> {
        let item = serde_json::to_value(user)?;

        sqlx::query(
            r#"
            INSERT INTO users (document, item, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (document) DO UPDATE
            SET item = EXCLUDED.item,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.document.as_str())
        .bind(item)
        .execute(&self.pool)
        .await?;

        tracing::debug!(document = %user.document, "User item written");

        Ok(())
    }

    async fn read_by_key(&self, document: &Document) -> UsersResult<User> {
        let item = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT item FROM users WHERE document = $1",
        )
        .bind(document.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(item) = item else {
            tracing::warn!(document = %document, "User item not found");
            return Err(UsersError::NotFound {
                document: document.to_string(),
            });
        };

        tracing::debug!(document = %document, "User item read");
        Ok(serde_json::from_value(item)?)
    }
}
