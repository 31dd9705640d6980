//! PostgreSQL implementation of history repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{HistoryEntry, NewHistoryEntry};
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `short_link_history` table.
pub struct PgHistoryRepository {
    pool: Arc<PgPool>,
}

impl PgHistoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn record_visit(&self, new_entry: NewHistoryEntry) -> Result<HistoryEntry, AppError> {
        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            INSERT INTO short_link_history (short_link_id, client_address)
            VALUES ($1, $2)
            RETURNING id, short_link_id, client_address, used_at
            "#,
        )
        .bind(new_entry.link_id)
        .bind(&new_entry.client_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn list_by_link(
        &self,
        link_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, short_link_id, client_address, used_at
            FROM short_link_history
            WHERE short_link_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(entries)
    }
}
