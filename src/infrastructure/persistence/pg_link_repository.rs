//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO short_link (original_url, short_code, short_url)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_code, short_url, is_active, usages_count, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(&new_link.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn create_many(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError> {
        if new_links.is_empty() {
            return Ok(Vec::new());
        }

        let codes: Vec<String> = new_links.iter().map(|l| l.short_code.clone()).collect();

        // One multi-row statement: either every row is inserted or none is.
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO short_link (original_url, short_code, short_url) ",
        );
        builder.push_values(&new_links, |mut row, link| {
            row.push_bind(&link.original_url)
                .push_bind(&link.short_code)
                .push_bind(&link.short_url);
        });
        builder.build().execute(self.pool.as_ref()).await?;

        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, short_url, is_active, usages_count, created_at
            FROM short_link
            WHERE short_code = ANY($1)
            "#,
        )
        .bind(&codes)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(sort_by_codes(links, &codes))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, original_url, short_code, short_url, is_active, usages_count, created_at
            FROM short_link
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn increment_usage(&self, link_id: i64) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            UPDATE short_link
            SET usages_count = usages_count + 1
            WHERE id = $1
            RETURNING id, original_url, short_code, short_url, is_active, usages_count, created_at
            "#,
        )
        .bind(link_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "link_id": link_id })))
    }

    async fn soft_delete(&self, link_id: i64) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            UPDATE short_link
            SET is_active = FALSE
            WHERE id = $1
            RETURNING id, original_url, short_code, short_url, is_active, usages_count, created_at
            "#,
        )
        .bind(link_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "link_id": link_id })))
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "Database ping failed");
                false
            }
        }
    }
}

/// Reorders re-queried links to follow the order of `codes`.
///
/// `WHERE short_code = ANY($1)` gives no ordering guarantee.
fn sort_by_codes(mut links: Vec<Link>, codes: &[String]) -> Vec<Link> {
    let position: HashMap<&str, usize> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| (code.as_str(), i))
        .collect();

    links.sort_by_key(|link| {
        position
            .get(link.short_code.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });
    links
}
