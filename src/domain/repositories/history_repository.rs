//! Repository trait for link usage history.

use crate::domain::entities::{HistoryEntry, NewHistoryEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of redirect events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHistoryRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_history.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Records one visit of a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// `link_id` that does not reference an existing link.
    async fn record_visit(&self, new_entry: NewHistoryEntry) -> Result<HistoryEntry, AppError>;

    /// Lists visits of a link in insertion order.
    ///
    /// # Arguments
    ///
    /// - `limit` - Maximum number of entries to return
    /// - `offset` - Number of entries to skip
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_link(
        &self,
        link_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, AppError>;
}
