//! In-memory implementation of both repository contracts.
//!
//! Mirrors the PostgreSQL schema closely enough for the HTTP layer to be
//! exercised without a database: unique short codes, all-or-nothing batch
//! inserts, a foreign key from history to links, insertion-ordered history.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{HistoryEntry, Link, NewHistoryEntry, NewLink};
use crate::domain::repositories::{HistoryRepository, LinkRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    links: Vec<Link>,
    history: Vec<HistoryEntry>,
    next_link_id: i64,
    next_history_id: i64,
}

impl Tables {
    fn code_taken(&self, code: &str) -> bool {
        self.links.iter().any(|l| l.short_code == code)
    }

    fn insert_link(&mut self, new_link: NewLink) -> Link {
        self.next_link_id += 1;
        let link = Link::new(
            self.next_link_id,
            new_link.original_url,
            new_link.short_code,
            new_link.short_url,
            true,
            0,
            Utc::now(),
        );
        self.links.push(link.clone());
        link
    }

    fn link_mut(&mut self, link_id: i64) -> Result<&mut Link, AppError> {
        self.links
            .iter_mut()
            .find(|l| l.id == link_id)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "link_id": link_id })))
    }
}

/// Process-local store implementing [`LinkRepository`] and [`HistoryRepository`].
///
/// The lock is never held across an `.await`.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    available: AtomicBool,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Controls what [`LinkRepository::ping`] reports.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Removes a link and, like `ON DELETE CASCADE`, all of its history.
    ///
    /// Returns `false` if no link had this id.
    pub fn purge_link(&self, link_id: i64) -> bool {
        let mut tables = self.lock();
        let before = tables.links.len();
        tables.links.retain(|l| l.id != link_id);
        tables.history.retain(|h| h.link_id != link_id);
        tables.links.len() != before
    }

    /// Number of stored links, active or not.
    pub fn link_count(&self) -> usize {
        self.lock().links.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_code(code: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": "short_link_short_code_key", "code": code }),
    )
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tables = self.lock();

        if tables.code_taken(&new_link.short_code) {
            return Err(duplicate_code(&new_link.short_code));
        }

        Ok(tables.insert_link(new_link))
    }

    async fn create_many(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError> {
        let mut tables = self.lock();

        let mut seen = HashSet::with_capacity(new_links.len());
        for new_link in &new_links {
            if tables.code_taken(&new_link.short_code) || !seen.insert(new_link.short_code.as_str())
            {
                return Err(duplicate_code(&new_link.short_code));
            }
        }

        Ok(new_links
            .into_iter()
            .map(|new_link| tables.insert_link(new_link))
            .collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let tables = self.lock();
        Ok(tables.links.iter().find(|l| l.short_code == code).cloned())
    }

    async fn increment_usage(&self, link_id: i64) -> Result<Link, AppError> {
        let mut tables = self.lock();
        let link = tables.link_mut(link_id)?;
        link.usages_count += 1;
        Ok(link.clone())
    }

    async fn soft_delete(&self, link_id: i64) -> Result<Link, AppError> {
        let mut tables = self.lock();
        let link = tables.link_mut(link_id)?;
        link.is_active = false;
        Ok(link.clone())
    }

    async fn ping(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryRepository for InMemoryStore {
    async fn record_visit(&self, new_entry: NewHistoryEntry) -> Result<HistoryEntry, AppError> {
        let mut tables = self.lock();

        if !tables.links.iter().any(|l| l.id == new_entry.link_id) {
            return Err(AppError::internal(
                "Foreign key violation",
                json!({ "link_id": new_entry.link_id }),
            ));
        }

        tables.next_history_id += 1;
        let entry = HistoryEntry::new(
            tables.next_history_id,
            new_entry.link_id,
            new_entry.client_address,
            Utc::now(),
        );
        tables.history.push(entry.clone());

        Ok(entry)
    }

    async fn list_by_link(
        &self,
        link_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<HistoryEntry>, AppError> {
        let tables = self.lock();

        Ok(tables
            .history
            .iter()
            .filter(|h| h.link_id == link_id)
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str) -> NewLink {
        NewLink {
            original_url: format!("https://example.com/{code}"),
            short_code: code.to_string(),
            short_url: format!("http://s/{code}"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_code() {
        let store = InMemoryStore::new();

        store.create(new_link("dup00001")).await.unwrap();
        let err = store.create(new_link("dup00001")).await.unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_create_many_is_all_or_nothing() {
        let store = InMemoryStore::new();
        store.create(new_link("taken001")).await.unwrap();

        let result = store
            .create_many(vec![new_link("fresh001"), new_link("taken001")])
            .await;

        assert!(result.unwrap_err().is_conflict());
        assert!(store.find_by_code("fresh001").await.unwrap().is_none());
        assert_eq!(store.link_count(), 1);
    }

    #[tokio::test]
    async fn test_create_many_rejects_duplicates_within_batch() {
        let store = InMemoryStore::new();

        let result = store
            .create_many(vec![new_link("same0001"), new_link("same0001")])
            .await;

        assert!(result.unwrap_err().is_conflict());
    }

    #[tokio::test]
    async fn test_record_visit_requires_existing_link() {
        let store = InMemoryStore::new();

        let result = store
            .record_visit(NewHistoryEntry {
                link_id: 99,
                client_address: "127.0.0.1:1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_purge_link_cascades_history() {
        let store = InMemoryStore::new();
        let link = store.create(new_link("purge001")).await.unwrap();

        for port in 0..3 {
            store
                .record_visit(NewHistoryEntry {
                    link_id: link.id,
                    client_address: format!("127.0.0.1:{port}"),
                })
                .await
                .unwrap();
        }

        assert!(store.purge_link(link.id));
        assert!(store.find_by_code("purge001").await.unwrap().is_none());
        assert!(store.list_by_link(link.id, 10, 0).await.unwrap().is_empty());
        assert!(!store.purge_link(link.id));
    }

    #[tokio::test]
    async fn test_ping_follows_availability() {
        let store = InMemoryStore::new();
        assert!(store.ping().await);

        store.set_available(false);
        assert!(!store.ping().await);
    }
}
