//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new active link with a zero usage counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Inserts several links at once.
    ///
    /// The insert is all-or-nothing: a single conflicting code aborts the
    /// whole batch. Returned links are in the same order as `new_links`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if any short code is already taken
    /// (including duplicates inside the batch).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_many(&self, new_links: Vec<NewLink>) -> Result<Vec<Link>, AppError>;

    /// Finds a link by its short code, active or not.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically adds one to `usages_count` and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_usage(&self, link_id: i64) -> Result<Link, AppError>;

    /// Marks a link inactive. Counter and history are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn soft_delete(&self, link_id: i64) -> Result<Link, AppError>;

    /// Probes the backing store. Never fails: connection problems yield `false`.
    async fn ping(&self) -> bool;
}
