//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`:
//! PostgreSQL for production and an in-memory store for tests.
//! Mock implementations are generated via `mockall` for unit tests.
//!
//! - [`LinkRepository`] - link records (create, lookup, counter, soft delete)
//! - [`HistoryRepository`] - append-only visit history

pub mod history_repository;
pub mod link_repository;

pub use history_repository::HistoryRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
