//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - link storage on PostgreSQL
//! - [`PgHistoryRepository`] - visit history on PostgreSQL
//! - [`InMemoryStore`] - both contracts in process memory, for tests

pub mod memory;
pub mod pg_history_repository;
pub mod pg_link_repository;

pub use memory::InMemoryStore;
pub use pg_history_repository::PgHistoryRepository;
pub use pg_link_repository::PgLinkRepository;
