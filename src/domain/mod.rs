//! Domain layer: entities and repository contracts.
//!
//! Nothing in here knows about HTTP or PostgreSQL.
//!
//! - [`entities`] - [`entities::Link`] and [`entities::HistoryEntry`]
//! - [`repositories`] - store traits implemented in `crate::infrastructure::persistence`
//!
//! # Link lifecycle
//!
//! A link is created active and can only ever move to inactive (soft delete).
//! Redirects bump `usages_count` and append one [`entities::HistoryEntry`].

pub mod entities;
pub mod repositories;
