//! History entry recorded for every successful redirect.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A single visit of a short link.
///
/// Entries are append-only. They disappear only when the owning link row is
/// removed, through the `ON DELETE CASCADE` foreign key.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    #[sqlx(rename = "short_link_id")]
    pub link_id: i64,
    /// `host:port` of the requester.
    pub client_address: String,
    pub used_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(id: i64, link_id: i64, client_address: String, used_at: DateTime<Utc>) -> Self {
        Self {
            id,
            link_id,
            client_address,
            used_at,
        }
    }
}

/// Input data for recording a visit. The timestamp is set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub link_id: i64,
    pub client_address: String,
}
