//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL with its activity flag and click counter.
///
/// Links are never removed by the service. Deleting one flips `is_active`
/// to `false`; the record and its history stay in place.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub is_active: bool,
    pub usages_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        short_url: String,
        is_active: bool,
        usages_count: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            short_url,
            is_active,
            usages_count,
            created_at,
        }
    }

    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        !self.is_active
    }
}

/// Input data for creating a new link.
///
/// New links always start active with a zero usage counter.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "abc123XY".to_string(),
            "http://127.0.0.1:8080/api/v1/abc123XY".to_string(),
            true,
            0,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "abc123XY");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.usages_count, 0);
        assert_eq!(link.created_at, now);
        assert!(!link.is_deleted());
    }

    #[test]
    fn test_link_is_deleted() {
        let link = Link::new(
            2,
            "https://example.com".to_string(),
            "code".to_string(),
            "http://s/code".to_string(),
            false,
            3,
            Utc::now(),
        );

        assert!(link.is_deleted());
    }
}
