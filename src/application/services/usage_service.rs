//! Visit recording and usage statistics service.

use std::sync::Arc;

use crate::domain::entities::{HistoryEntry, Link, NewHistoryEntry};
use crate::domain::repositories::{HistoryRepository, LinkRepository};
use crate::error::AppError;

/// Window into a link's visit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPage {
    pub limit: i64,
    pub offset: i64,
}

/// Usage of one link.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageInfo {
    pub click_count: i32,
    /// Present only when a [`HistoryPage`] was requested.
    pub detail: Option<Vec<HistoryEntry>>,
}

/// Service for tracking redirects and reporting how often links are used.
pub struct UsageService<L: LinkRepository + ?Sized, H: HistoryRepository + ?Sized> {
    link_repository: Arc<L>,
    history_repository: Arc<H>,
}

impl<L, H> UsageService<L, H>
where
    L: LinkRepository + ?Sized,
    H: HistoryRepository + ?Sized,
{
    /// Creates a new usage service.
    pub fn new(link_repository: Arc<L>, history_repository: Arc<H>) -> Self {
        Self {
            link_repository,
            history_repository,
        }
    }

    /// Records a visit of `link` and bumps its counter.
    ///
    /// The history entry is written first; the counter update is a single
    /// atomic statement in the store, so concurrent visits are all counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit(&self, link: &Link, client_address: String) -> Result<Link, AppError> {
        self.history_repository
            .record_visit(NewHistoryEntry {
                link_id: link.id,
                client_address: client_address.clone(),
            })
            .await?;

        let updated = self.link_repository.increment_usage(link.id).await?;

        metrics::counter!("link_redirects_total").increment(1);
        tracing::debug!(
            code = %updated.short_code,
            link_id = updated.id,
            client_address = %client_address,
            usages_count = updated.usages_count,
            "Visit recorded"
        );

        Ok(updated)
    }

    /// Reports the click count of `link` and, if `page` is given, a slice of
    /// its history in visit order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn usage_info(
        &self,
        link: &Link,
        page: Option<HistoryPage>,
    ) -> Result<UsageInfo, AppError> {
        let detail = match page {
            Some(page) => Some(
                self.history_repository
                    .list_by_link(link.id, page.limit, page.offset)
                    .await?,
            ),
            None => None,
        };

        Ok(UsageInfo {
            click_count: link.usages_count,
            detail,
        })
    }
}
