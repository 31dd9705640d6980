//! DTOs for link usage status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::{HistoryPage, UsageInfo};
use crate::domain::entities::HistoryEntry;

const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Query parameters of `GET /{code}/status`.
///
/// # Defaults
///
/// - `full-info`: `false`
/// - `max-result`: 10 (at most 1000)
/// - `offset`: 0
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct StatusQuery {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "full-info", default)]
    pub full_info: bool,

    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "max-result", default = "default_page_size")]
    #[validate(range(max = 1000))]
    pub max_result: u32,

    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub offset: u32,
}

impl StatusQuery {
    /// History window to fetch, or `None` when only the count is wanted.
    pub fn history_page(&self) -> Option<HistoryPage> {
        self.full_info.then(|| HistoryPage {
            limit: i64::from(self.max_result),
            offset: i64::from(self.offset),
        })
    }
}

/// One visit in a status report.
#[derive(Debug, Serialize)]
pub struct UsageDetail {
    pub use_at: DateTime<Utc>,
    pub client_ip: String,
}

impl From<HistoryEntry> for UsageDetail {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            use_at: entry.used_at,
            client_ip: entry.client_address,
        }
    }
}

/// Response of `GET /{code}/status`.
///
/// `detail` is omitted entirely unless `full-info=true` was requested.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub click_count: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<UsageDetail>>,
}

impl From<UsageInfo> for StatusResponse {
    fn from(info: UsageInfo) -> Self {
        Self {
            click_count: info.click_count,
            detail: info
                .detail
                .map(|entries| entries.into_iter().map(UsageDetail::from).collect()),
        }
    }
}
