//! Business logic services for the application layer.

pub mod link_service;
pub mod usage_service;

pub use link_service::{LinkService, LinkSettings, MAX_CODE_ATTEMPTS};
pub use usage_service::{HistoryPage, UsageInfo, UsageService};
