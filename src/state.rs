//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, UsageService};
use crate::domain::repositories::{HistoryRepository, LinkRepository};

/// Link service over whichever store the process was started with.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Usage service over whichever store the process was started with.
pub type DynUsageService = UsageService<dyn LinkRepository, dyn HistoryRepository>;

/// State shared by every request. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub usage_service: Arc<DynUsageService>,
}

impl AppState {
    /// Wires both services onto the given repositories.
    ///
    /// PostgreSQL in production, [`crate::infrastructure::persistence::InMemoryStore`]
    /// in tests; a single store may back both traits.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        history: Arc<dyn HistoryRepository>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(links.clone(), settings)),
            usage_service: Arc::new(UsageService::new(links, history)),
        }
    }
}
