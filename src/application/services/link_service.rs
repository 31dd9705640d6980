//! Link creation, lookup and deletion service.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::{ensure_http_url, validate_original_url};

/// Total number of inserts tried before a code collision becomes fatal.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Settings fixed at start-up and shared by every request.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Length of generated short codes.
    pub code_length: usize,
    /// Public prefix of short URLs, always ending with `/`.
    pub base_url: Url,
    /// Upper bound for `create_short_links`.
    pub max_batch_size: usize,
}

/// Service for creating, resolving and deleting short links.
///
/// The store's unique constraint is the only uniqueness guarantee for codes:
/// a conflicting insert is retried with fresh codes, up to
/// [`MAX_CODE_ATTEMPTS`] inserts in total.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    settings: LinkSettings,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, settings: LinkSettings) -> Self {
        Self {
            link_repository,
            settings,
        }
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    /// Shortens one URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL lacks the `http` marker;
    /// nothing is persisted in that case.
    ///
    /// Returns [`AppError::Internal`] if every attempt hit a taken code, or on
    /// database errors.
    pub async fn create_short_link(&self, original_url: String) -> Result<Link, AppError> {
        ensure_http_url(&original_url)?;

        let repository = Arc::clone(&self.link_repository);
        let link = self
            .with_code_retry(|| {
                let repository = Arc::clone(&repository);
                let new_link = self.new_link(original_url.clone());
                async move { repository.create(new_link).await }
            })
            .await?;

        metrics::counter!("links_created_total").increment(1);
        tracing::info!(code = %link.short_code, link_id = link.id, "Short link created");

        Ok(link)
    }

    /// Shortens several URLs in one all-or-nothing insert.
    ///
    /// Links come back in the order of `original_urls`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the batch exceeds
    /// `max_batch_size` or any URL is invalid (the first offending index is
    /// reported); nothing is persisted in that case.
    ///
    /// Returns [`AppError::Internal`] if every attempt hit a taken code, or on
    /// database errors.
    pub async fn create_short_links(
        &self,
        original_urls: Vec<String>,
    ) -> Result<Vec<Link>, AppError> {
        if original_urls.len() > self.settings.max_batch_size {
            return Err(AppError::bad_request(
                "Batch is too large",
                json!({
                    "size": original_urls.len(),
                    "max_batch_size": self.settings.max_batch_size,
                }),
            ));
        }

        if let Some(index) = original_urls
            .iter()
            .position(|url| validate_original_url(url).is_err())
        {
            return Err(AppError::bad_request(
                "the value must be an http link",
                json!({ "index": index, "original_url": original_urls[index] }),
            ));
        }

        if original_urls.is_empty() {
            return Ok(Vec::new());
        }

        let repository = Arc::clone(&self.link_repository);
        let links = self
            .with_code_retry(|| {
                let repository = Arc::clone(&repository);
                let new_links = original_urls
                    .iter()
                    .map(|url| self.new_link(url.clone()))
                    .collect();
                async move { repository.create_many(new_links).await }
            })
            .await?;

        metrics::counter!("links_created_total").increment(links.len() as u64);
        tracing::info!(count = links.len(), "Short links created in batch");

        Ok(links)
    }

    /// Looks up a link by code, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Looks up a link that can still be followed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Gone`] for a deleted link.
    pub async fn resolve_active(&self, code: &str) -> Result<Link, AppError> {
        let link = self.get_link(code).await?;

        if link.is_deleted() {
            return Err(AppError::gone(
                "Short link has been deleted",
                json!({ "code": code }),
            ));
        }

        Ok(link)
    }

    /// Soft-deletes a link.
    ///
    /// Deleting twice is an error: the second call sees an inactive link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Gone`] for an already deleted link.
    pub async fn delete_link(&self, code: &str) -> Result<Link, AppError> {
        let link = self.resolve_active(code).await?;
        let link = self.link_repository.soft_delete(link.id).await?;

        metrics::counter!("links_deleted_total").increment(1);
        tracing::info!(code = %code, link_id = link.id, "Short link deleted");

        Ok(link)
    }

    /// Reports whether the store answers.
    pub async fn is_store_available(&self) -> bool {
        self.link_repository.ping().await
    }

    /// Public URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        self.settings
            .base_url
            .join(code)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}{}", self.settings.base_url, code))
    }

    fn new_link(&self, original_url: String) -> NewLink {
        let short_code = generate_code(self.settings.code_length);
        let short_url = self.short_url(&short_code);

        NewLink {
            original_url,
            short_code,
            short_url,
        }
    }

    /// Runs `insert` until it stops failing with a code conflict.
    async fn with_code_retry<T, F, Fut>(&self, insert: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let strategy = FixedInterval::from_millis(0).take(MAX_CODE_ATTEMPTS - 1);

        RetryIf::start(strategy, insert, |e: &AppError| {
            let collided = e.is_conflict();
            if collided {
                metrics::counter!("short_code_collisions_total").increment(1);
                tracing::warn!(error = %e, "Short code collision, retrying");
            }
            collided
        })
        .await
        .map_err(|e| {
            if e.is_conflict() {
                AppError::internal(
                    "Failed to issue a unique short code",
                    json!({ "attempts": MAX_CODE_ATTEMPTS }),
                )
            } else {
                e
            }
        })
    }
}
