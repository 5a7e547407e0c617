//! Link registry: creation, lookup and click accounting for short links.

use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::domain::entities::{Link, NewLink, RegistryStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Service owning short link creation, resolution and statistics.
///
/// Uniqueness of short codes is left to the store: a generated code is simply
/// inserted and a `CodeTaken` answer triggers another attempt. No in-process
/// lock is held, so several instances may share one store.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    config: RegistryConfig,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, config: RegistryConfig) -> Self {
        Self {
            link_repository,
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Creates a short link, or returns the existing one for the same URL.
    ///
    /// # Deduplication
    ///
    /// A link whose `original_url` is byte-identical to `original_url` is returned
    /// unchanged, even when `custom_code` is also given. No normalization is applied.
    ///
    /// # Code Allocation
    ///
    /// - If `custom_code` is provided, it is validated and inserted as-is
    /// - Otherwise random codes of the configured length are tried, then codes of
    ///   the fallback length, each up to `code_max_attempts` times
    ///
    /// The whole operation is retried with backoff when the store is unavailable.
    /// A retried attempt starts with the dedup lookup, so an insert that committed
    /// before a timeout is returned instead of duplicated.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL fails syntax validation
    /// - [`AppError::InvalidCode`] if the custom code is malformed or reserved
    /// - [`AppError::CodeTaken`] if the custom code already exists
    /// - [`AppError::CodeSpaceExhausted`] if no free code was found
    /// - [`AppError::StoreUnavailable`] once retries are used up
    pub async fn shorten(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, AppError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(25)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(self.config.store_retry_attempts);

        RetryIf::start(
            strategy,
            || self.try_shorten(original_url, custom_code),
            |e: &AppError| {
                if e.is_retryable() {
                    warn!("Shorten failed on a transient store error, retrying: {}", e);
                    true
                } else {
                    false
                }
            },
        )
        .await
    }

    /// Resolves a short code for redirection and counts the click.
    ///
    /// Returns the link as it is after the increment. The increment is never
    /// retried here; a caller that retries a failed redirect may count twice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| {
                debug!("Resolve miss for code {}", code);
                AppError::not_found(code)
            })
    }

    /// Retrieves a link by its short code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that code.
    pub async fn info(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Returns link count, click sum and average clicks per link.
    pub async fn stats(&self) -> Result<RegistryStats, AppError> {
        let totals = self.link_repository.totals().await?;
        Ok(totals.into())
    }

    /// Checks that the underlying store answers.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), code)
    }

    async fn try_shorten(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, AppError> {
        validate_url(original_url)?;

        if let Some(existing) = self
            .link_repository
            .find_by_original_url(original_url)
            .await?
        {
            debug!("URL already shortened as {}", existing.short_code);
            return Ok(existing);
        }

        let link = match custom_code {
            Some(code) => {
                validate_custom_code(code)?;
                self.link_repository
                    .create(NewLink::new(original_url, code))
                    .await?
            }
            None => self.create_with_generated_code(original_url).await?,
        };

        info!("Created short link {} -> {}", link.short_code, link.original_url);
        Ok(link)
    }

    /// Inserts under random codes until the store accepts one.
    async fn create_with_generated_code(&self, original_url: &str) -> Result<Link, AppError> {
        let lengths = [
            self.config.short_code_length,
            self.config.fallback_code_length(),
        ];
        let mut attempts = 0;

        for length in lengths {
            for _ in 0..self.config.code_max_attempts {
                attempts += 1;
                let code = generate_code(length);

                if is_reserved_code(&code) {
                    continue;
                }

                match self
                    .link_repository
                    .create(NewLink::new(original_url, code.as_str()))
                    .await
                {
                    Ok(link) => return Ok(link),
                    Err(AppError::CodeTaken { .. }) => {
                        debug!("Generated code {} collided", code);
                    }
                    Err(e) => return Err(e),
                }
            }

            warn!(
                "No free code of length {} after {} attempts",
                length, self.config.code_max_attempts
            );
        }

        Err(AppError::CodeSpaceExhausted { attempts })
    }
}
