//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link record store.
///
/// Implementations must enforce `short_code` uniqueness themselves (a unique
/// constraint, not a prior lookup) and apply click increments as a single
/// atomic update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`AppError::StoreUnavailable`] when the store does not
/// answer in time or the connection is lost, and [`AppError::Store`] on other
/// database errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the short code already exists.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the oldest link whose original URL is byte-identical to `original_url`.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically adds one click and returns the updated link.
    ///
    /// Returns `Ok(None)` if no link has that code.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts links and sums their clicks in one consistent read.
    async fn totals(&self) -> Result<LinkTotals, AppError>;

    /// Checks that the store answers.
    async fn ping(&self) -> Result<(), AppError>;
}
