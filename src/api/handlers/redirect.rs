//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Every successful lookup counts one click before the redirect is issued.
/// The increment happens in the store as a single update, so concurrent
/// redirects of the same code never lose counts.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&short_code).await?;

    debug!(
        "Redirecting {} -> {} (clicks: {})",
        short_code, link.original_url, link.clicks
    );

    Ok(Redirect::temporary(&link.original_url))
}
