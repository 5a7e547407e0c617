//! API route configuration.

use crate::api::handlers::{info_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short link
/// - `GET  /info/{short_code}`   - Link details without counting a click
/// - `GET  /stats`               - Totals across all links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{short_code}", get(info_handler))
        .route("/stats", get(stats_handler))
}
