//! Handler for service-wide statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns link and click totals.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_urls": 2,
///   "total_clicks": 5,
///   "average_clicks": 2.5
/// }
/// ```
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats().await?;

    Ok(Json(stats.into()))
}
