//! Handler for link info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link without counting a click.
///
/// # Endpoint
///
/// `GET /api/info/{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn info_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.info(&short_code).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(LinkResponse::new(link, short_url)))
}
