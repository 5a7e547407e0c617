//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/page",
///   "custom_code": "my-link"
/// }
/// ```
///
/// `custom_code` is optional. Submitting a URL that is already registered
/// returns the existing link unchanged, even when a custom code is given.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com/page",
///   "short_url": "http://localhost:8000/my-link",
///   "clicks": 0,
///   "created_at": "2025-01-01T12:00:00Z",
///   "title": null
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid_url`, `invalid_code` or `code_taken`.
/// A body that is not valid JSON or lacks `original_url` is `invalid_url`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .shorten(&payload.original_url, payload.custom_code())
        .await?;

    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(LinkResponse::new(link, short_url)))
}
