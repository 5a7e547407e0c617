//! Request extractors that report failures in the API error format.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and validated before the handler runs.
///
/// Malformed JSON, a missing field or a failed validation rule all reject
/// with [`AppError`] instead of axum's plain-text 4xx.
///
/// ```rust,ignore
/// async fn handler(ValidatedJson(body): ValidatedJson<ShortenRequest>) -> ... {}
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self(data))
    }
}
