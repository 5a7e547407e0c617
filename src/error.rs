//! Application error type and its HTTP representation.
//!
//! Every failure the registry can produce has its own variant, and every variant maps
//! to a distinct `code` in the JSON error body:
//!
//! ```json
//! { "error": { "code": "code_taken", "message": "...", "details": { "code": "promo" } } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::utils::db_error::{is_transient, is_unique_violation_on_code};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid custom code: {reason}")]
    InvalidCode { code: String, reason: String },

    #[error("Short code '{code}' is already taken")]
    CodeTaken { code: String },

    #[error("Short link '{code}' not found")]
    NotFound { code: String },

    #[error("No free short code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    /// Timeouts, lost connections, busy database. The only retryable kind.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Returns true if repeating the operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Stable error code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidCode { .. } => "invalid_code",
            Self::CodeTaken { .. } => "code_taken",
            Self::NotFound { .. } => "not_found",
            Self::CodeSpaceExhausted { .. } => "code_space_exhausted",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::Store(_) => "store_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::InvalidCode { .. } | Self::CodeTaken { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::CodeSpaceExhausted { .. } | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            Self::InvalidUrl { url, .. } => json!({ "original_url": url }),
            Self::InvalidCode { code, .. } => json!({ "custom_code": code }),
            Self::CodeTaken { code } | Self::NotFound { code } => json!({ "code": code }),
            Self::CodeSpaceExhausted { attempts } => json!({ "attempts": attempts }),
            Self::StoreUnavailable(_) | Self::Store(_) => json!({}),
        };

        // Driver messages stay in the logs.
        let message = match self {
            Self::StoreUnavailable(_) => "Store temporarily unavailable, retry later".to_string(),
            Self::Store(_) => "Store error".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::StoreUnavailable(e) => tracing::warn!("Store unavailable: {}", e),
            Self::Store(e) => tracing::error!("Store error: {}", e),
            Self::CodeSpaceExhausted { attempts } => {
                tracing::error!("Short code allocation failed after {} attempts", attempts)
            }
            _ => {}
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_transient(&e) {
            return Self::StoreUnavailable(e.to_string());
        }
        if is_unique_violation_on_code(&e) {
            return Self::CodeTaken {
                code: String::new(),
            };
        }
        Self::Store(e.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::StoreUnavailable("store call timed out".to_string())
    }
}

/// An unreadable request body means no usable URL was submitted.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_url("", rejection.body_text())
    }
}

/// Request body validation only covers `original_url`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let reason = errors
            .field_errors()
            .get("original_url")
            .and_then(|errs| errs.first())
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| errors.to_string());

        Self::invalid_url("", reason)
    }
}
