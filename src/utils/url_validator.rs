//! Syntax validation for URLs submitted for shortening.
//!
//! The submitted string is stored exactly as received, so nothing here rewrites
//! it. `http://a.com` and `http://a.com/` remain two different links.

use url::Url;

use crate::error::AppError;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2048;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Checks that `input` is an absolute URL with an allowed scheme and a host.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] when:
/// - the string is empty or longer than [`MAX_URL_LENGTH`]
/// - it contains whitespace or control characters
/// - it does not parse as an absolute URL
/// - the scheme is not `http`, `https` or `ftp`
/// - the host is missing
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("not-a-url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), AppError> {
    if input.is_empty() {
        return Err(AppError::invalid_url(input, "URL must not be empty"));
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(AppError::invalid_url(
            input,
            format!("URL is longer than {MAX_URL_LENGTH} characters"),
        ));
    }

    // The parser silently strips whitespace, which would break exact-match dedup.
    if input.chars().any(char::is_whitespace) {
        return Err(AppError::invalid_url(input, "URL must not contain whitespace"));
    }

    // The parser percent-encodes control characters, but the stored string keeps
    // them and cannot be sent back as a `Location` header.
    if input.chars().any(char::is_control) {
        return Err(AppError::invalid_url(
            input,
            "URL must not contain control characters",
        ));
    }

    let url = Url::parse(input).map_err(|e| AppError::invalid_url(input, e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(AppError::invalid_url(
            input,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(AppError::invalid_url(input, "URL must include a host")),
    }
}
