//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single URL.
///
/// Syntax and custom code rules are enforced by the registry itself; this
/// only bounds the payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(
        min = 1,
        max = 2048,
        message = "URL must be between 1 and 2048 characters"
    ))]
    pub original_url: String,

    /// Optional custom short code. An empty string counts as absent.
    #[serde(default)]
    pub custom_code: Option<String>,
}

impl ShortenRequest {
    /// The custom code, if one was actually supplied.
    pub fn custom_code(&self) -> Option<&str> {
        self.custom_code.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::url_validator::MAX_URL_LENGTH;

    #[test]
    fn test_custom_code_is_optional() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{ "original_url": "https://example.com" }"#).unwrap();

        assert!(request.custom_code().is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_custom_code_counts_as_absent() {
        let request: ShortenRequest = serde_json::from_str(
            r#"{ "original_url": "https://example.com", "custom_code": "" }"#,
        )
        .unwrap();

        assert!(request.custom_code().is_none());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest {
            original_url: String::new(),
            custom_code: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_url_fails_validation() {
        let request = ShortenRequest {
            original_url: format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH)),
            custom_code: None,
        };

        assert!(request.validate().is_err());
    }
}
