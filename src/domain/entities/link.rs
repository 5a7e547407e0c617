//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to an original URL.
///
/// `id`, `original_url`, `short_code` and `created_at` never change after
/// creation. `clicks` only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    /// Reserved, never populated yet.
    pub title: Option<String>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            clicks,
            title: None,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at: Utc::now(),
        }
    }
}

/// Raw aggregates read from the store in one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkTotals {
    pub total_urls: i64,
    pub total_clicks: i64,
}

/// Service-wide statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryStats {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub average_clicks: f64,
}

impl From<LinkTotals> for RegistryStats {
    fn from(totals: LinkTotals) -> Self {
        let average_clicks = if totals.total_urls > 0 {
            totals.total_clicks as f64 / totals.total_urls as f64
        } else {
            0.0
        };

        Self {
            total_urls: totals.total_urls,
            total_clicks: totals.total_clicks,
            average_clicks,
        }
    }
}
