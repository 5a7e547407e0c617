//! DTO describing a single short link.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Link representation returned by the shorten and info endpoints.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub original_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            original_url: link.original_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
            title: link.title,
        }
    }
}
