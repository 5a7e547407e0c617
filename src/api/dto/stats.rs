//! DTO for service-wide statistics.

use serde::Serialize;

use crate::domain::entities::RegistryStats;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub average_clicks: f64,
}

impl From<RegistryStats> for StatsResponse {
    fn from(stats: RegistryStats) -> Self {
        Self {
            total_urls: stats.total_urls,
            total_clicks: stats.total_clicks,
            average_clicks: stats.average_clicks,
        }
    }
}
