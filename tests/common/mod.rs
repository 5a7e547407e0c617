#![allow(dead_code)]

use chrono::Utc;
use link_shortener::application::services::LinkService;
use link_shortener::config::RegistryConfig;
use link_shortener::infrastructure::persistence::SqliteLinkRepository;
use link_shortener::state::{AppState, Registry};
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn test_registry_config() -> RegistryConfig {
    RegistryConfig {
        base_url: TEST_BASE_URL.to_string(),
        ..RegistryConfig::default()
    }
}

pub fn create_test_registry(pool: SqlitePool) -> Registry {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    LinkService::new(link_repo, test_registry_config())
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_registry(pool)))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (original_url, short_code, created_at) VALUES (?, ?, ?)")
        .bind(url)
        .bind(code)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn set_clicks(pool: &SqlitePool, code: &str, clicks: i64) {
    sqlx::query("UPDATE links SET clicks = ? WHERE short_code = ?")
        .bind(clicks)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
