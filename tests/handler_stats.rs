mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::stats_handler;
use sqlx::SqlitePool;

fn stats_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/stats", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_stats_empty(pool: SqlitePool) {
    let server = stats_app(pool);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_urls"], 0);
    assert_eq!(json["total_clicks"], 0);
    assert_eq!(json["average_clicks"], 0.0);
}

#[sqlx::test]
async fn test_stats_totals_and_average(pool: SqlitePool) {
    common::create_test_link(&pool, "one", "https://example.com/1").await;
    common::create_test_link(&pool, "two", "https://example.com/2").await;
    common::set_clicks(&pool, "one", 2).await;
    common::set_clicks(&pool, "two", 3).await;
    let server = stats_app(pool);

    let json = server.get("/api/stats").await.json::<serde_json::Value>();

    assert_eq!(json["total_urls"], 2);
    assert_eq!(json["total_clicks"], 5);
    assert_eq!(json["average_clicks"], 2.5);
}
