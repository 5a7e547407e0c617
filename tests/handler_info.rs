mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::info_handler;
use sqlx::SqlitePool;

fn info_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/info/{short_code}", get(info_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_info_returns_link(pool: SqlitePool) {
    common::create_test_link(&pool, "info1", "https://example.com/info").await;
    common::set_clicks(&pool, "info1", 7).await;
    let server = info_app(pool);

    let response = server.get("/api/info/info1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/info");
    assert_eq!(json["short_url"], "http://sho.rt/info1");
    assert_eq!(json["clicks"], 7);
    assert!(json["title"].is_null());
}

#[sqlx::test]
async fn test_info_does_not_count_clicks(pool: SqlitePool) {
    common::create_test_link(&pool, "quiet", "https://example.com").await;
    let server = info_app(pool.clone());

    server.get("/api/info/quiet").await.assert_status_ok();
    server.get("/api/info/quiet").await.assert_status_ok();

    assert_eq!(common::get_clicks(&pool, "quiet").await, 0);
}

#[sqlx::test]
async fn test_info_not_found(pool: SqlitePool) {
    let server = info_app(pool);

    let response = server.get("/api/info/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "missing");
}
