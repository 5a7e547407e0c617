mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use link_shortener::api::handlers::shorten_handler;
use serde_json::json;
use sqlx::SqlitePool;

fn shorten_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_generated_code(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/page");
    assert_eq!(json["clicks"], 0);
    assert!(json["title"].is_null());
    assert!(json["created_at"].is_string());

    let short_url = json["short_url"].as_str().unwrap();
    let code = short_url
        .strip_prefix(&format!("{}/", common::TEST_BASE_URL))
        .unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_with_custom_code(pool: SqlitePool) {
    let server = shorten_app(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_code": "promo"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://sho.rt/promo");
}

#[sqlx::test]
async fn test_shorten_empty_custom_code_generates_one(pool: SqlitePool) {
    let server = shorten_app(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_code": ""
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    assert_eq!(short_url.len(), "http://sho.rt/".len() + 6);
}

#[sqlx::test]
async fn test_shorten_deduplication(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    let first = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "original_url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["short_url"], second["short_url"]);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_existing_url_ignores_custom_code(pool: SqlitePool) {
    common::create_test_link(&pool, "first1", "https://example.com/dup").await;
    let server = shorten_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com/dup",
            "custom_code": "other"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://sho.rt/first1");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    for url in ["", "not a url", "example.com", "javascript:alert(1)"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "original_url": url }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "invalid_url", "url: {url:?}");
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_invalid_custom_code(pool: SqlitePool) {
    let server = shorten_app(pool.clone());
    let too_long = "x".repeat(21);

    for (i, code) in ["ab", "has space", too_long.as_str(), "api"]
        .into_iter()
        .enumerate()
    {
        let response = server
            .post("/api/shorten")
            .json(&json!({
                "original_url": format!("https://example.com/{i}"),
                "custom_code": code
            }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "invalid_code", "code: {code:?}");
    }

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_custom_code_conflict(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com/one",
            "custom_code": "taken"
        }))
        .await
        .assert_status_ok();
    common::set_clicks(&pool, "taken", 3).await;

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com/two",
            "custom_code": "taken"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "code_taken");
    assert_eq!(json["error"]["details"]["code"], "taken");

    assert_eq!(common::count_links(&pool).await, 1);
    assert_eq!(common::get_clicks(&pool, "taken").await, 3);
}

#[sqlx::test]
async fn test_shorten_rejects_control_characters(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "original_url": "https://example.com/a\u{1}b",
            "custom_code": "ctrl1"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_original_url(pool: SqlitePool) {
    let server = shorten_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "custom_code": "abc" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert!(json["error"]["message"].is_string());
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_non_string_url(pool: SqlitePool) {
    let server = shorten_app(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "original_url": 42 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
}

#[sqlx::test]
async fn test_shorten_malformed_json(pool: SqlitePool) {
    let server = shorten_app(pool);

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .bytes("{\"original_url\": ".into())
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
}
