mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use tinylink::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};

fn links_app(state: tinylink::AppState) -> Router {
    Router::new()
        .route("/api/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/api/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .with_state(state)
}

#[sqlx::test]
async fn test_create_link_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(json["target_url"], "https://example.com");
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
    assert_eq!(json["clicks"], 0);
    assert!(json["created_at"].is_string());
}

#[sqlx::test]
async fn test_create_link_normalizes_scheme_less_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "example.com/some/page" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["target_url"], "https://example.com/some/page");
}

#[sqlx::test]
async fn test_create_link_code_avoids_confusable_characters(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    for i in 0..20 {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;

        let json = response.json::<serde_json::Value>();
        let code = json["code"].as_str().unwrap();
        assert!(!code.contains(['0', 'O', 'l', 'I']), "code '{}' has confusables", code);
    }
}

#[sqlx::test]
async fn test_create_link_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_link_empty_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server.post("/api/links").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_list_links_newest_first(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(links_app(state)).unwrap();

    common::create_test_link(&pool, "first1", "https://example.com/1").await;
    common::create_test_link(&pool, "second", "https://example.com/2").await;
    common::create_clicked_link(&pool, "third1", "https://example.com/3", 9).await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["total_items"], 3);
    assert_eq!(json["pagination"]["total_pages"], 1);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["code"], "third1");
    assert_eq!(items[0]["clicks"], 9);
    assert_eq!(items[2]["code"], "first1");
}

#[sqlx::test]
async fn test_list_links_pagination(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(links_app(state)).unwrap();

    for i in 0..5 {
        common::create_test_link(&pool, &format!("code{i}"), "https://example.com").await;
    }

    let response = server
        .get("/api/links")
        .add_query_param("page", "2")
        .add_query_param("page_size", "2")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["page_size"], 2);
    assert_eq!(json["pagination"]["total_items"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_links_invalid_pagination(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server.get("/api/links").add_query_param("page", "0").await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_link_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(links_app(state)).unwrap();

    common::create_clicked_link(&pool, "known1", "https://example.com/page", 3).await;

    let response = server.get("/api/links/known1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "known1");
    assert_eq!(json["target_url"], "https://example.com/page");
    assert_eq!(json["clicks"], 3);
}

#[sqlx::test]
async fn test_get_link_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server.get("/api/links/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_delete_link_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(links_app(state)).unwrap();

    common::create_test_link(&pool, "doomed", "https://example.com").await;

    let response = server.delete("/api/links/doomed").await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    assert!(!common::link_exists(&pool, "doomed").await);
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(links_app(state)).unwrap();

    let response = server.delete("/api/links/missing").await;

    response.assert_status_not_found();
}
