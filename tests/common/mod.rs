#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::domain::click_event::ClickEvent;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::state::AppState;
use tokio::sync::mpsc;

pub const TEST_BASE_URL: &str = "https://tiny.test";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_clicked_link(pool: &PgPool, code: &str, url: &str, clicks: i64) {
    sqlx::query("INSERT INTO links (code, target_url, clicks) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(url)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_exists(pool: &PgPool, code: &str) -> bool {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap();
    count > 0
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let link_repo = Arc::new(PgLinkRepository::new(pool));
    let link_service = Arc::new(LinkService::new(link_repo));

    let state = AppState::new(link_service, tx, TEST_BASE_URL.to_string());

    (state, rx)
}
