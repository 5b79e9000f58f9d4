#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use company_catalog::routes::app_router;
use company_catalog::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Full application, including trailing-slash normalisation.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = Router::new().fallback_service(app_router(create_test_state(pool)));
    TestServer::new(app).unwrap()
}

pub async fn create_test_company(pool: &SqlitePool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO companies (identity_company, title, description, location, schedule)
         VALUES (?1, ?2, 'Test case description', 'L 120 right and left', '8:00-17:00')
         RETURNING id",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_product(pool: &SqlitePool, title: &str, attachment_id: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (identity_product, title, description, price, quantity, attachment_id)
         VALUES (?1, ?2, 'Test case description', 100, 50, ?3)
         RETURNING id",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(title)
    .bind(attachment_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_companies(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_products(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn company_title(pool: &SqlitePool, id: i64) -> String {
    sqlx::query_scalar("SELECT title FROM companies WHERE id = ?1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
