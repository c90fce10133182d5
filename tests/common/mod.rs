#![allow(dead_code)]

use axum::extract::Request;
use axum::routing::get;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use contact_service::api::handlers::health_handler;
use contact_service::api::routes::contact_routes;
use contact_service::routes::app_router;
use contact_service::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", contact_routes())
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

/// Serves the production router, including tracing and path normalization.
pub fn make_app_server(pool: PgPool) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(create_test_state(pool)));
    TestServer::new(app).unwrap()
}

pub fn contact_payload(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "phone": "555-0100",
        "address": {
            "street": "12 St James's Square",
            "city": "London",
            "state": "Westminster",
            "zip_code": "SW1Y 4JH"
        }
    })
}

pub async fn insert_contact(pool: &PgPool, first_name: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO contacts (first_name, last_name, email, phone) VALUES ($1, 'Test', $2, '555-0000') RETURNING id",
    )
    .bind(first_name)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_contacts(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
        .fetch_one(pool)
        .await
        .unwrap()
}
