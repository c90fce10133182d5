mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    common::insert_contact(&pool, "Health", "health@example.com").await;
    let server = common::make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 contacts"
    );
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_pool_closed(pool: PgPool) {
    let server = common::make_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["database"]["message"], "Database error");
    assert!(json.get("version").is_some());
}
