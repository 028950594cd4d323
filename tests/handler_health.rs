mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::FixedEphemeris;
use panchang_api::api::handlers::health_handler;
use panchang_api::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["ephemeris"]["status"], "ok");
    assert_eq!(json["checks"]["cities"]["status"], "ok");
    assert_eq!(
        json["checks"]["cities"]["message"],
        "3 cities, default: Delhi"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = server(common::create_analytic_state());

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("ephemeris").is_some());
    assert!(json["checks"].get("cities").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_ephemeris_fails() {
    let server = server(common::create_test_state(FixedEphemeris::broken()));

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["ephemeris"]["status"], "error");
    assert_eq!(json["checks"]["cities"]["status"], "ok");
}
