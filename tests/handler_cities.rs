mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::FixedEphemeris;
use panchang_api::api::handlers::cities_handler;

#[tokio::test]
async fn test_cities_lists_directory_in_order() {
    let state = common::create_test_state(FixedEphemeris::daylight());
    let app = Router::new()
        .route("/api/cities", get(cities_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/cities").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["default_city"], "Delhi");
    assert_eq!(json["total"], 3);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0]["key"], "delhi");
    assert_eq!(items[0]["name"], "Delhi");
    assert_eq!(items[0]["latitude"], 28.6139);
    assert_eq!(items[2]["name"], "Varanasi");
}

#[tokio::test]
async fn test_cities_builtin_table() {
    let app = Router::new()
        .route("/api/cities", get(cities_handler))
        .with_state(common::create_analytic_state());

    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/cities").await.json::<serde_json::Value>();

    assert_eq!(json["total"], 12);
    let names: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Varanasi"));
    assert!(names.contains(&"Bengaluru"));
}
