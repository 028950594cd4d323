mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::FixedEphemeris;
use panchang_api::api::handlers::panchang_handler;
use panchang_api::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/panchang", get(panchang_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_panchang_full_record() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "delhi")
        .add_query_param("date", "2025-07-15")
        .add_query_param("lang", "en")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["city"], "Delhi");
    assert_eq!(json["date"], "2025-07-15");
    assert_eq!(json["weekday"], "Tuesday");
    assert_eq!(json["sunrise"], "06:00 AM");
    assert_eq!(json["sunset"], "06:00 PM");
    assert_eq!(json["tithi"], "Shashthi");
    assert_eq!(json["paksha"], "waning");
    assert_eq!(json["nakshatra"], "Revati");
    assert_eq!(json["rahu_kaal"], "06:00 AM \u{2013} 07:30 AM");
}

#[tokio::test]
async fn test_panchang_rahu_kaal_follows_weekday() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    // 2025-07-14 is a Monday: seventh eighth of 06:00-18:00
    let response = server
        .get("/api/panchang")
        .add_query_param("date", "2025-07-14")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["weekday"], "Monday");
    assert_eq!(json["rahu_kaal"], "03:00 PM \u{2013} 04:30 PM");
}

#[tokio::test]
async fn test_panchang_unknown_city_falls_back() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "Atlantis")
        .add_query_param("date", "2025-07-15")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["city"], "Delhi");
}

#[tokio::test]
async fn test_panchang_city_is_case_insensitive() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "  VARANASI ")
        .add_query_param("date", "2025-07-15")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["city"], "Varanasi");
}

#[tokio::test]
async fn test_panchang_invalid_calendar_date() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "delhi")
        .add_query_param("date", "2025-13-40")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["date"], "2025-13-40");
}

#[tokio::test]
async fn test_panchang_malformed_date_shape() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("date", "15/07/2025")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_panchang_unparsable_latitude_is_structured() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("lat", "north")
        .add_query_param("lon", "77.2")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_panchang_out_of_range_coordinates() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("lat", "95")
        .add_query_param("lon", "77.2")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_panchang_custom_coordinates() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server
        .get("/api/panchang")
        .add_query_param("lat", "19.07")
        .add_query_param("lon", "72.88")
        .add_query_param("date", "2025-07-15")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["city"],
        "Custom Location"
    );
}

#[tokio::test]
async fn test_panchang_polar_night() {
    let server = server(common::create_test_state(FixedEphemeris::polar_night()));

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "tromso")
        .add_query_param("date", "2025-12-21")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["sunrise"], "Unavailable");
    assert_eq!(json["sunset"], "Unavailable");
    assert_eq!(json["rahu_kaal"], "Unavailable \u{2013} Unavailable");
    assert_eq!(json["tithi"], "Shashthi");
    assert_eq!(json["nakshatra"], "Revati");
}

#[tokio::test]
async fn test_panchang_ephemeris_failure_is_structured() {
    let server = server(common::create_test_state(FixedEphemeris::broken()));

    let response = server
        .get("/api/panchang")
        .add_query_param("date", "2025-07-15")
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_panchang_without_date_uses_today() {
    let server = server(common::create_test_state(FixedEphemeris::daylight()));

    let response = server.get("/api/panchang").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let date = json["date"].as_str().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
}

#[tokio::test]
async fn test_panchang_delhi_with_analytic_ephemeris() {
    let server = server(common::create_analytic_state());

    let response = server
        .get("/api/panchang")
        .add_query_param("city", "delhi")
        .add_query_param("date", "2025-07-15")
        .await;

    response.assert_status_ok();

    // Reference run: Lahiri zodiac, disc-centre horizon, UTC+5:30
    response.assert_json(&json!({
        "city": "Delhi",
        "date": "2025-07-15",
        "weekday": "Tuesday",
        "sunrise": "05:35 AM",
        "sunset": "07:19 PM",
        "tithi": "Panchami",
        "paksha": "waning",
        "nakshatra": "Shatabhisha",
        "rahu_kaal": "05:35 AM – 07:18 AM"
    }));
}
