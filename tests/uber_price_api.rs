use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use ridecompare::api::FareAPI;
use ridecompare::config::{Config, UberConfig};
use ridecompare::engine::Engine;
use ridecompare::entities::{Category, Location, Provider, RideComparisonResponse, TripRequest};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn engine(server: &MockServer, timeout_ms: u64) -> Engine {
    let config = Config {
        uber: Some(UberConfig {
            token: "test-token".into(),
            api_base: server.uri(),
            timeout: Duration::from_millis(timeout_ms),
        }),
        ..Config::default()
    };

    Engine::with_rng(&config, StdRng::seed_from_u64(17)).unwrap()
}

fn nyc_trip() -> TripRequest {
    TripRequest::new(
        Location::new("City Hall", 40.7128, -74.0060),
        Location::new("Times Square", 40.7580, -73.9855),
        None,
    )
}

fn uber_ids(response: &RideComparisonResponse) -> Vec<&str> {
    response
        .estimates
        .iter()
        .filter(|e| e.provider == Provider::Uber)
        .map(|e| e.id.as_str())
        .collect()
}

#[tokio::test]
async fn live_prices_replace_uber_mocks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .and(header("Authorization", "Token test-token"))
        .and(query_param("start_latitude", "40.7128"))
        .and(query_param("end_longitude", "-73.9855"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prices": [
                {
                    "display_name": "UberX",
                    "localized_display_name": "UberX",
                    "estimate": "$18-24",
                    "low_estimate": 18.0,
                    "high_estimate": 24.0,
                    "currency_code": "USD",
                    "duration": 1080.0,
                    "distance": 3.4
                },
                {
                    "display_name": "UberBLACK",
                    "estimate": "$45-58",
                    "low_estimate": 45.0,
                    "high_estimate": 58.0,
                    "currency_code": "USD"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = engine(&server, 2000).compare_rides(nyc_trip()).await.unwrap();

    assert_eq!(uber_ids(&response), ["uber-0", "uber-1"]);

    let black = response.estimates.iter().find(|e| e.id == "uber-1").unwrap();
    assert_eq!(black.category, Category::Luxury);
    assert_eq!(black.price, 58.0);
    assert_eq!(black.price_range, "$45-58");
    assert_eq!(black.estimated_duration, response.trip_duration);

    let x = response.estimates.iter().find(|e| e.id == "uber-0").unwrap();
    assert_eq!(x.estimated_duration, 18);

    assert!(response.estimates.iter().any(|e| e.provider == Provider::Bolt));
}

#[tokio::test]
async fn server_error_falls_back_to_mocks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let response = engine(&server, 2000).compare_rides(nyc_trip()).await.unwrap();

    assert_eq!(uber_ids(&response), ["uber-x", "uber-comfort"]);
    assert_eq!(response.estimates.len(), 4);
}

#[tokio::test]
async fn malformed_payload_falls_back_to_mocks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let response = engine(&server, 2000).compare_rides(nyc_trip()).await.unwrap();

    assert_eq!(uber_ids(&response), ["uber-x", "uber-comfort"]);
}

#[tokio::test]
async fn empty_price_list_falls_back_to_mocks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [] })))
        .mount(&server)
        .await;

    let response = engine(&server, 2000).compare_rides(nyc_trip()).await.unwrap();

    assert_eq!(uber_ids(&response), ["uber-x", "uber-comfort"]);
}

#[tokio::test]
async fn slow_api_times_out_to_mocks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({ "prices": [] })),
        )
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let response = engine(&server, 100).compare_rides(nyc_trip()).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(uber_ids(&response), ["uber-x", "uber-comfort"]);
}

#[tokio::test]
async fn russia_skips_live_uber_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.2/estimates/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prices": [{ "display_name": "UberX", "high_estimate": 10.0 }]
        })))
        .mount(&server)
        .await;

    let mut request = nyc_trip();
    request.country = Some("RU".into());

    let response = engine(&server, 2000).compare_rides(request).await.unwrap();

    assert!(uber_ids(&response).is_empty());
    assert!(response.estimates.iter().all(|e| e.currency == "RUB"));
}
