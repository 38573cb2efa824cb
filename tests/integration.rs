//! Integration tests for the Working-Hours Calculation Engine.
//!
//! This test suite covers the HTTP API end to end:
//! - Monthly working-hours calculation with holiday exclusion
//! - Weekend precedence over holidays
//! - Employment-type hour resolution (full/half/custom)
//! - Fail-soft degradation when the holiday provider is down
//! - Holiday caching across requests
//! - Yearly aggregation
//! - Worked-hours reduction
//! - Validation and malformed-request error cases
//!
//! The external holiday API is stood in for by a wiremock server.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use workhours_engine::api::{create_router, AppState};
use workhours_engine::config::{ConfigLoader, DefaultsConfig, EngineConfig, ProviderConfig};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_against(provider_base_url: &str) -> Router {
    create_router_with_defaults(
        provider_base_url,
        DefaultsConfig {
            country_code: "PL".to_string(),
            hours_per_day: Decimal::from(8),
        },
    )
}

fn create_router_with_defaults(provider_base_url: &str, defaults: DefaultsConfig) -> Router {
    let config = EngineConfig {
        provider: ProviderConfig {
            base_url: provider_base_url.to_string(),
            timeout_seconds: 5,
        },
        defaults,
    };
    let state = AppState::from_config(ConfigLoader::from_config(config)).expect("app state");
    create_router(state)
}

fn polish_january_2024_body() -> Value {
    json!([
        {
            "date": "2024-01-01",
            "localName": "Nowy Rok",
            "name": "New Year's Day",
            "countryCode": "PL"
        },
        {
            "date": "2024-01-06",
            "localName": "Trzech Kroli",
            "name": "Epiphany",
            "countryCode": "PL"
        }
    ])
}

fn polish_2024_full_year_body() -> Value {
    json!([
        { "date": "2024-01-01", "localName": "Nowy Rok", "countryCode": "PL" },
        { "date": "2024-01-06", "localName": "Trzech Kroli", "countryCode": "PL" },
        { "date": "2024-03-31", "localName": "Wielkanoc", "countryCode": "PL" },
        { "date": "2024-04-01", "localName": "Poniedzialek Wielkanocny", "countryCode": "PL" },
        { "date": "2024-05-01", "localName": "Swieto Pracy", "countryCode": "PL" },
        { "date": "2024-05-03", "localName": "Swieto Konstytucji", "countryCode": "PL" },
        { "date": "2024-05-19", "localName": "Zielone Swiatki", "countryCode": "PL" },
        { "date": "2024-05-30", "localName": "Boze Cialo", "countryCode": "PL" },
        { "date": "2024-08-15", "localName": "Wniebowziecie", "countryCode": "PL" },
        { "date": "2024-11-01", "localName": "Wszystkich Swietych", "countryCode": "PL" },
        { "date": "2024-11-11", "localName": "Swieto Niepodleglosci", "countryCode": "PL" },
        { "date": "2024-12-25", "localName": "Boze Narodzenie", "countryCode": "PL" },
        { "date": "2024-12-26", "localName": "Drugi Dzien Swiat", "countryCode": "PL" }
    ])
}

fn dec(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// Monthly working hours
// =============================================================================

#[tokio::test]
async fn january_2024_poland_full_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "country_code": "PL",
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Jan 1 (a Monday) is excluded as a holiday; Jan 6 (Epiphany, a
    // Saturday) counts only as a weekend day.
    assert_eq!(body["result"]["total_working_days"], 22);
    assert_eq!(body["result"]["weekends"], 8);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(176));
    assert_eq!(body["result"]["holidays"].as_array().unwrap().len(), 2);
    assert_eq!(body["result"]["holidays"][0]["local_name"], "Nowy Rok");
    assert_eq!(body["year"], 2024);
    assert_eq!(body["month"], 1);
    assert_eq!(body["country_code"], "PL");
    assert!(body["calculation_id"].is_string());
}

#[tokio::test]
async fn half_time_is_half_of_full_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "half"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(88));
}

#[tokio::test]
async fn custom_hours_are_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "custom",
            "custom_hours": "6"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(132)); // 22 days x 6
}

#[tokio::test]
async fn custom_without_hours_falls_back_to_full_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "custom"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(184)); // 23 days x 8
}

#[tokio::test]
async fn configured_fallback_hours_apply_to_custom_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let router = create_router_with_defaults(
        &server.uri(),
        DefaultsConfig {
            country_code: "PL".to_string(),
            hours_per_day: Decimal::from(7),
        },
    );
    let (status, body) = post_json(
        router.clone(),
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "custom"
        }),
    )
    .await;

    // Custom employment without hours takes the configured 7, not 8.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(161)); // 23 days x 7

    // Full-time hours are fixed by the employment type, not the config.
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["result"]["total_working_hours"]), Decimal::from(184)); // 23 days x 8
}

#[tokio::test]
async fn default_country_code_is_used_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country_code"], "PL");
}

// =============================================================================
// Fail-soft provider behavior and caching
// =============================================================================

#[tokio::test]
async fn provider_outage_degrades_to_no_holidays() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "employment_type": "full"
        }),
    )
    .await;

    // The calculation still succeeds, treating holidays as regular workdays.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total_working_days"], 23);
    assert_eq!(body["result"]["holidays"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn repeated_requests_hit_the_holiday_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let request = json!({
        "year": 2024,
        "month": 1,
        "employment_type": "full"
    });

    let (first_status, first_body) =
        post_json(router.clone(), "/working-hours", request.clone()).await;
    let (second_status, second_body) = post_json(router, "/working-hours", request).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body["result"], second_body["result"]);

    // Only one request reached the provider; the second was served from cache.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn lowercase_country_codes_are_canonicalized_and_share_the_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_january_2024_body()))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (first_status, first_body) = post_json(
        router.clone(),
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "country_code": "pl",
            "employment_type": "full"
        }),
    )
    .await;
    let (second_status, second_body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "country_code": "PL",
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body["country_code"], "PL");
    assert_eq!(first_body["result"], second_body["result"]);

    // Both casings resolve to one provider request and one cache entry.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

// =============================================================================
// Yearly aggregation
// =============================================================================

#[tokio::test]
async fn yearly_2024_poland_full_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_2024_full_year_body()))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, body) = post_json(
        router,
        "/working-hours/yearly",
        json!({
            "year": 2024,
            "country_code": "PL",
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let monthly = body["result"]["monthly"].as_array().unwrap();
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly[0]["month"], 1);
    assert_eq!(monthly[0]["month_name"], "January");
    assert_eq!(monthly[0]["working_days"], 22);
    assert_eq!(monthly[11]["month_name"], "December");

    // 2024 has 262 weekdays; 10 of the 13 Polish holidays land on weekdays.
    let total = dec(&body["result"]["total"]);
    assert_eq!(total, Decimal::from((262 - 10) * 8));

    // The total equals the sum of the monthly hours it reports.
    let summed: Decimal = monthly
        .iter()
        .map(|m| dec(&m["hours"]))
        .sum();
    assert_eq!(total, summed);
}

#[tokio::test]
async fn yearly_fetches_holidays_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/PublicHolidays/2024/PL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(polish_2024_full_year_body()))
        .expect(1)
        .mount(&server)
        .await;

    let router = create_router_against(&server.uri());
    let (status, _) = post_json(
        router,
        "/working-hours/yearly",
        json!({
            "year": 2024,
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

// =============================================================================
// Worked hours
// =============================================================================

#[tokio::test]
async fn single_shift_with_break_is_seven_and_a_half_hours() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(
        router,
        "/worked-hours",
        json!({
            "shifts": [
                { "start_time": "09:00:00", "end_time": "17:00:00", "break_minutes": 30 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total_hours"]), Decimal::new(75, 1));
}

#[tokio::test]
async fn two_shifts_sum_to_fifteen_hours() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(
        router,
        "/worked-hours",
        json!({
            "shifts": [
                { "start_time": "09:00:00", "end_time": "17:00:00", "break_minutes": 30 },
                { "start_time": "09:00:00", "end_time": "17:00:00", "break_minutes": 30 }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total_hours"]), Decimal::from(15));
}

#[tokio::test]
async fn empty_shift_list_is_zero_hours() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(router, "/worked-hours", json!({ "shifts": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total_hours"]), Decimal::ZERO);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn month_out_of_range_is_rejected() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 13,
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // The provider is never consulted for an invalid request.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn invalid_country_code_is_rejected() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1,
            "country_code": "Poland",
            "employment_type": "full"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_field_is_a_validation_error() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let (status, body) = post_json(
        router,
        "/working-hours",
        json!({
            "year": 2024,
            "month": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("missing field"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let server = MockServer::start().await;
    let router = create_router_against(&server.uri());

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/working-hours")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}
