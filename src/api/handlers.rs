//! HTTP request handlers for the Working-Hours Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_worked_hours, calculate_working_hours, calculate_yearly_working_hours,
};
use crate::models::ShiftInterval;

use super::request::{MonthlyHoursRequest, WorkedHoursRequest, YearlyHoursRequest};
use super::response::{
    ApiError, ApiErrorResponse, MonthlyHoursResponse, WorkedHoursResponse, YearlyHoursResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/working-hours", post(monthly_hours_handler))
        .route("/working-hours/yearly", post(yearly_hours_handler))
        .route("/worked-hours", post(worked_hours_handler))
        .with_state(state)
}

/// Handler for the `POST /working-hours` endpoint.
///
/// Computes the holiday-aware working-hours breakdown for one month.
async fn monthly_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly working-hours request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let country_code = resolve_country_code(&state, request.country_code.as_deref());
    let employment = request
        .employment_type
        .into_domain(request.custom_hours, fallback_hours_per_day(&state));

    let start_time = Instant::now();
    let holidays = state
        .holidays()
        .fetch_holidays(request.year, &country_code)
        .await;
    let result = calculate_working_hours(
        request.year,
        request.month,
        &holidays,
        employment.hours_per_day(),
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        country_code = %country_code,
        working_days = result.total_working_days,
        duration_us = duration.as_micros(),
        "Monthly working-hours calculation completed"
    );

    ok_json(MonthlyHoursResponse {
        calculation_id: correlation_id,
        calculated_at: Utc::now(),
        year: request.year,
        month: request.month,
        country_code,
        result,
    })
}

/// Handler for the `POST /working-hours/yearly` endpoint.
///
/// Fetches the year's holidays once and aggregates all twelve months.
async fn yearly_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearlyHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing yearly working-hours request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if let Err(err) = request.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Request validation failed");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let country_code = resolve_country_code(&state, request.country_code.as_deref());
    let employment = request
        .employment_type
        .into_domain(request.custom_hours, fallback_hours_per_day(&state));

    let start_time = Instant::now();
    let holidays = state
        .holidays()
        .fetch_holidays(request.year, &country_code)
        .await;
    let result = calculate_yearly_working_hours(request.year, &holidays, &employment);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        country_code = %country_code,
        total_hours = %result.total,
        duration_us = duration.as_micros(),
        "Yearly working-hours calculation completed"
    );

    ok_json(YearlyHoursResponse {
        calculation_id: correlation_id,
        calculated_at: Utc::now(),
        year: request.year,
        country_code,
        result,
    })
}

/// Handler for the `POST /worked-hours` endpoint.
///
/// Reduces the submitted shift intervals to a total of worked hours.
async fn worked_hours_handler(
    payload: Result<Json<WorkedHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing worked-hours request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let shifts: Vec<ShiftInterval> = request.shifts.into_iter().map(Into::into).collect();
    let total_hours = calculate_worked_hours(&shifts);

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        total_hours = %total_hours,
        "Worked-hours calculation completed"
    );

    ok_json(WorkedHoursResponse {
        calculation_id: correlation_id,
        calculated_at: Utc::now(),
        total_hours,
    })
}

/// Unwraps a JSON payload, converting axum rejections into error responses.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Resolves the country code for a request, falling back to the configured
/// default when the request carries none.
///
/// The code is uppercased so that cache keys and provider requests are
/// canonical regardless of the casing a caller used.
fn resolve_country_code(state: &AppState, requested: Option<&str>) -> String {
    requested
        .unwrap_or(&state.config().config().defaults.country_code)
        .to_ascii_uppercase()
}

/// The configured fallback for custom employment without positive hours.
fn fallback_hours_per_day(state: &AppState) -> Decimal {
    state.config().config().defaults.hours_per_day
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
