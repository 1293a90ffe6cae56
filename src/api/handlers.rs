//! HTTP request handlers for the Hearing Scheduling Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::IntakeStats;
use crate::scheduling::{classify_day, compute_schedule};

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse, DayStatusResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/day-status/:date", get(day_status_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a complaint backlog and returns the computed hearing schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_date = request.start_date;
    let backlog = request.into_backlog();
    let stats = IntakeStats::from_complaints(backlog.complaints());

    let compute_start = Instant::now();
    let schedule = compute_schedule(&backlog, state.config().policy(), start_date);
    let duration = compute_start.elapsed();

    let scheduled = schedule.total_assignments();
    let unscheduled = backlog.len() - scheduled;

    if unscheduled > 0 {
        warn!(
            correlation_id = %correlation_id,
            unscheduled,
            "Backlog exceeds calendar capacity; overflow left unscheduled"
        );
    }

    info!(
        correlation_id = %correlation_id,
        backlog_len = backlog.len(),
        scheduled,
        days = schedule.day_count(),
        duration_us = duration.as_micros(),
        "Schedule computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ScheduleResponse {
            schedule,
            stats,
            scheduled,
            unscheduled,
        }),
    )
        .into_response()
}

/// Handler for GET /day-status/{date} endpoint.
///
/// Classifies a date under the loaded calendar policy, so the dashboard
/// can explain why a day shows no hearings.
async fn day_status_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
        EngineError::InvalidDate {
            value: date.clone(),
        }
    });

    match parsed {
        Ok(date) => {
            let status = classify_day(date, state.config().policy());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(DayStatusResponse { date, status }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(value = %date, "Rejected unparseable date");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
