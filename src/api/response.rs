//! Response types for the Hearing Scheduling Engine API.
//!
//! This module defines the success payloads, the error response
//! structures, and the error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{IntakeStats, Schedule};
use crate::scheduling::DayStatus;

/// Response body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The computed schedule, keyed by date.
    pub schedule: Schedule,
    /// Headline counters over the submitted complaints.
    pub stats: IntakeStats,
    /// Number of complaints that received a hearing slot.
    pub scheduled: usize,
    /// Number of complaints left unscheduled by the lookahead cap.
    ///
    /// Truncation is documented behavior, not an error; this counter makes
    /// it observable.
    pub unscheduled: usize,
}

/// Response body for the `/day-status/{date}` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStatusResponse {
    /// The date that was classified.
    pub date: NaiveDate,
    /// The classification under the loaded calendar policy.
    pub status: DayStatus,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid date error response.
    pub fn invalid_date(value: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date: {}", value),
            "Dates must use the YYYY-MM-DD format",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid calendar policy field '{}'", field),
                    message,
                ),
            },
            EngineError::InvalidDate { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_date(&value),
            },
        }
    }
}
