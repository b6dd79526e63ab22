//! Response types for the Raise Eligibility Engine API.
//!
//! This module defines the success bodies, the error response structures and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{RosterEntry, RosterSummary};
use crate::dates::serde_dmy;
use crate::error::EngineError;
use crate::grades::{Grade, ResolvedGrade};
use crate::models::{AuditTrace, RaiseDecision};

/// Response body for `/raise`.
#[derive(Debug, Clone, Serialize)]
pub struct RaiseResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The date of the next raise, or an empty string.
    #[serde(with = "serde_dmy")]
    pub next_raise_date: Option<NaiveDate>,
    /// Full months until the next raise.
    pub months_remaining: u32,
    /// The coefficient reached at the next raise, when known.
    pub next_coefficient: Option<Decimal>,
    /// Why the computation ended the way it did.
    pub decision: RaiseDecision,
    /// The grade the computation used.
    pub resolved_grade: ResolvedGrade,
    /// The audit steps recorded during the computation.
    pub audit_trace: AuditTrace,
}

/// Response body for `/roster`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// One entry per submitted employee, in request order.
    pub entries: Vec<RosterEntry>,
    /// Raises due within the window, soonest first.
    pub upcoming: Vec<RosterEntry>,
    /// The window used for `upcoming`.
    pub window_months: u32,
    /// Outcome counts.
    pub summary: RosterSummary,
}

/// One pay grade as listed by `/grades`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeInfo {
    /// The grade code.
    pub code: String,
    /// Months between raises.
    pub interval_months: u32,
    /// Coefficient steps, lowest first.
    pub steps: Vec<Decimal>,
}

impl From<Grade> for GradeInfo {
    fn from(grade: Grade) -> Self {
        Self {
            code: grade.code().to_string(),
            interval_months: grade.interval_months(),
            steps: grade.steps().to_vec(),
        }
    }
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            // Only raised while loading configuration at startup; no handler
            // returns these.
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            EngineError::UnknownGrade { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_GRADE",
                    message,
                    format!(
                        "'{}' is not one of the supported grades (B, A0, A1, A2.2, A3)",
                        code
                    ),
                ),
            },
            EngineError::InvalidDate { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    format!("Field '{}' must be a DD/MM/YYYY date", field),
                ),
            },
        }
    }
}
