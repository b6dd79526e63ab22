//! HTTP request handlers for the Raise Eligibility Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_roster, evaluate_raise, summarize_roster, upcoming_raises};
use crate::grades::Grade;
use crate::models::AuditTrace;

use super::request::{RaiseRequest, RosterRequest, resolve_today};
use super::response::{
    ApiError, ApiErrorResponse, GradeInfo, RaiseResponse, RosterResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/raise", post(raise_handler))
        .route("/roster", post(roster_handler))
        .route("/grades", get(grades_handler))
        .route("/grades/:code", get(grade_handler))
        .with_state(state)
}

/// Handler for POST /raise.
///
/// Computes the next raise for one employee and returns it with the audit
/// trace.
async fn raise_handler(payload: Result<Json<RaiseRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing raise request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = match resolve_today(request.today.as_deref()) {
        Ok(today) => today,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid evaluation date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let evaluation = evaluate_raise(&request.employee, today);
    let result = evaluation.result();

    info!(
        correlation_id = %correlation_id,
        decision = ?evaluation.decision,
        next_raise_date = %result.next_raise_date_text(),
        months_remaining = result.months_remaining,
        duration_us = start_time.elapsed().as_micros(),
        "Raise calculation completed"
    );

    json_response(RaiseResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        next_raise_date: result.next_raise_date,
        months_remaining: result.months_remaining,
        next_coefficient: evaluation.next_coefficient,
        decision: evaluation.decision,
        resolved_grade: evaluation.resolved_grade,
        audit_trace: AuditTrace {
            steps: evaluation.audit_steps,
        },
    })
}

/// Handler for POST /roster.
///
/// Computes raises for a batch of employee records and reports the ones due
/// within the window.
async fn roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = match resolve_today(request.today.as_deref()) {
        Ok(today) => today,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid evaluation date");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let window_months = request
        .window_months
        .unwrap_or(state.config().roster.upcoming_window_months);

    let start_time = Instant::now();
    let entries = compute_roster(&request.employees, today);
    let upcoming = upcoming_raises(&entries, window_months)
        .into_iter()
        .cloned()
        .collect();
    let summary = summarize_roster(&entries);

    info!(
        correlation_id = %correlation_id,
        employees_count = summary.total,
        scheduled = summary.scheduled,
        window_months,
        duration_us = start_time.elapsed().as_micros(),
        "Roster calculation completed"
    );

    json_response(RosterResponse {
        entries,
        upcoming,
        window_months,
        summary,
    })
}

/// Handler for GET /grades.
async fn grades_handler() -> Response {
    let grades: Vec<GradeInfo> = Grade::ALL.into_iter().map(GradeInfo::from).collect();
    json_response(grades)
}

/// Handler for GET /grades/:code.
async fn grade_handler(Path(code): Path<String>) -> Response {
    match code.parse::<Grade>() {
        Ok(grade) => json_response(GradeInfo::from(grade)),
        Err(err) => {
            warn!(code = %code, "Unknown grade requested");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. "missing field `employee`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
