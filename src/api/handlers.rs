//! HTTP request handlers for the Planilla Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, filter_roster};
use crate::config::resolve_rates;

use super::request::{PayrollRequest, RosterFilterRequest, RosterFilterResponse};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/roster/filter", post(roster_filter_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /payroll.
///
/// Filters the roster, resolves the rate configuration and computes the run.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rates = match resolve_rates(request.rates, state.session_rates()) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "No usable rates");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let roster = filter_roster(&request.employees, &request.filter);

    let start_time = Instant::now();
    match compute_payroll(&roster, &rates, reference_date) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                roster_size = request.employees.len(),
                lines = run.lines.len(),
                rejected = run.errors.len(),
                net_pay = %run.totals.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll computed"
            );
            json_response(StatusCode::OK, run)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /roster/filter.
async fn roster_filter_handler(
    payload: Result<Json<RosterFilterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employees = filter_roster(&request.employees, &request.filter);
    info!(
        correlation_id = %correlation_id,
        roster_size = request.employees.len(),
        matched = employees.len(),
        "Roster filtered"
    );

    json_response(StatusCode::OK, RosterFilterResponse { employees })
}
