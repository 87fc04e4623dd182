//! HTTP request handlers for the job-splitting API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{allocate_job, run_payroll};

use super::request::{AllocateRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for POST /allocate endpoint.
///
/// Allocates a single job against the loaded roster and returns the
/// allocation with its audit trace.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let job_id = request.job_id.as_deref().unwrap_or("-");

    if let Err(error) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            job_id,
            error = %error.message,
            "Allocation request rejected"
        );
        return error_response(ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        });
    }

    let start_time = Instant::now();
    match allocate_job(&request.as_input(), state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                job_id,
                rule = result.rule.rule_id(),
                total_wages = %result.total_wages(),
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Allocation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                job_id,
                error = %err,
                "Allocation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll endpoint.
///
/// Runs payroll over a batch of jobs. Jobs the engine refuses are reported
/// per row, so the request itself succeeds unless the business summary is
/// out of range.
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

    let start_time = Instant::now();
    let jobs_count = request.jobs.len();
    let config = state.shared_config();
    let run = tokio::task::spawn_blocking(move || {
        run_payroll(&request.jobs, &config, &request.expenses, request.period)
    })
    .await;

    match run {
        Ok(Ok(report)) => {
            info!(
                correlation_id = %correlation_id,
                jobs_count,
                failed = report.failures().count(),
                total_payroll = %report.summary.total_payroll,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll run completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                jobs_count,
                error = %err,
                "Payroll run failed"
            );
            error_response(err.into())
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run aborted"
            );
            error_response(ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal("Payroll run aborted"),
            })
        }
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message names the offending field
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

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}
