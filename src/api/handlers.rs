//! HTTP request handlers for the payroll API.
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

use super::request::{BatchRequest, CalculationRequest};
use super::response::{ApiError, ApiErrorResponse, BatchItem, BatchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a week record and returns the calculated pay.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match state.service().calculate_detailed(&request.record) {
        Ok(mut result) => {
            result.employee = request.employee;
            info!(
                correlation_id = %correlation_id,
                days = result.days.len(),
                total = %result.total,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /calculate/batch endpoint.
///
/// Each line is calculated on its own; a failing line does not fail the
/// request.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let results: Vec<BatchItem> = state
        .service()
        .calculate_batch(&request.lines)
        .into_iter()
        .map(|result| match result {
            Ok(calculation) => BatchItem::Ok { calculation },
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Batch line failed");
                let api_error: ApiErrorResponse = err.into();
                BatchItem::Error {
                    error: api_error.error,
                }
            }
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        lines = results.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Batch completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(BatchResponse { results }),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
