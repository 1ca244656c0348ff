//! HTTP request handlers for the NI engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate_strategy;
use crate::error::EngineError;
use crate::models::{ComparisonReport, Preset};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, PresetInfo};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/presets", get(presets_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the strategy compared against
/// the equal-distribution baseline.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    // Resolve the strategy and rate table
    let strategy = match request.resolve_strategy() {
        Ok(strategy) => strategy,
        Err(err) => return reject(correlation_id, err),
    };

    let rates = match state.config().resolve_rates(request.tax_year.as_deref()) {
        Ok(rates) => rates,
        Err(err) => return reject(correlation_id, err),
    };

    // Perform the calculation
    let start_time = Instant::now();
    let comparison = match evaluate_strategy(
        request.annual_salary,
        request.total_pension,
        &strategy.distribution,
        rates,
    ) {
        Ok(comparison) => comparison,
        Err(err) => return reject(correlation_id, err),
    };
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        strategy = %strategy.name,
        tax_year = %rates.tax_year,
        savings = %comparison.savings,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    // Build the report
    let report = ComparisonReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: rates.tax_year.clone(),
        strategy: strategy.name,
        strategy_description: strategy.description,
        annual_salary: request.annual_salary,
        total_pension: request.total_pension,
        distribution: strategy.distribution,
        comparison,
        duration_us: duration.as_micros() as u64,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Logs a rejected calculation and converts the error to a response.
fn reject(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for GET /presets endpoint.
///
/// Percentages are the rounded display tables. The equal table totals 99.97,
/// so echoing it back as a custom distribution fails the tolerance check.
async fn presets_handler() -> Json<Vec<PresetInfo>> {
    Json(Preset::ALL.into_iter().map(PresetInfo::from).collect())
}

/// Handler for GET /rates endpoint.
///
/// Lists the loaded rate tables, oldest first.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().rates().to_vec())
}
