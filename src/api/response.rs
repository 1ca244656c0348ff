//! Response types for the NI engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the preset listing returned by `/presets`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_to_penny;
use crate::error::EngineError;
use crate::models::{NegativeIncomeMonth, Preset};

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

    /// Creates a negative income error listing every offending month.
    pub fn negative_income(months: &[NegativeIncomeMonth]) -> Self {
        let details = months
            .iter()
            .map(|m| {
                format!(
                    "{}: pension £{} exceeds monthly salary £{} by £{}",
                    m.month,
                    pounds(m.monthly_pension),
                    pounds(m.monthly_salary),
                    pounds(m.deficit)
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self::with_details(
            "NEGATIVE_INCOME",
            format!(
                "Pension contributions exceed salary in {} month(s)",
                months.len()
            ),
            details,
        )
    }
}

/// Formats an amount with exactly two decimal places.
fn pounds(amount: Decimal) -> String {
    format!("{:.2}", round_to_penny(amount))
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
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
            EngineError::RatesNotFound { tax_year } => Self::bad_request(ApiError::with_details(
                "RATES_NOT_FOUND",
                format!("NI rates not found for tax year {}", tax_year),
                "No rate table is loaded for the requested tax year",
            )),
            EngineError::PresetNotFound { name } => Self::bad_request(ApiError::with_details(
                "PRESET_NOT_FOUND",
                format!("Distribution preset not found: {}", name),
                format!(
                    "Use one of {} or \"custom\"",
                    Preset::ALL
                        .iter()
                        .map(|p| p.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
            EngineError::InvalidInput { field, message } => Self::bad_request(ApiError::new(
                "INVALID_INPUT",
                format!("Invalid input '{}': {}", field, message),
            )),
            EngineError::InvalidDistribution { message } => Self::bad_request(ApiError::new(
                "INVALID_DISTRIBUTION",
                format!("Invalid distribution: {}", message),
            )),
            EngineError::NegativeIncome { months } => {
                Self::bad_request(ApiError::negative_income(&months))
            }
        }
    }
}

/// A distribution preset as listed by `/presets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    /// The preset name accepted by `/calculate`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Two-decimal monthly percentages, January first.
    ///
    /// These are display values. The equal table totals 99.97 and would be
    /// rejected if sent back as a custom distribution.
    pub percentages: Vec<Decimal>,
}

impl From<Preset> for PresetInfo {
    fn from(preset: Preset) -> Self {
        Self {
            name: preset.name().to_string(),
            description: preset.description().to_string(),
            percentages: preset.percentages().to_vec(),
        }
    }
}
