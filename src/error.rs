//! Error types for the NI engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs and
//! calculating National Insurance.

use thiserror::Error;

use crate::models::NegativeIncomeMonth;

/// The main error type for the NI engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ni_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "annual_salary".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'annual_salary': must be greater than zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No NI rate table was loaded for the requested tax year.
    #[error("NI rates not found for tax year {tax_year}")]
    RatesNotFound {
        /// The tax year that was requested.
        tax_year: String,
    },

    /// The named distribution preset does not exist.
    #[error("Distribution preset not found: {name}")]
    PresetNotFound {
        /// The preset name that was requested.
        name: String,
    },

    /// Salary or pension amounts were out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A distribution did not have twelve non-negative entries totalling 100%.
    #[error("Invalid distribution: {message}")]
    InvalidDistribution {
        /// A description of what made the distribution invalid.
        message: String,
    },

    /// One or more months would have negative NI-able income.
    #[error("Negative NI-able income in {} month(s): {}", .months.len(), month_labels(.months))]
    NegativeIncome {
        /// Every offending month, in calendar order.
        months: Vec<NegativeIncomeMonth>,
    },
}

fn month_labels(months: &[NegativeIncomeMonth]) -> String {
    months
        .iter()
        .map(|m| m.month.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
