//! Calculation logic for the NI engine.
//!
//! This module contains the pure calculation functions: monthly NI on a
//! single month's income, a year of NI for a pension distribution, the
//! validation applied to salary, pension and distribution inputs, and the
//! comparison of a distribution against the equal-split baseline.

mod annual_ni;
mod comparison;
mod monthly_ni;
mod validation;

pub use annual_ni::calculate_annual_ni;
pub use comparison::{compare_strategies, evaluate_strategy};
pub use monthly_ni::{calculate_monthly_ni, round_to_penny};
pub use validation::{
    DISTRIBUTION_TOLERANCE, MAX_ANNUAL_SALARY, validate_distribution, validate_inputs, validate_no_negative_income,
};
