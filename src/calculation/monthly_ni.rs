//! Monthly NI calculation.
//!
//! This module applies the banded Class 1 rates to a single month's NI-able
//! income.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::NiRates;

/// Rounds a monetary amount to the nearest penny, halves away from zero.
pub fn round_to_penny(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the NI owed on one month's NI-able income.
///
/// The rates are banded:
/// - income at or below the lower threshold pays nothing
/// - income between the thresholds pays the standard rate on the excess over
///   the lower threshold
/// - income above the upper threshold pays the standard rate on the whole
///   band plus the upper rate on the excess over the upper threshold
///
/// Negative NI-able income pays nothing. The result is rounded to the penny.
///
/// # Examples
///
/// ```
/// use ni_engine::calculation::calculate_monthly_ni;
/// use ni_engine::config::NiRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = NiRates::default();
/// let ni = calculate_monthly_ni(Decimal::from(1800), &rates);
/// assert_eq!(ni, Decimal::from_str("60.11").unwrap());
/// ```
pub fn calculate_monthly_ni(niable_income: Decimal, rates: &NiRates) -> Decimal {
    let lower = rates.lower_threshold_monthly;
    let upper = rates.upper_threshold_monthly;

    let ni = if niable_income <= lower {
        Decimal::ZERO
    } else if niable_income <= upper {
        (niable_income - lower) * rates.standard_rate
    } else {
        let standard_band = (upper - lower) * rates.standard_rate;
        let upper_band = (niable_income - upper) * rates.upper_rate;
        standard_band + upper_band
    };

    round_to_penny(ni)
}
