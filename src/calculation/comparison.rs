//! Strategy comparison against the equal-distribution baseline.

use rust_decimal::Decimal;

use crate::config::NiRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Distribution, SavingsOutcome, StrategyComparison};

use super::annual_ni::calculate_annual_ni;
use super::monthly_ni::round_to_penny;
use super::validation::{validate_distribution, validate_inputs, validate_no_negative_income};

/// Compares a distribution's annual NI with the equal-distribution baseline.
///
/// The baseline uses [`Distribution::equal`]. `savings` is the baseline total
/// minus the strategy total, so a positive value means the strategy pays
/// less NI. `savings_percentage` is relative to the baseline total, rounded
/// to two places, and zero when the baseline pays no NI.
///
/// Inputs are not validated; use [`evaluate_strategy`] for user input.
///
/// # Examples
///
/// ```
/// use ni_engine::calculation::compare_strategies;
/// use ni_engine::config::NiRates;
/// use ni_engine::models::{Preset, SavingsOutcome};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comparison = compare_strategies(
///     Decimal::from(60000),
///     Decimal::from(12000),
///     &Preset::Frontloaded.distribution(),
///     &NiRates::default(),
/// );
/// assert_eq!(comparison.savings, Decimal::from_str("426.09").unwrap());
/// assert_eq!(comparison.outcome, SavingsOutcome::Saving);
/// ```
pub fn compare_strategies(
    annual_salary: Decimal,
    total_pension: Decimal,
    distribution: &Distribution,
    rates: &NiRates,
) -> StrategyComparison {
    let baseline = calculate_annual_ni(annual_salary, total_pension, &Distribution::equal(), rates);
    let optimized = calculate_annual_ni(annual_salary, total_pension, distribution, rates);

    let savings = baseline.total_ni - optimized.total_ni;
    let savings_percentage = if baseline.total_ni.is_zero() {
        Decimal::ZERO
    } else {
        round_to_penny(savings / baseline.total_ni * Decimal::ONE_HUNDRED)
    };

    StrategyComparison {
        baseline,
        optimized,
        savings,
        savings_percentage,
        outcome: SavingsOutcome::from_savings(savings),
    }
}

/// Validates a request and compares the distribution with the baseline.
///
/// Checks run in order: salary and pension ranges, then the distribution
/// itself, then the per-month income check. A negative-income failure
/// carries every offending month.
pub fn evaluate_strategy(
    annual_salary: Decimal,
    total_pension: Decimal,
    distribution: &Distribution,
    rates: &NiRates,
) -> EngineResult<StrategyComparison> {
    validate_inputs(annual_salary, total_pension)?;
    validate_distribution(distribution)?;

    let months = validate_no_negative_income(annual_salary, total_pension, distribution);
    if !months.is_empty() {
        return Err(EngineError::NegativeIncome { months });
    }

    Ok(compare_strategies(annual_salary, total_pension, distribution, rates))
}
