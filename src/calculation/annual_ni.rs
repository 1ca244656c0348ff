//! Annual NI calculation.
//!
//! Runs the monthly calculation for each of the twelve months of a
//! distribution and totals the result.

use rust_decimal::Decimal;

use crate::config::NiRates;
use crate::models::{AnnualResult, Distribution, MONTHS_IN_YEAR, MonthlyRecord};

use super::monthly_ni::{calculate_monthly_ni, round_to_penny};

/// Splits an annual salary into twelve equal monthly amounts.
pub(crate) fn monthly_salary(annual_salary: Decimal) -> Decimal {
    annual_salary / Decimal::from(MONTHS_IN_YEAR as u32)
}

/// The share of the annual pension taken in a month with the given percentage.
pub(crate) fn monthly_pension(total_pension: Decimal, percentage: Decimal) -> Decimal {
    total_pension * percentage / Decimal::ONE_HUNDRED
}

/// Calculates a year of NI for a salary and pension distribution.
///
/// Gross pay is the same every month (`annual_salary / 12`). Each month's
/// pension is `total_pension × percentage / 100`, and NI is calculated on
/// what remains. Monthly NI is rounded to the penny before being totalled,
/// and the total is rounded again.
///
/// No validation is performed; see
/// [`evaluate_strategy`](super::evaluate_strategy) for the validated entry point.
///
/// # Examples
///
/// ```
/// use ni_engine::calculation::calculate_annual_ni;
/// use ni_engine::config::NiRates;
/// use ni_engine::models::Distribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_annual_ni(
///     Decimal::from(24000),
///     Decimal::from(2400),
///     &Distribution::equal(),
///     &NiRates::default(),
/// );
/// assert_eq!(result.total_ni, Decimal::from_str("721.32").unwrap());
/// ```
pub fn calculate_annual_ni(
    annual_salary: Decimal,
    total_pension: Decimal,
    distribution: &Distribution,
    rates: &NiRates,
) -> AnnualResult {
    let gross_pay = monthly_salary(annual_salary);

    let monthly_breakdown: Vec<MonthlyRecord> = distribution
        .iter()
        .map(|(month, percentage)| {
            let pension = monthly_pension(total_pension, percentage);
            let niable_income = gross_pay - pension;
            MonthlyRecord {
                month,
                gross_pay,
                pension,
                niable_income,
                ni: calculate_monthly_ni(niable_income, rates),
            }
        })
        .collect();

    let total_ni = round_to_penny(monthly_breakdown.iter().map(|record| record.ni).sum());

    AnnualResult {
        monthly_breakdown,
        total_ni,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Preset};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn annual(salary: &str, pension: &str, distribution: &Distribution) -> AnnualResult {
        calculate_annual_ni(dec(salary), dec(pension), distribution, &NiRates::default())
    }

    #[test]
    fn test_no_pension_above_upper_threshold() {
        let result = annual("60000", "0", &Distribution::equal());

        assert_eq!(result.monthly_breakdown.len(), 12);
        for record in &result.monthly_breakdown {
            assert_eq!(record.gross_pay, dec("5000"));
            assert_eq!(record.pension, Decimal::ZERO);
            assert_eq!(record.niable_income, dec("5000"));
            assert_eq!(record.ni, dec("267.47"));
        }
        assert_eq!(result.total_ni, dec("3209.64"));
    }

    #[test]
    fn test_equal_distribution_in_standard_band() {
        let result = annual("24000", "2400", &Distribution::equal());

        for record in &result.monthly_breakdown {
            assert_eq!(record.gross_pay, dec("2000"));
            assert_eq!(record.pension.round_dp(10), dec("200"));
            assert_eq!(record.niable_income.round_dp(10), dec("1800"));
            assert_eq!(record.ni, dec("60.11"));
        }
        assert_eq!(result.total_ni, dec("721.32"));
    }

    #[test]
    fn test_frontloaded_distribution_breakdown() {
        let result = annual("24000", "2400", &Preset::Frontloaded.distribution());
        let breakdown = &result.monthly_breakdown;

        assert_eq!(breakdown[0].pension, dec("799.92"));
        assert_eq!(breakdown[0].niable_income, dec("1200.08"));
        assert_eq!(breakdown[0].ni, dec("12.11"));
        assert_eq!(breakdown[1].ni, dec("12.11"));
        assert_eq!(breakdown[2].niable_income, dec("1199.84"));
        assert_eq!(breakdown[2].ni, dec("12.09"));
        for record in &breakdown[3..] {
            assert_eq!(record.niable_income, dec("2000"));
            assert_eq!(record.ni, dec("76.11"));
        }
        assert_eq!(result.total_ni, dec("721.30"));
    }

    #[test]
    fn test_total_is_sum_of_rounded_months() {
        let result = annual("60000", "12000", &Preset::H1Frontloaded.distribution());

        let summed: Decimal = result.monthly_breakdown.iter().map(|r| r.ni).sum();
        assert_eq!(result.total_ni, summed);
        assert_eq!(result.total_ni, dec("2541.44"));
    }

    #[test]
    fn test_months_are_in_calendar_order() {
        let result = annual("30000", "3000", &Preset::Quarterly.distribution());

        let months: Vec<Month> = result.monthly_breakdown.iter().map(|r| r.month).collect();
        assert_eq!(months, Month::ALL.to_vec());
    }

    #[test]
    fn test_negative_niable_income_is_reported_not_clamped() {
        let result = annual("12000", "10000", &Preset::TwoMonth.distribution());

        assert_eq!(result.monthly_breakdown[0].niable_income, dec("-4000"));
        assert_eq!(result.monthly_breakdown[0].ni, Decimal::ZERO);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let distribution = Preset::Backloaded.distribution();
        let first = annual("45678.90", "5432.10", &distribution);
        let second = annual("45678.90", "5432.10", &distribution);
        assert_eq!(first, second);
    }
}
