//! Input and distribution validation.
//!
//! These checks run before a strategy is evaluated so that the caller can
//! report every problem with the request and let the user correct it.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Distribution, NegativeIncomeMonth};

use super::annual_ni::{monthly_pension, monthly_salary};
use super::monthly_ni::round_to_penny;

/// How far a distribution's total may stray from 100%.
pub const DISTRIBUTION_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest annual salary accepted, in pounds.
pub const MAX_ANNUAL_SALARY: u64 = 1_000_000_000_000;

/// Checks that the salary is positive and at most [`MAX_ANNUAL_SALARY`], and
/// that the pension is between zero and the salary.
///
/// # Examples
///
/// ```
/// use ni_engine::calculation::validate_inputs;
/// use rust_decimal::Decimal;
///
/// assert!(validate_inputs(Decimal::from(30000), Decimal::from(3000)).is_ok());
/// assert!(validate_inputs(Decimal::ZERO, Decimal::ZERO).is_err());
/// ```
pub fn validate_inputs(annual_salary: Decimal, total_pension: Decimal) -> EngineResult<()> {
    if annual_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "annual_salary".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if annual_salary > Decimal::from(MAX_ANNUAL_SALARY) {
        return Err(EngineError::InvalidInput {
            field: "annual_salary".to_string(),
            message: format!("cannot exceed {}", MAX_ANNUAL_SALARY),
        });
    }
    if total_pension < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "total_pension".to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    if total_pension > annual_salary {
        return Err(EngineError::InvalidInput {
            field: "total_pension".to_string(),
            message: format!("cannot exceed annual salary ({})", annual_salary),
        });
    }
    Ok(())
}

/// Checks that every percentage is non-negative and that they total 100%
/// within [`DISTRIBUTION_TOLERANCE`].
pub fn validate_distribution(distribution: &Distribution) -> EngineResult<()> {
    if let Some((month, percentage)) = distribution.iter().find(|(_, pct)| *pct < Decimal::ZERO) {
        return Err(EngineError::InvalidDistribution {
            message: format!("percentage for {} is negative ({})", month, percentage),
        });
    }

    // Bounds each entry so the total cannot overflow.
    let ceiling = Decimal::ONE_HUNDRED + DISTRIBUTION_TOLERANCE;
    if let Some((month, percentage)) = distribution.iter().find(|(_, pct)| *pct > ceiling) {
        return Err(EngineError::InvalidDistribution {
            message: format!("percentage for {} exceeds 100% ({})", month, percentage),
        });
    }

    let total = distribution.total();
    if (total - Decimal::ONE_HUNDRED).abs() > DISTRIBUTION_TOLERANCE {
        return Err(EngineError::InvalidDistribution {
            message: format!("percentages total {}%, expected 100%", total.normalize()),
        });
    }

    Ok(())
}

/// Finds every month whose pension contribution exceeds the monthly salary.
///
/// Returns the offending months in calendar order, or an empty list when
/// every month has non-negative NI-able income. NI-able income is compared
/// at the penny, so a remainder share that overshoots the salary by a
/// fraction of a penny is not a violation.
///
/// # Examples
///
/// ```
/// use ni_engine::calculation::validate_no_negative_income;
/// use ni_engine::models::{Month, Preset};
/// use rust_decimal::Decimal;
///
/// let violations = validate_no_negative_income(
///     Decimal::from(12000),
///     Decimal::from(10000),
///     &Preset::TwoMonth.distribution(),
/// );
/// assert_eq!(violations.len(), 2);
/// assert_eq!(violations[1].month, Month::Feb);
/// assert_eq!(violations[1].deficit, Decimal::from(4000));
/// ```
pub fn validate_no_negative_income(
    annual_salary: Decimal,
    total_pension: Decimal,
    distribution: &Distribution,
) -> Vec<NegativeIncomeMonth> {
    let salary = monthly_salary(annual_salary);

    distribution
        .iter()
        .filter_map(|(month, percentage)| {
            let pension = monthly_pension(total_pension, percentage);
            let niable_income = round_to_penny(salary - pension);
            (niable_income < Decimal::ZERO).then(|| NegativeIncomeMonth {
                month,
                monthly_pension: pension,
                monthly_salary: salary,
                deficit: niable_income.abs(),
            })
        })
        .collect()
}
