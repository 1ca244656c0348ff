//! Calculation result models for the NI engine.
//!
//! This module contains the monthly breakdown and annual totals produced by
//! an NI calculation, the comparison of a strategy against the equal-split
//! baseline, and the [`ComparisonReport`] envelope returned by the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Distribution, Month};

/// A single month of an NI calculation.
///
/// # Example
///
/// ```
/// use ni_engine::models::{Month, MonthlyRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = MonthlyRecord {
///     month: Month::Jan,
///     gross_pay: Decimal::from(2000),
///     pension: Decimal::from(200),
///     niable_income: Decimal::from(1800),
///     ni: Decimal::from_str("60.11").unwrap(),
/// };
/// assert_eq!(record.gross_pay - record.pension, record.niable_income);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// The month this record covers.
    pub month: Month,
    /// Monthly salary before pension (the same every month).
    pub gross_pay: Decimal,
    /// Pension contribution taken this month.
    pub pension: Decimal,
    /// Income subject to NI: gross pay minus pension.
    pub niable_income: Decimal,
    /// NI owed this month, rounded to the penny.
    pub ni: Decimal,
}

/// Twelve monthly records and the annual NI total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualResult {
    /// Monthly breakdown, January first.
    pub monthly_breakdown: Vec<MonthlyRecord>,
    /// Sum of the monthly NI amounts, rounded to the penny.
    pub total_ni: Decimal,
}

/// A month whose pension contribution exceeds that month's salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativeIncomeMonth {
    /// The offending month.
    pub month: Month,
    /// Pension contribution allocated to the month.
    pub monthly_pension: Decimal,
    /// The monthly salary.
    pub monthly_salary: Decimal,
    /// How far the pension exceeds the salary, to the penny.
    pub deficit: Decimal,
}

/// Whether a strategy saves or costs NI relative to the baseline.
///
/// Differences within a penny either way are treated as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsOutcome {
    /// The strategy pays less NI than the baseline.
    Saving,
    /// The strategy pays more NI than the baseline.
    Cost,
    /// The strategy pays the same NI as the baseline.
    Neutral,
}

impl SavingsOutcome {
    /// Classifies a savings amount (baseline total minus strategy total).
    ///
    /// # Example
    ///
    /// ```
    /// use ni_engine::models::SavingsOutcome;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(SavingsOutcome::from_savings(Decimal::from(12)), SavingsOutcome::Saving);
    /// assert_eq!(SavingsOutcome::from_savings(Decimal::new(1, 2)), SavingsOutcome::Neutral);
    /// ```
    pub fn from_savings(savings: Decimal) -> Self {
        let penny = Decimal::new(1, 2);
        if savings > penny {
            SavingsOutcome::Saving
        } else if savings < -penny {
            SavingsOutcome::Cost
        } else {
            SavingsOutcome::Neutral
        }
    }
}

/// A strategy's NI compared against the equal-distribution baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// NI with an exact equal monthly split.
    pub baseline: AnnualResult,
    /// NI with the requested distribution.
    pub optimized: AnnualResult,
    /// Baseline total minus optimized total; positive means the strategy saves.
    pub savings: Decimal,
    /// Savings as a percentage of the baseline total, rounded to 2 places.
    /// Zero when the baseline total is zero.
    pub savings_percentage: Decimal,
    /// Classification of `savings`.
    pub outcome: SavingsOutcome,
}

/// The complete result of an API comparison request.
///
/// Wraps a [`StrategyComparison`] with identifying metadata so that a
/// response can be traced back to the request and rate table that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year whose rates were applied (e.g. "2025-26").
    pub tax_year: String,
    /// The preset name, or "custom".
    pub strategy: String,
    /// Human-readable description of the strategy.
    pub strategy_description: String,
    /// Annual salary the calculation was run for.
    pub annual_salary: Decimal,
    /// Total annual pension contribution.
    pub total_pension: Decimal,
    /// The distribution that was evaluated.
    pub distribution: Distribution,
    /// Baseline versus strategy comparison.
    pub comparison: StrategyComparison,
    /// Calculation duration in microseconds.
    pub duration_us: u64,
}
