//! Pension distribution model.
//!
//! A [`Distribution`] splits an annual pension contribution across the twelve
//! months of the year as percentages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::month::{MONTHS_IN_YEAR, Month};

/// Twelve monthly percentages of the annual pension contribution, January first.
///
/// A `Distribution` always holds exactly twelve entries. Whether the entries
/// are non-negative and total 100% is checked separately by
/// [`validate_distribution`](crate::calculation::validate_distribution), so a
/// distribution can be built from raw user input and reported on.
///
/// # Example
///
/// ```
/// use ni_engine::models::{Distribution, Month};
/// use rust_decimal::Decimal;
///
/// let equal = Distribution::equal();
/// assert_eq!(equal.total().round_dp(10), Decimal::ONE_HUNDRED);
/// assert!(equal.get(Month::Jan) > Decimal::new(833, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")]
pub struct Distribution([Decimal; MONTHS_IN_YEAR]);

impl Distribution {
    /// Creates a distribution from twelve monthly percentages.
    pub fn new(percentages: [Decimal; MONTHS_IN_YEAR]) -> Self {
        Self(percentages)
    }

    /// Returns the exact equal distribution.
    ///
    /// January to November each get 100/12 percent; December takes whatever
    /// remains so the twelve shares total 100.
    pub fn equal() -> Self {
        let share = Decimal::ONE_HUNDRED / Decimal::from(MONTHS_IN_YEAR as u32);
        let mut percentages = [share; MONTHS_IN_YEAR];
        percentages[MONTHS_IN_YEAR - 1] =
            Decimal::ONE_HUNDRED - share * Decimal::from((MONTHS_IN_YEAR - 1) as u32);
        Self(percentages)
    }

    /// Returns the percentage allocated to the given month.
    pub fn get(&self, month: Month) -> Decimal {
        self.0[month.index()]
    }

    /// Returns all twelve percentages in calendar order.
    pub fn percentages(&self) -> &[Decimal; MONTHS_IN_YEAR] {
        &self.0
    }

    /// Returns the sum of the twelve percentages.
    pub fn total(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    /// Iterates over `(month, percentage)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, Decimal)> + '_ {
        Month::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl TryFrom<Vec<Decimal>> for Distribution {
    type Error = EngineError;

    fn try_from(values: Vec<Decimal>) -> Result<Self, Self::Error> {
        let count = values.len();
        let percentages: [Decimal; MONTHS_IN_YEAR] =
            values.try_into().map_err(|_| EngineError::InvalidDistribution {
                message: format!(
                    "expected {} monthly percentages, got {}",
                    MONTHS_IN_YEAR, count
                ),
            })?;
        Ok(Self(percentages))
    }
}

impl From<Distribution> for Vec<Decimal> {
    fn from(distribution: Distribution) -> Self {
        distribution.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_equal_distribution_totals_100() {
        let equal = Distribution::equal();
        assert_eq!(equal.total().round_dp(20), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_equal_distribution_december_takes_remainder() {
        let equal = Distribution::equal();
        let share = Decimal::ONE_HUNDRED / Decimal::from(12);

        for month in &Month::ALL[..11] {
            assert_eq!(equal.get(*month), share);
        }
        assert_eq!(equal.get(Month::Dec), Decimal::ONE_HUNDRED - share * Decimal::from(11));
        assert_eq!(equal.get(Month::Dec).round_dp(2), dec("8.33"));
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let result = Distribution::try_from(vec![dec("50"), dec("50")]);

        match result {
            Err(EngineError::InvalidDistribution { message }) => {
                assert!(message.contains("expected 12"));
                assert!(message.contains("got 2"));
            }
            other => panic!("Expected InvalidDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_json_array() {
        let json = r#"["50", "50", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0"]"#;
        let distribution: Distribution = serde_json::from_str(json).unwrap();

        assert_eq!(distribution.get(Month::Jan), dec("50"));
        assert_eq!(distribution.get(Month::Mar), Decimal::ZERO);
        assert_eq!(distribution.total(), dec("100"));
    }

    #[test]
    fn test_deserialize_short_array_fails() {
        let json = r#"["100"]"#;
        let result: Result<Distribution, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_iter_pairs_months_with_percentages() {
        let mut values = [Decimal::ZERO; 12];
        values[3] = dec("100");
        let distribution = Distribution::new(values);

        let non_zero: Vec<Month> = distribution
            .iter()
            .filter(|(_, pct)| !pct.is_zero())
            .map(|(month, _)| month)
            .collect();
        assert_eq!(non_zero, vec![Month::Apr]);
    }
}
