//! Configuration types for NI calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly primary threshold for 2025/26 (£242/week × 52 / 12).
pub const LOWER_THRESHOLD_MONTHLY: Decimal = Decimal::from_parts(104867, 0, 0, false, 2);
/// Monthly upper earnings limit for 2025/26 (£967/week × 52 / 12).
pub const UPPER_THRESHOLD_MONTHLY: Decimal = Decimal::from_parts(418933, 0, 0, false, 2);
/// Rate charged between the lower and upper thresholds.
pub const RATE_STANDARD: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
/// Rate charged above the upper threshold.
pub const RATE_UPPER: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Metadata about the NI scheme the rate tables belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// Human-readable name of the scheme.
    pub name: String,
    /// Jurisdiction the scheme applies in (e.g. "UK").
    pub jurisdiction: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// Employee (Class 1 primary) NI rates for one tax year.
///
/// Thresholds are monthly amounts; rates are fractions (0.08 = 8%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiRates {
    /// The tax year label (e.g. "2025-26").
    pub tax_year: String,
    /// The first day these rates apply.
    pub effective_from: NaiveDate,
    /// Monthly income at or below which no NI is due.
    pub lower_threshold_monthly: Decimal,
    /// Monthly income above which the upper rate applies.
    pub upper_threshold_monthly: Decimal,
    /// Rate between the thresholds.
    pub standard_rate: Decimal,
    /// Rate above the upper threshold.
    pub upper_rate: Decimal,
}

impl NiRates {
    /// Checks that thresholds are ordered and rates are fractions.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.lower_threshold_monthly <= Decimal::ZERO {
            return Err("lower_threshold_monthly must be positive".to_string());
        }
        if self.upper_threshold_monthly <= self.lower_threshold_monthly {
            return Err(format!(
                "upper_threshold_monthly ({}) must exceed lower_threshold_monthly ({})",
                self.upper_threshold_monthly, self.lower_threshold_monthly
            ));
        }
        for (name, rate) in [
            ("standard_rate", self.standard_rate),
            ("upper_rate", self.upper_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(format!("{} ({}) must be between 0 and 1", name, rate));
            }
        }
        Ok(())
    }
}

impl Default for NiRates {
    /// The 2025/26 rates.
    fn default() -> Self {
        Self {
            tax_year: "2025-26".to_string(),
            effective_from: NaiveDate::from_ymd_opt(2025, 4, 6).unwrap_or_default(),
            lower_threshold_monthly: LOWER_THRESHOLD_MONTHLY,
            upper_threshold_monthly: UPPER_THRESHOLD_MONTHLY,
            standard_rate: RATE_STANDARD,
            upper_rate: RATE_UPPER,
        }
    }
}

/// The complete NI configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct NiConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// Rate tables by effective date (sorted oldest first).
    rates: Vec<NiRates>,
}

impl NiConfig {
    /// Creates a new NiConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: Vec<NiRates>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all rate tables, oldest first.
    pub fn rates(&self) -> &[NiRates] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates_for(tax_year: &str, effective_from: NaiveDate) -> NiRates {
        NiRates {
            tax_year: tax_year.to_string(),
            effective_from,
            ..NiRates::default()
        }
    }

    #[test]
    fn test_default_rates_are_2025_26() {
        let rates = NiRates::default();
        assert_eq!(rates.tax_year, "2025-26");
        assert_eq!(rates.effective_from, NaiveDate::from_ymd_opt(2025, 4, 6).unwrap());
        assert_eq!(rates.lower_threshold_monthly, dec("1048.67"));
        assert_eq!(rates.upper_threshold_monthly, dec("4189.33"));
        assert_eq!(rates.standard_rate, dec("0.08"));
        assert_eq!(rates.upper_rate, dec("0.02"));
    }

    #[test]
    fn test_default_rates_are_valid() {
        assert!(NiRates::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let rates = NiRates {
            upper_threshold_monthly: dec("1000"),
            ..NiRates::default()
        };
        let message = rates.validate().unwrap_err();
        assert!(message.contains("upper_threshold_monthly"));
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let rates = NiRates {
            standard_rate: dec("8"),
            ..NiRates::default()
        };
        let message = rates.validate().unwrap_err();
        assert!(message.contains("standard_rate"));
    }

    #[test]
    fn test_config_sorts_rates_by_effective_date() {
        let metadata = SchemeMetadata {
            name: "Class 1 NI".to_string(),
            jurisdiction: "UK".to_string(),
            source_url: "https://example.com".to_string(),
        };
        let config = NiConfig::new(
            metadata,
            vec![
                rates_for("2025-26", NaiveDate::from_ymd_opt(2025, 4, 6).unwrap()),
                rates_for("2024-25", NaiveDate::from_ymd_opt(2024, 4, 6).unwrap()),
            ],
        );

        let years: Vec<&str> = config.rates().iter().map(|r| r.tax_year.as_str()).collect();
        assert_eq!(years, vec!["2024-25", "2025-26"]);
    }

    #[test]
    fn test_deserialize_rates_from_yaml() {
        let yaml = r#"
tax_year: "2025-26"
effective_from: 2025-04-06
lower_threshold_monthly: "1048.67"
upper_threshold_monthly: "4189.33"
standard_rate: "0.08"
upper_rate: "0.02"
"#;
        let rates: NiRates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates, NiRates::default());
    }
}
