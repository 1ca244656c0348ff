//! Predefined pension distribution strategies.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::distribution::Distribution;
use super::month::MONTHS_IN_YEAR;

/// A named, fixed pension distribution strategy.
///
/// Presets serialize by name (e.g. `"frontloaded"`), which is also the name
/// accepted by [`Preset::from_name`].
///
/// # Example
///
/// ```
/// use ni_engine::models::{Month, Preset};
/// use rust_decimal::Decimal;
///
/// let preset = Preset::from_name("twomonth").unwrap();
/// assert_eq!(preset.distribution().get(Month::Feb), Decimal::from(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Equal contributions every month.
    Equal,
    /// The whole contribution spread over January to March.
    Frontloaded,
    /// The whole contribution spread over January to June.
    H1Frontloaded,
    /// A quarter of the contribution at the start of each quarter.
    Quarterly,
    /// The whole contribution spread over October to December.
    Backloaded,
    /// Half the contribution in each of January and February.
    TwoMonth,
}

const fn pct(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

impl Preset {
    /// All presets, in the order they are offered to users.
    pub const ALL: [Preset; 6] = [
        Preset::Equal,
        Preset::Frontloaded,
        Preset::H1Frontloaded,
        Preset::Quarterly,
        Preset::Backloaded,
        Preset::TwoMonth,
    ];

    /// Returns the preset's name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Equal => "equal",
            Preset::Frontloaded => "frontloaded",
            Preset::H1Frontloaded => "h1frontloaded",
            Preset::Quarterly => "quarterly",
            Preset::Backloaded => "backloaded",
            Preset::TwoMonth => "twomonth",
        }
    }

    /// Returns a human-readable description of the strategy.
    pub fn description(self) -> &'static str {
        match self {
            Preset::Equal => "Equal monthly pension contributions (same as baseline)",
            Preset::Frontloaded => "Front-loaded pension contributions (Q1 heavy)",
            Preset::H1Frontloaded => "H1 front-loaded pension contributions (first 6 months)",
            Preset::Quarterly => "Quarterly pension contributions (start of each quarter)",
            Preset::Backloaded => "Back-loaded pension contributions (Q4 heavy)",
            Preset::TwoMonth => "Two-month burst pension contributions (Jan & Feb only)",
        }
    }

    /// Looks up a preset by name, ignoring case.
    ///
    /// Returns `PresetNotFound` for unknown names. `"custom"` is not a preset.
    pub fn from_name(name: &str) -> EngineResult<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| EngineError::PresetNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the preset's two-decimal monthly percentages, January first.
    ///
    /// These are display values. The `Equal` table (8.33 eleven times, then
    /// 8.34) totals 99.97 and would fail [`validate_distribution`] if sent
    /// back as a custom distribution; use [`Preset::distribution`] to
    /// calculate.
    ///
    /// [`validate_distribution`]: crate::calculation::validate_distribution
    pub fn percentages(self) -> [Decimal; MONTHS_IN_YEAR] {
        let zero = Decimal::ZERO;
        match self {
            Preset::Equal => {
                let mut values = [pct(833); MONTHS_IN_YEAR];
                values[MONTHS_IN_YEAR - 1] = pct(834);
                values
            }
            Preset::Frontloaded => [
                pct(3333),
                pct(3333),
                pct(3334),
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
            ],
            Preset::H1Frontloaded => [
                pct(1667),
                pct(1667),
                pct(1667),
                pct(1667),
                pct(1667),
                pct(1665),
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
            ],
            Preset::Quarterly => [
                pct(2500),
                zero,
                zero,
                pct(2500),
                zero,
                zero,
                pct(2500),
                zero,
                zero,
                pct(2500),
                zero,
                zero,
            ],
            Preset::Backloaded => [
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                pct(3333),
                pct(3333),
                pct(3334),
            ],
            Preset::TwoMonth => [
                pct(5000),
                pct(5000),
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
                zero,
            ],
        }
    }

    /// Returns the distribution used when calculating with this preset.
    ///
    /// `Equal` calculates with the exact equal split (which shows as
    /// 8.33/8.34 at two decimals) so it matches the baseline; every other
    /// preset uses its table percentages.
    pub fn distribution(self) -> Distribution {
        match self {
            Preset::Equal => Distribution::equal(),
            other => Distribution::new(other.percentages()),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
