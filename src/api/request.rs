//! Request types for the NI engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Distribution, Preset};

/// Strategy name that selects caller-supplied percentages.
pub const CUSTOM_STRATEGY: &str = "custom";

/// Request body for the `/calculate` endpoint.
///
/// `strategy` is either a preset name (see [`Preset`]) or `"custom"`, in
/// which case `percentages` must hold the twelve monthly percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross annual salary.
    pub annual_salary: Decimal,
    /// Total annual pension contribution.
    pub total_pension: Decimal,
    /// Preset name or "custom".
    pub strategy: String,
    /// Monthly percentages for a custom strategy, January first.
    #[serde(default)]
    pub percentages: Option<Vec<Decimal>>,
    /// Tax year whose rates to apply; the latest loaded year when omitted.
    #[serde(default)]
    pub tax_year: Option<String>,
}

/// The distribution a request asked for, with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStrategy {
    /// Preset name, or "custom".
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// The twelve monthly percentages to evaluate.
    pub distribution: Distribution,
}

impl CalculationRequest {
    /// Turns the `strategy` and `percentages` fields into a distribution.
    ///
    /// Presets ignore any supplied percentages. A custom strategy without
    /// percentages is an `InvalidInput`; one with the wrong number of
    /// entries is an `InvalidDistribution`.
    pub fn resolve_strategy(&self) -> EngineResult<ResolvedStrategy> {
        if self.strategy.trim().eq_ignore_ascii_case(CUSTOM_STRATEGY) {
            let percentages = self
                .percentages
                .clone()
                .ok_or_else(|| EngineError::InvalidInput {
                    field: "percentages".to_string(),
                    message: "required when strategy is \"custom\"".to_string(),
                })?;
            return Ok(ResolvedStrategy {
                name: CUSTOM_STRATEGY.to_string(),
                description: "Custom pension contribution distribution".to_string(),
                distribution: Distribution::try_from(percentages)?,
            });
        }

        let preset = Preset::from_name(&self.strategy)?;
        Ok(ResolvedStrategy {
            name: preset.name().to_string(),
            description: preset.description().to_string(),
            distribution: preset.distribution(),
        })
    }
}
