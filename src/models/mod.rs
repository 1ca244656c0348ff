//! Core data models for the NI engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod distribution;
mod month;
mod preset;

pub use calculation_result::{
    AnnualResult, ComparisonReport, MonthlyRecord, NegativeIncomeMonth, SavingsOutcome,
    StrategyComparison,
};
pub use distribution::Distribution;
pub use month::{MONTHS_IN_YEAR, Month};
pub use preset::Preset;
