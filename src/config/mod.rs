//! Configuration loading and management for the NI engine.
//!
//! This module provides functionality to load NI rate tables from YAML files,
//! one file per tax year, along with scheme metadata.
//!
//! # Example
//!
//! ```no_run
//! use ni_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ni").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    LOWER_THRESHOLD_MONTHLY, NiConfig, NiRates, RATE_STANDARD, RATE_UPPER, SchemeMetadata,
    UPPER_THRESHOLD_MONTHLY,
};
