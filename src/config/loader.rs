//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading NI rate
//! tables from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{NiConfig, NiRates, SchemeMetadata};

/// Loads and provides access to NI configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to look up the rate table for a tax year.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ni/
/// ├── scheme.yaml          # Scheme metadata
/// └── rates/
///     └── 2025-26.yaml     # Rates for one tax year
/// ```
///
/// # Example
///
/// ```no_run
/// use ni_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ni").unwrap();
///
/// let rates = loader.rates_for("2025-26").unwrap();
/// println!("Lower threshold: £{}", rates.lower_threshold_monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: NiConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ni")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing, or the rates directory is empty
    /// - Any file contains invalid YAML or is missing a required field
    /// - A rate table fails validation or repeats a tax year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        Ok(Self {
            config: NiConfig::new(metadata, rates),
        })
    }

    /// Builds a loader from rate tables already in memory.
    ///
    /// Applies the same validation as [`ConfigLoader::load`].
    pub fn from_rates(metadata: SchemeMetadata, rates: Vec<NiRates>) -> EngineResult<Self> {
        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: "(no rate tables supplied)".to_string(),
            });
        }
        Self::check_rates(&rates, "(in memory)")?;
        Ok(Self {
            config: NiConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<NiRates>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let ni_rates = Self::load_yaml::<NiRates>(&path)?;
                Self::check_rates(std::slice::from_ref(&ni_rates), &path.display().to_string())?;
                debug!(tax_year = %ni_rates.tax_year, path = %path.display(), "Loaded NI rates");
                rates.push(ni_rates);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Self::check_rates(&rates, &rates_dir_str)?;

        Ok(rates)
    }

    /// Validates each table and rejects repeated tax years.
    fn check_rates(rates: &[NiRates], source: &str) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for ni_rates in rates {
            ni_rates
                .validate()
                .map_err(|message| EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("tax year {}: {}", ni_rates.tax_year, message),
                })?;
            if !seen.insert(ni_rates.tax_year.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("duplicate rates for tax year {}", ni_rates.tax_year),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying NI configuration.
    pub fn config(&self) -> &NiConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns all loaded rate tables, oldest first.
    pub fn rates(&self) -> &[NiRates] {
        self.config.rates()
    }

    /// Gets the rate table for a tax year (e.g. "2025-26").
    ///
    /// Returns `RatesNotFound` if no table was loaded for that year.
    pub fn rates_for(&self, tax_year: &str) -> EngineResult<&NiRates> {
        self.config
            .rates()
            .iter()
            .find(|r| r.tax_year == tax_year)
            .ok_or_else(|| EngineError::RatesNotFound {
                tax_year: tax_year.to_string(),
            })
    }

    /// Gets the rate table with the most recent effective date.
    pub fn latest_rates(&self) -> EngineResult<&NiRates> {
        self.config
            .rates()
            .last()
            .ok_or_else(|| EngineError::RatesNotFound {
                tax_year: "latest".to_string(),
            })
    }

    /// Gets the rates for `tax_year`, or the latest rates when none is given.
    pub fn resolve_rates(&self, tax_year: Option<&str>) -> EngineResult<&NiRates> {
        match tax_year {
            Some(year) => self.rates_for(year),
            None => self.latest_rates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ni"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_metadata() -> SchemeMetadata {
        SchemeMetadata {
            name: "Class 1 National Insurance".to_string(),
            jurisdiction: "UK".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    /// Creates a fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("ni_engine_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("rates")).unwrap();
        fs::write(
            dir.join("scheme.yaml"),
            "name: Test scheme\njurisdiction: UK\nsource_url: https://example.com\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.scheme().jurisdiction, "UK");
        assert!(!loader.rates().is_empty());
    }

    #[test]
    fn test_rates_for_2025_26_match_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rates = loader.rates_for("2025-26").unwrap();
        assert_eq!(*rates, NiRates::default());
        assert_eq!(rates.lower_threshold_monthly, dec("1048.67"));
        assert_eq!(rates.upper_threshold_monthly, dec("4189.33"));
    }

    #[test]
    fn test_rates_for_unknown_year_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.rates_for("1999-00") {
            Err(EngineError::RatesNotFound { tax_year }) => assert_eq!(tax_year, "1999-00"),
            other => panic!("Expected RatesNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rates_defaults_to_latest() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let latest = loader.latest_rates().unwrap();
        let resolved = loader.resolve_rates(None).unwrap();
        assert_eq!(latest, resolved);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scheme.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_empty_rates_directory_returns_error() {
        let dir = scratch_dir("empty_rates");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no rate files found"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad_yaml");
        fs::write(dir.join("rates").join("2025-26.yaml"), "tax_year: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("2025-26.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_inverted_thresholds_returns_parse_error() {
        let dir = scratch_dir("inverted");
        fs::write(
            dir.join("rates").join("2025-26.yaml"),
            "tax_year: \"2025-26\"\neffective_from: 2025-04-06\nlower_threshold_monthly: \"5000\"\nupper_threshold_monthly: \"4189.33\"\nstandard_rate: \"0.08\"\nupper_rate: \"0.02\"\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("2025-26"));
                assert!(message.contains("upper_threshold_monthly"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_from_rates_rejects_duplicate_tax_years() {
        let result = ConfigLoader::from_rates(
            test_metadata(),
            vec![NiRates::default(), NiRates::default()],
        );

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rates_latest_is_most_recent_effective_date() {
        let older = NiRates {
            tax_year: "2024-25".to_string(),
            effective_from: NaiveDate::from_ymd_opt(2024, 4, 6).unwrap(),
            ..NiRates::default()
        };
        let loader = ConfigLoader::from_rates(test_metadata(), vec![NiRates::default(), older])
            .unwrap();

        assert_eq!(loader.latest_rates().unwrap().tax_year, "2025-26");
        assert_eq!(loader.rates()[0].tax_year, "2024-25");
    }

    #[test]
    fn test_from_rates_rejects_empty_list() {
        let result = ConfigLoader::from_rates(test_metadata(), vec![]);
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
