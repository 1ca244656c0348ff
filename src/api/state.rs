//! Application state for the NI engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded NI rate tables.
#[derive(Clone)]
pub struct AppState {
    /// The loaded NI configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{NiRates, SchemeMetadata};

    #[test]
    fn test_clones_share_config() {
        let metadata = SchemeMetadata {
            name: "Class 1 National Insurance".to_string(),
            jurisdiction: "UK".to_string(),
            source_url: "https://example.com".to_string(),
        };
        let loader = ConfigLoader::from_rates(metadata, vec![NiRates::default()]).unwrap();

        let state = AppState::new(loader);
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
        assert_eq!(clone.config().rates().len(), 1);
    }
}
