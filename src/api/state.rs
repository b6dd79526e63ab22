//! Application state for the Raise Eligibility Engine API.

use std::sync::Arc;

use crate::config::EngineConfig;

/// Shared application state.
///
/// Holds the loaded engine configuration, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
