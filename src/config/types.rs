//! Configuration types for the raise engine service.
//!
//! These structures are deserialized from `engine.yaml`. Every field has a
//! default so a partial file is accepted.

use serde::Deserialize;

/// The default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// The default window, in months, for upcoming-raise reports.
pub const DEFAULT_UPCOMING_WINDOW_MONTHS: u32 = 6;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Roster report settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Window used by `/roster` when a request gives none.
    pub upcoming_window_months: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            upcoming_window_months: DEFAULT_UPCOMING_WINDOW_MONTHS,
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Roster report settings.
    pub roster: RosterConfig,
}
