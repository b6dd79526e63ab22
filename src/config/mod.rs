//! Configuration loading for the Raise Eligibility Engine.
//!
//! The pay-grade table is compiled into the crate; configuration only covers
//! service settings such as the bind address and the default upcoming-raise
//! window.
//!
//! # Example
//!
//! ```no_run
//! use raise_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Window: {} months", config.config().roster.upcoming_window_months);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_UPCOMING_WINDOW_MONTHS, EngineConfig, RosterConfig, ServerConfig,
};
