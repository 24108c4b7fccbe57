//! Simulator Configuration Module
//!
//! Operator-tunable values loaded from TOML: the default scenario, slider
//! ranges, grid sizes, Fetkovich exponent and server address.
//!
//! ## Loading Order
//!
//! 1. `WELL_TRAVERSE_CONFIG` environment variable (path to TOML file)
//! 2. `well_traverse.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! // In main():
//! config::init(SimConfig::load());
//!
//! // Anywhere:
//! let opts = config::get().traverse_options();
//! ```

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;

use std::sync::OnceLock;

/// Global simulator configuration, initialized once at startup.
static SIM_CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Initialize the global configuration. Later calls are ignored.
pub fn init(config: SimConfig) {
    if SIM_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Falls back to built-in defaults if `init()` was never called.
pub fn get() -> &'static SimConfig {
    SIM_CONFIG.get_or_init(|| {
        tracing::warn!("config::get() called before config::init(), using defaults");
        SimConfig::default()
    })
}
