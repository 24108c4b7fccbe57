//! Simulator Configuration - operator-tunable TOML values
//!
//! Every section implements `Default` with the built-in values, so an empty
//! or missing file behaves exactly like the compiled-in constants.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    DEFAULT_OIL_API, DEFAULT_PRODUCTION_RATE, DEFAULT_RESERVOIR_PRESSURE_PSI,
    DEFAULT_SERVER_ADDR, DEFAULT_TUBING_ID_IN, DEFAULT_WATER_CUT, FETKOVICH_N, IPR_POINTS,
    TRAVERSE_POINTS,
};
use crate::physics_engine::{IprOptions, TraverseOptions};
use crate::types::{Locale, ParamBounds, SimulatorParams};

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "WELL_TRAVERSE_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "well_traverse.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `SimConfig::load()` which searches:
/// 1. `$WELL_TRAVERSE_CONFIG`
/// 2. `./well_traverse.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Well identification (labels only)
    #[serde(default)]
    pub well: WellInfo,

    /// Parameter record used when a caller does not supply one
    #[serde(default, deserialize_with = "deserialize_scenario")]
    pub scenario: SimulatorParams,

    /// Operator control ranges
    #[serde(default)]
    pub bounds: ParamBounds,

    /// Pressure traverse grid and message language
    #[serde(default)]
    pub traverse: TraverseConfig,

    /// IPR grid and Fetkovich exponent
    #[serde(default)]
    pub ipr: IprConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl SimConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELL_TRAVERSE_CONFIG` environment variable
    /// 2. `./well_traverse.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Validate grid sizes, exponent and bounds for internal consistency.
    ///
    /// Rules:
    /// - Traverse needs at least 2 points, IPR at least 1 interval
    /// - Fetkovich exponent in (0, 1]
    /// - Every bound has finite min < max
    /// - Default scenario values are finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.traverse.points < 2 {
            errors.push(format!(
                "traverse.points must be >= 2 (got {})",
                self.traverse.points
            ));
        }
        if self.ipr.points == 0 {
            errors.push("ipr.points must be > 0".to_string());
        }
        let n = self.ipr.fetkovich_n;
        if !n.is_finite() || n <= 0.0 || n > 1.0 {
            errors.push(format!("ipr.fetkovich_n must be in (0, 1], got {n}"));
        }

        for (name, range) in self.bounds.entries() {
            if !range.min.is_finite() || !range.max.is_finite() {
                errors.push(format!(
                    "bounds.{name}: values must be finite (got min={}, max={})",
                    range.min, range.max
                ));
            } else if range.min >= range.max {
                errors.push(format!(
                    "bounds.{name}: min ({}) must be < max ({})",
                    range.min, range.max
                ));
            }
        }

        if let Err(e) = self.scenario.ensure_finite() {
            errors.push(format!("scenario: {e}"));
        }

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    pub fn traverse_options(&self) -> TraverseOptions {
        TraverseOptions {
            points: self.traverse.points,
            locale: self.traverse.locale,
        }
    }

    pub fn ipr_options(&self) -> IprOptions {
        IprOptions {
            points: self.ipr.points,
            fetkovich_n: self.ipr.fetkovich_n,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata, not used for logic but shown in logs and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInfo {
    #[serde(default = "default_well_name")]
    pub name: String,

    #[serde(default)]
    pub field: String,
}

fn default_well_name() -> String {
    "DEFAULT".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
        }
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// TOML shape of `[scenario]`.
///
/// Every key falls back to the built-in scenario, unlike the strict
/// `SimulatorParams` accepted from HTTP bodies.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioConfig {
    #[serde(default = "default_reservoir_pressure")]
    reservoir_pressure: f64,

    #[serde(default = "default_water_cut")]
    water_cut: f64,

    #[serde(rename = "oilAPI", default = "default_oil_api")]
    oil_api: f64,

    #[serde(rename = "tubingID", default = "default_tubing_id")]
    tubing_id: f64,

    #[serde(default = "default_production_rate")]
    production_rate: f64,

    #[serde(default)]
    depth: Option<f64>,

    #[serde(default)]
    bubble_point_pressure: Option<f64>,

    #[serde(default)]
    productivity_index: Option<f64>,
}

fn default_reservoir_pressure() -> f64 { DEFAULT_RESERVOIR_PRESSURE_PSI }
fn default_water_cut() -> f64 { DEFAULT_WATER_CUT }
fn default_oil_api() -> f64 { DEFAULT_OIL_API }
fn default_tubing_id() -> f64 { DEFAULT_TUBING_ID_IN }
fn default_production_rate() -> f64 { DEFAULT_PRODUCTION_RATE }

impl From<ScenarioConfig> for SimulatorParams {
    fn from(s: ScenarioConfig) -> Self {
        Self {
            reservoir_pressure: s.reservoir_pressure,
            water_cut: s.water_cut,
            oil_api: s.oil_api,
            tubing_id: s.tubing_id,
            production_rate: s.production_rate,
            depth: s.depth,
            bubble_point_pressure: s.bubble_point_pressure,
            productivity_index: s.productivity_index,
        }
    }
}

fn deserialize_scenario<'de, D>(deserializer: D) -> Result<SimulatorParams, D::Error>
where
    D: Deserializer<'de>,
{
    ScenarioConfig::deserialize(deserializer).map(SimulatorParams::from)
}

// ============================================================================
// Traverse
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseConfig {
    /// Depth grid size including bottom-hole and surface
    #[serde(default = "default_traverse_points")]
    pub points: usize,

    /// Status message language: "en" or "ar"
    #[serde(default)]
    pub locale: Locale,
}

fn default_traverse_points() -> usize { TRAVERSE_POINTS }

impl Default for TraverseConfig {
    fn default() -> Self {
        Self {
            points: default_traverse_points(),
            locale: Locale::default(),
        }
    }
}

// ============================================================================
// IPR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IprConfig {
    /// Number of pwf intervals per curve
    #[serde(default = "default_ipr_points")]
    pub points: usize,

    /// Fetkovich deliverability exponent
    #[serde(default = "default_fetkovich_n")]
    pub fetkovich_n: f64,
}

fn default_ipr_points() -> usize { IPR_POINTS }
fn default_fetkovich_n() -> f64 { FETKOVICH_N }

impl Default for IprConfig {
    fn default() -> Self {
        Self {
            points: default_ipr_points(),
            fetkovich_n: default_fetkovich_n(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    DEFAULT_SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}
