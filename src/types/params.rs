//! Simulator input record and opt-in range checks

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::defaults::{
    DEFAULT_BUBBLE_POINT_FRACTION, DEFAULT_DEPTH_FT, DEFAULT_OIL_API, DEFAULT_PRODUCTION_RATE,
    DEFAULT_PRODUCTIVITY_INDEX, DEFAULT_RESERVOIR_PRESSURE_PSI, DEFAULT_TUBING_ID_IN,
    DEFAULT_WATER_CUT,
};

/// Well and reservoir parameters driving one calculation.
///
/// Optional fields resolve to their defaults through the accessor methods;
/// the engine never mutates the record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorParams {
    /// Static reservoir pressure (psi)
    pub reservoir_pressure: f64,
    /// Fraction of produced liquid that is water, 0-1
    pub water_cut: f64,
    /// Oil gravity (°API)
    #[serde(rename = "oilAPI")]
    pub oil_api: f64,
    /// Tubing inner diameter (inches)
    #[serde(rename = "tubingID")]
    pub tubing_id: f64,
    /// Surface production rate (STB/day)
    pub production_rate: f64,
    /// Well depth (ft), defaults to 8000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Bubble point pressure (psi), defaults to 0.7 × reservoir pressure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_point_pressure: Option<f64>,
    /// Productivity index (STB/day/psi), defaults to 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity_index: Option<f64>,
}

impl Default for SimulatorParams {
    fn default() -> Self {
        Self {
            reservoir_pressure: DEFAULT_RESERVOIR_PRESSURE_PSI,
            water_cut: DEFAULT_WATER_CUT,
            oil_api: DEFAULT_OIL_API,
            tubing_id: DEFAULT_TUBING_ID_IN,
            production_rate: DEFAULT_PRODUCTION_RATE,
            depth: None,
            bubble_point_pressure: None,
            productivity_index: None,
        }
    }
}

impl SimulatorParams {
    pub fn depth(&self) -> f64 {
        self.depth.unwrap_or(DEFAULT_DEPTH_FT)
    }

    pub fn bubble_point(&self) -> f64 {
        self.bubble_point_pressure
            .unwrap_or(DEFAULT_BUBBLE_POINT_FRACTION * self.reservoir_pressure)
    }

    pub fn productivity_index(&self) -> f64 {
        self.productivity_index.unwrap_or(DEFAULT_PRODUCTIVITY_INDEX)
    }

    /// Reject non-finite inputs, which would turn every output into NaN.
    ///
    /// Physically implausible but finite values are accepted; see [`check`](Self::check).
    pub fn ensure_finite(&self) -> Result<(), ParamError> {
        let fields = [
            ("reservoirPressure", Some(self.reservoir_pressure)),
            ("waterCut", Some(self.water_cut)),
            ("oilAPI", Some(self.oil_api)),
            ("tubingID", Some(self.tubing_id)),
            ("productionRate", Some(self.production_rate)),
            ("depth", self.depth),
            ("bubblePointPressure", self.bubble_point_pressure),
            ("productivityIndex", self.productivity_index),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ParamError::NonFinite { field: name, value: v });
                }
            }
        }
        Ok(())
    }

    /// Compare the record against the interactive control ranges.
    ///
    /// Returns warnings only. The engine computes regardless.
    pub fn check(&self, bounds: &ParamBounds) -> Vec<ParamWarning> {
        let mut warnings = Vec::new();

        bounds.reservoir_pressure.check("reservoirPressure", self.reservoir_pressure, &mut warnings);
        bounds.water_cut.check("waterCut", self.water_cut, &mut warnings);
        bounds.oil_api.check("oilAPI", self.oil_api, &mut warnings);
        bounds.tubing_id.check("tubingID", self.tubing_id, &mut warnings);
        bounds.production_rate.check("productionRate", self.production_rate, &mut warnings);

        if let Some(depth) = self.depth {
            if depth <= 0.0 {
                warnings.push(ParamWarning::new("depth", format!("depth {depth:.0} ft must be > 0")));
            }
        }

        if self.productivity_index() <= 0.0 {
            warnings.push(ParamWarning::new(
                "productivityIndex",
                format!(
                    "productivity index {:.3} STB/d/psi must be > 0 (pwf becomes non-finite)",
                    self.productivity_index()
                ),
            ));
        }

        // Only the Vogel curve clamps this; Fetkovich and the traverse ignore the bubble point.
        let pb = self.bubble_point();
        if pb > self.reservoir_pressure {
            warnings.push(ParamWarning::new(
                "bubblePointPressure",
                format!(
                    "bubble point {pb:.0} psi exceeds reservoir pressure {:.0} psi; Vogel curve clamps it",
                    self.reservoir_pressure
                ),
            ));
        }

        warnings
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Inclusive range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, field: &'static str, value: f64, warnings: &mut Vec<ParamWarning>) {
        if !self.contains(value) {
            warnings.push(ParamWarning::new(
                field,
                format!("{field} = {value} is outside {}..={}", self.min, self.max),
            ));
        }
    }
}

/// Operator control ranges for each adjustable parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    #[serde(default = "default_reservoir_pressure_range")]
    pub reservoir_pressure: Range,
    #[serde(default = "default_water_cut_range")]
    pub water_cut: Range,
    #[serde(default = "default_oil_api_range")]
    pub oil_api: Range,
    #[serde(default = "default_tubing_id_range")]
    pub tubing_id: Range,
    #[serde(default = "default_production_rate_range")]
    pub production_rate: Range,
}

fn default_reservoir_pressure_range() -> Range { Range::new(1000.0, 6000.0) }
fn default_water_cut_range() -> Range { Range::new(0.0, 1.0) }
fn default_oil_api_range() -> Range { Range::new(10.0, 50.0) }
fn default_tubing_id_range() -> Range { Range::new(1.5, 4.5) }
fn default_production_rate_range() -> Range { Range::new(100.0, 5000.0) }

impl Default for ParamBounds {
    fn default() -> Self {
        Self {
            reservoir_pressure: default_reservoir_pressure_range(),
            water_cut: default_water_cut_range(),
            oil_api: default_oil_api_range(),
            tubing_id: default_tubing_id_range(),
            production_rate: default_production_rate_range(),
        }
    }
}

impl ParamBounds {
    /// Named ranges, in display order.
    pub fn entries(&self) -> [(&'static str, Range); 5] {
        [
            ("reservoir_pressure", self.reservoir_pressure),
            ("water_cut", self.water_cut),
            ("oil_api", self.oil_api),
            ("tubing_id", self.tubing_id),
            ("production_rate", self.production_rate),
        ]
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// A non-fatal parameter observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamWarning {
    pub field: &'static str,
    pub message: String,
}

impl ParamWarning {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
