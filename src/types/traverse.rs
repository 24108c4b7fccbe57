//! Pressure traverse output

use serde::{Deserialize, Serialize};

use super::WellStatus;

/// Discretized wellbore pressure profile plus derived scalars.
///
/// `depth_array[i]` and `pressure_array[i]` describe the same grid point.
/// Index 0 is bottom-hole, the last index is the wellhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraverseResult {
    /// Depths (ft), strictly decreasing from well depth to 0
    pub depth_array: Vec<f64>,
    /// Pressures (psi) at each depth
    pub pressure_array: Vec<f64>,
    /// Bottom-hole flowing pressure (psi)
    pub pwf: f64,
    /// Wellhead pressure (psi)
    pub whp: f64,
    /// Mixture velocity in the tubing (ft/s)
    pub velocity: f64,
    pub status: WellStatus,
    pub status_message: String,
    /// Mixture specific gravity at wellhead conditions
    #[serde(rename = "fluidSG")]
    pub fluid_sg: f64,
}

impl TraverseResult {
    /// `(depth, pressure)` pairs from bottom-hole to surface.
    pub fn profile(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.depth_array
            .iter()
            .copied()
            .zip(self.pressure_array.iter().copied())
    }

    /// Total pressure lost between bottom-hole and wellhead (psi).
    pub fn tubing_pressure_drop(&self) -> f64 {
        self.pwf - self.whp
    }
}
