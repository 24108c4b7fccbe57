//! Pressure traverse along the production tubing
//!
//! Integrates the mixture gradient plus friction loss from bottom-hole to
//! surface over a fixed depth grid using explicit forward steps.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::fluid_models::{api_to_specific_gravity, dynamic_gradient};
use super::status::classify;
use crate::config::defaults::{
    FRICTION_CONSTANT, FRICTION_ID_EXPONENT, FRICTION_RATE_EXPONENT, INCH_DIAMETER_TO_FT_RADIUS,
    SECONDS_PER_DAY, STB_TO_FT3, TRAVERSE_POINTS,
};
use crate::types::{Locale, SimulatorParams, TraverseResult};

/// Tunables for [`calculate_traverse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraverseOptions {
    /// Depth grid size, surface and bottom-hole included
    pub points: usize,
    /// Language of the status message
    pub locale: Locale,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            points: TRAVERSE_POINTS,
            locale: Locale::En,
        }
    }
}

/// Evenly spaced depths from `depth` down to 0.
///
/// Index 0 is the deepest point. `points` below 2 is raised to 2 so the grid
/// always contains both bottom-hole and surface.
pub fn depth_grid(depth: f64, points: usize) -> Vec<f64> {
    let n = points.max(2);
    let last = (n - 1) as f64;
    (0..n).map(|i| depth - (i as f64 * depth) / last).collect()
}

/// Bottom-hole flowing pressure from the linear inflow relation.
///
/// Formula: pwf = Pr - q / PI
///
/// This is the only place the production rate enters the pressure side.
/// Not clamped: an excessive rate yields a negative pwf.
pub fn bottom_hole_pressure(reservoir_pressure: f64, rate: f64, productivity_index: f64) -> f64 {
    reservoir_pressure - rate / productivity_index
}

/// Friction gradient in the tubing (psi/ft), constant along the wellbore.
///
/// Formula: 2.5e-6 × q^1.8 / ID^4.8
///
/// Returns 0 for a non-positive tubing ID.
pub fn friction_gradient(rate: f64, tubing_id: f64) -> f64 {
    if tubing_id <= 0.0 {
        return 0.0;
    }
    FRICTION_CONSTANT * rate.powf(FRICTION_RATE_EXPONENT) / tubing_id.powf(FRICTION_ID_EXPONENT)
}

/// Mixture velocity in the tubing (ft/s).
///
/// Converts STB/day to ft³/s and divides by the flow area `π × (ID/24)²`.
/// Returns 0 for a non-positive tubing ID.
pub fn tubing_velocity(rate: f64, tubing_id: f64) -> f64 {
    if tubing_id <= 0.0 {
        return 0.0;
    }
    let q_ft3_s = rate * STB_TO_FT3 / SECONDS_PER_DAY;
    let area_ft2 = std::f64::consts::PI * (tubing_id / INCH_DIAMETER_TO_FT_RADIUS).powi(2);
    if area_ft2 > 0.0 {
        q_ft3_s / area_ft2
    } else {
        0.0
    }
}

/// Compute the pressure traverse with the default 100-point grid.
pub fn calculate_traverse(params: &SimulatorParams) -> TraverseResult {
    calculate_traverse_with(params, &TraverseOptions::default())
}

/// Compute the pressure traverse.
///
/// Steps:
/// 1. Depth grid from `depth` to surface
/// 2. pwf from the linear PI relation
/// 3. Constant friction gradient and velocity from rate and tubing ID
/// 4. March upward: `p[i] = p[i-1] - (grad(p[i-1]) + friction) × Δz`
/// 5. WHP is the shallowest pressure; status and fluid SG follow from it
///
/// Never fails. Negative pressures propagate and surface as a DEAD status.
pub fn calculate_traverse_with(params: &SimulatorParams, options: &TraverseOptions) -> TraverseResult {
    let p_res = params.reservoir_pressure;
    let water_cut = params.water_cut;
    let rate = params.production_rate;
    let tubing_id = params.tubing_id;

    let oil_sg = api_to_specific_gravity(params.oil_api);
    let depth_array = depth_grid(params.depth(), options.points);

    let pwf = bottom_hole_pressure(p_res, rate, params.productivity_index());
    let friction = friction_gradient(rate, tubing_id);
    let velocity = tubing_velocity(rate, tubing_id);

    let mut pressure_array = Vec::with_capacity(depth_array.len());
    pressure_array.push(pwf);

    let mut prev = pwf;
    for segment in depth_array.windows(2) {
        let segment_length = segment[0] - segment[1];
        let hydrostatic = dynamic_gradient(prev, p_res, water_cut, oil_sg).gradient;
        let next = prev - (hydrostatic + friction) * segment_length;
        trace!(depth = segment[1], pressure = next, "traverse step");
        pressure_array.push(next);
        prev = next;
    }

    let whp = prev;
    let assessment = classify(whp, velocity, options.locale);
    let fluid_sg = dynamic_gradient(whp, p_res, water_cut, oil_sg).fluid_sg;

    debug!(
        pwf,
        whp,
        velocity,
        friction_psi_ft = friction,
        status = %assessment.status,
        "pressure traverse computed"
    );

    TraverseResult {
        depth_array,
        pressure_array,
        pwf,
        whp,
        velocity,
        status: assessment.status,
        status_message: assessment.message.to_string(),
        fluid_sg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WellStatus;

    #[test]
    fn test_depth_grid_shape() {
        let grid = depth_grid(8000.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 8000.0);
        assert_eq!(grid[99], 0.0);
        let step = 8000.0 / 99.0;
        for w in grid.windows(2) {
            assert!(w[0] > w[1], "grid must be strictly decreasing");
            assert!((w[0] - w[1] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_depth_grid_minimum_two_points() {
        assert_eq!(depth_grid(5000.0, 0), vec![5000.0, 0.0]);
        assert_eq!(depth_grid(5000.0, 1), vec![5000.0, 0.0]);
    }

    #[test]
    fn test_friction_gradient() {
        // 800 STB/d in 2.875" tubing: 2.5e-6 × 800^1.8 / 2.875^4.8
        let f = friction_gradient(800.0, 2.875);
        let expected = 2.5e-6 * 800.0_f64.powf(1.8) / 2.875_f64.powf(4.8);
        assert!((f - expected).abs() < 1e-15);
        assert!(f > 0.0);
        assert_eq!(friction_gradient(800.0, 0.0), 0.0);
        assert_eq!(friction_gradient(800.0, -1.0), 0.0);
    }

    #[test]
    fn test_tubing_velocity() {
        // 800 STB/d = 0.05199 ft³/s; area of 2.875" = 0.04508 ft²
        let v = tubing_velocity(800.0, 2.875);
        assert!((v - 1.1533).abs() < 1e-3, "velocity should be ~1.153 ft/s, got {v}");
        assert_eq!(tubing_velocity(800.0, 0.0), 0.0);
        assert_eq!(tubing_velocity(800.0, -2.0), 0.0);
    }

    #[test]
    fn test_traverse_starts_at_pwf() {
        let params = SimulatorParams::default();
        let r = calculate_traverse(&params);
        assert_eq!(r.pwf, 3340.0);
        assert_eq!(r.pressure_array[0], r.pwf);
        assert_eq!(r.whp, *r.pressure_array.last().unwrap());
        assert_eq!(r.pressure_array.len(), r.depth_array.len());
    }

    #[test]
    fn test_pressure_falls_toward_surface() {
        let r = calculate_traverse(&SimulatorParams::default());
        for w in r.pressure_array.windows(2) {
            assert!(w[1] < w[0], "pressure must decrease going up the tubing");
        }
    }

    #[test]
    fn test_custom_point_count() {
        let opts = TraverseOptions { points: 400, locale: Locale::En };
        let fine = calculate_traverse_with(&SimulatorParams::default(), &opts);
        let coarse = calculate_traverse(&SimulatorParams::default());
        assert_eq!(fine.depth_array.len(), 400);
        assert_eq!(fine.pwf, coarse.pwf);
        // Both discretizations describe the same profile to within a few percent
        let relative = (fine.whp - coarse.whp).abs() / coarse.whp.abs();
        assert!(relative < 0.05, "400 vs 100 points differ by {:.1}%", relative * 100.0);
    }

    #[test]
    fn test_zero_tubing_id_is_frictionless() {
        let params = SimulatorParams {
            tubing_id: 0.0,
            ..SimulatorParams::default()
        };
        let r = calculate_traverse(&params);
        assert_eq!(r.velocity, 0.0);
        assert!(r.whp.is_finite());
    }

    #[test]
    fn test_negative_pwf_drives_dead_status() {
        let params = SimulatorParams {
            production_rate: 20_000.0,
            ..SimulatorParams::default()
        };
        let r = calculate_traverse(&params);
        assert!(r.pwf < 0.0);
        assert!(r.whp < r.pwf);
        assert_eq!(r.status, WellStatus::Dead);
    }

    #[test]
    fn test_arabic_status_message() {
        let opts = TraverseOptions { points: 100, locale: Locale::Ar };
        let r = calculate_traverse_with(&SimulatorParams::default(), &opts);
        assert_eq!(r.status_message, r.status.message(Locale::Ar));
    }
}
