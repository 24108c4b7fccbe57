//! Fluid property models for the produced oil/water mixture
//!
//! - API gravity to specific gravity
//! - Pressure-dependent mixture gradient with an empirical gas-expansion term

use crate::config::defaults::{
    API_SG_NUMERATOR, API_SG_OFFSET, GAS_EXPANSION_BASE, GAS_EXPANSION_EXPONENT,
    GAS_EXPANSION_WEIGHT, MAX_PRESSURE_RATIO, MIN_PRESSURE_RATIO, WATER_GRADIENT_PSI_FT, WATER_SG,
};

/// Mixture gradient evaluated at one pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicGradient {
    /// Hydrostatic gradient (psi/ft)
    pub gradient: f64,
    /// Effective mixture specific gravity including gas expansion
    pub fluid_sg: f64,
}

/// Convert oil gravity to specific gravity.
///
/// Formula: SG = 141.5 / (131.5 + API)
///
/// Defined for API > -131.5. Callers keep API in the physical range
/// (10-50 typical); no validation happens here.
pub fn api_to_specific_gravity(api: f64) -> f64 {
    API_SG_NUMERATOR / (API_SG_OFFSET + api)
}

/// Liquid-only mixture SG, weighted by water cut.
pub fn mixture_specific_gravity(water_cut: f64, oil_sg: f64) -> f64 {
    oil_sg * (1.0 - water_cut) + WATER_SG * water_cut
}

/// Empirical multiplier for gas coming out of solution as pressure drops.
///
/// Formula: 1 / (0.2 + 0.8 × r^0.6), with r = p / p_res clamped to [0.01, 1.0]
///
/// Approaches 1.0 at reservoir pressure and 5.0 near zero pressure. The clamp
/// keeps the term finite when the traverse runs into negative pressures.
pub fn gas_expansion_factor(pressure: f64, reservoir_pressure: f64) -> f64 {
    let ratio = (pressure / reservoir_pressure).clamp(MIN_PRESSURE_RATIO, MAX_PRESSURE_RATIO);
    1.0 / (GAS_EXPANSION_BASE + GAS_EXPANSION_WEIGHT * ratio.powf(GAS_EXPANSION_EXPONENT))
}

/// Mixture gradient at `pressure`.
///
/// Called once per traverse step with the previous step's pressure, so the
/// gradient is re-evaluated at every depth increment.
pub fn dynamic_gradient(
    pressure: f64,
    reservoir_pressure: f64,
    water_cut: f64,
    oil_sg: f64,
) -> DynamicGradient {
    let mixture_sg = mixture_specific_gravity(water_cut, oil_sg);
    let fluid_sg = mixture_sg * gas_expansion_factor(pressure, reservoir_pressure);

    DynamicGradient {
        gradient: fluid_sg * WATER_GRADIENT_PSI_FT,
        fluid_sg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_to_specific_gravity() {
        // 10 °API is the water-equivalent point
        assert!((api_to_specific_gravity(10.0) - 1.0).abs() < 1e-12);
        // 32 °API: 141.5 / 163.5 = 0.8654
        let sg = api_to_specific_gravity(32.0);
        assert!((sg - 0.865_443).abs() < 1e-5, "SG at 32 API should be ~0.8654, got {sg}");
    }

    #[test]
    fn test_gas_expansion_limits() {
        let at_reservoir = gas_expansion_factor(3500.0, 3500.0);
        assert!((at_reservoir - 1.0).abs() < 1e-12);

        // Above reservoir pressure the ratio clamps to 1.0
        assert_eq!(gas_expansion_factor(5000.0, 3500.0), at_reservoir);

        // Negative pressure clamps to ratio 0.01
        let low = gas_expansion_factor(-200.0, 3500.0);
        let expected = 1.0 / (0.2 + 0.8 * 0.01_f64.powf(0.6));
        assert!((low - expected).abs() < 1e-12);
        assert!(low < 5.0 && low > 3.5, "factor near zero pressure should approach 5, got {low}");
    }

    #[test]
    fn test_gas_expansion_decreases_with_pressure() {
        let mut prev = f64::INFINITY;
        for p in [100.0, 500.0, 1000.0, 2000.0, 3000.0, 3500.0] {
            let f = gas_expansion_factor(p, 3500.0);
            assert!(f < prev, "factor must fall as pressure rises ({p} psi gave {f})");
            prev = f;
        }
    }

    #[test]
    fn test_dynamic_gradient_at_reservoir_pressure() {
        // Pure water at reservoir pressure is the fresh-water gradient
        let g = dynamic_gradient(3000.0, 3000.0, 1.0, 0.85);
        assert!((g.fluid_sg - 1.0).abs() < 1e-12);
        assert!((g.gradient - 0.433).abs() < 1e-12);
    }

    #[test]
    fn test_dynamic_gradient_deterministic() {
        let a = dynamic_gradient(1234.5, 3500.0, 0.15, 0.8654);
        let b = dynamic_gradient(1234.5, 3500.0, 0.15, 0.8654);
        assert_eq!(a, b);
        assert_eq!(a.gradient.to_bits(), b.gradient.to_bits());
    }

    #[test]
    fn test_zero_reservoir_pressure_stays_finite() {
        // 1000 / 0 is +inf, which the ratio clamp pins to 1.0
        let g = dynamic_gradient(1000.0, 0.0, 0.2, 0.85);
        assert!(g.gradient.is_finite());
    }
}
