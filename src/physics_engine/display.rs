//! Display-only derivations consumed by presentation layers

use serde::Serialize;

use crate::config::defaults::GAS_TINT_SCALE;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Dead-oil green
pub const OIL_COLOR: [f64; 3] = [26.0, 89.0, 26.0];
/// Brine blue
pub const WATER_COLOR: [f64; 3] = [51.0, 128.0, 242.0];
/// Free-gas red
pub const GAS_COLOR: [f64; 3] = [230.0, 77.0, 77.0];

/// Blend the oil and water colors by water cut, then tint toward the gas
/// color by `clamp((1 - SG) × 1.5, 0, 1)`.
///
/// Channels are rounded half away from zero and saturate to 0-255.
pub fn fluid_color(water_cut: f64, fluid_sg: f64) -> Rgb {
    let gas_fraction = ((1.0 - fluid_sg) * GAS_TINT_SCALE).clamp(0.0, 1.0);

    let channel = |i: usize| -> u8 {
        let liquid = OIL_COLOR[i] * (1.0 - water_cut) + WATER_COLOR[i] * water_cut;
        let value = (1.0 - gas_fraction) * liquid + gas_fraction * GAS_COLOR[i];
        // `as` saturates out-of-range floats and maps NaN to 0
        value.round() as u8
    };

    Rgb {
        r: channel(0),
        g: channel(1),
        b: channel(2),
    }
}

/// CSS `rgb(r, g, b)` string for [`fluid_color`].
pub fn get_fluid_color(water_cut: f64, fluid_sg: f64) -> String {
    fluid_color(water_cut, fluid_sg).to_string()
}

/// Reservoir drawdown `Pr - pwf` (psi).
pub fn drawdown(reservoir_pressure: f64, pwf: f64) -> f64 {
    reservoir_pressure - pwf
}

/// Production rate as a percentage of the Vogel AOF.
///
/// Returns `None` when the AOF is zero, negative or non-finite, so the
/// caller never renders NaN or infinity.
pub fn efficiency_percent(production_rate: f64, aof: f64) -> Option<f64> {
    if !aof.is_finite() || aof <= 0.0 {
        return None;
    }
    Some(production_rate / aof * 100.0)
}

/// Efficiency clamped to `[0, 100]` for a progress bar.
pub fn efficiency_bar_percent(production_rate: f64, aof: f64) -> f64 {
    efficiency_percent(production_rate, aof).map_or(0.0, |e| e.clamp(0.0, 100.0))
}

/// Fraction of `max` reached by `value`, clamped to `[0, 1]`.
///
/// Negative pressures from a dead well render as an empty gauge.
pub fn progress_fraction(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_oil_dense_fluid() {
        // SG >= 1 means no gas tint
        assert_eq!(fluid_color(0.0, 1.2), Rgb { r: 26, g: 89, b: 26 });
        assert_eq!(fluid_color(1.0, 1.0), Rgb { r: 51, g: 128, b: 242 });
    }

    #[test]
    fn test_full_gas_tint() {
        // SG 0.2 gives gas fraction 1.2, clamped to 1
        assert_eq!(fluid_color(0.5, 0.2), Rgb { r: 230, g: 77, b: 77 });
    }

    #[test]
    fn test_partial_blend() {
        // wc 0.5 → liquid (38.5, 108.5, 134); SG 0.8 → gas 0.3
        // r = 0.7×38.5 + 0.3×230 = 95.95 → 96
        let c = fluid_color(0.5, 0.8);
        assert_eq!(c, Rgb { r: 96, g: 99, b: 117 });
        assert_eq!(get_fluid_color(0.5, 0.8), "rgb(96, 99, 117)");
    }

    #[test]
    fn test_color_channels_in_range_over_domain() {
        for i in 0..=20 {
            for j in 0..=40 {
                let wc = f64::from(i) / 20.0;
                let sg = f64::from(j) / 20.0;
                let c = fluid_color(wc, sg);
                // u8 guarantees 0-255; check the blend stays between the anchor colors
                let lo = [26u8, 77, 26];
                let hi = [230u8, 128, 242];
                for (k, v) in [c.r, c.g, c.b].into_iter().enumerate() {
                    assert!(v >= lo[k] && v <= hi[k], "channel {k} = {v} at wc {wc}, sg {sg}");
                }
            }
        }
    }

    #[test]
    fn test_efficiency_guards_zero_aof() {
        assert_eq!(efficiency_percent(800.0, 0.0), None);
        assert_eq!(efficiency_percent(800.0, f64::NAN), None);
        let e = efficiency_percent(800.0, 1600.0).unwrap();
        assert!((e - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency_bar_clamps() {
        assert_eq!(efficiency_bar_percent(5000.0, 1000.0), 100.0);
        assert_eq!(efficiency_bar_percent(800.0, 0.0), 0.0);
    }

    #[test]
    fn test_progress_fraction_clamps_negative_pressure() {
        assert_eq!(progress_fraction(-3067.0, 3500.0), 0.0);
        assert_eq!(progress_fraction(1750.0, 3500.0), 0.5);
        assert_eq!(progress_fraction(9000.0, 3500.0), 1.0);
    }
}
