//! Inflow performance relationships (IPR)
//!
//! Key calculations:
//! - Composite Vogel curve (linear above bubble point, Vogel below)
//! - Fetkovich back-pressure curve matched to the productivity index
//! - Operating point from the linear PI relation
//!
//! The operating point uses the same linear relation as the traverse, not
//! either curve. The two pwf models are independent and are not reconciled.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::defaults::{FETKOVICH_N, IPR_POINTS, VOGEL_DIVISOR, VOGEL_LINEAR, VOGEL_QUADRATIC};
use crate::types::{IprCurve, IprData, IprPoint, SimulatorParams};

/// Tunables for [`calculate_ipr_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IprOptions {
    /// Number of pwf intervals; each curve carries `points + 1` entries
    pub points: usize,
    /// Fetkovich deliverability exponent
    pub fetkovich_n: f64,
}

impl Default for IprOptions {
    fn default() -> Self {
        Self {
            points: IPR_POINTS,
            fetkovich_n: FETKOVICH_N,
        }
    }
}

/// Evenly spaced pwf values from 0 to `reservoir_pressure`, inclusive.
fn pwf_grid(reservoir_pressure: f64, points: usize) -> impl Iterator<Item = f64> {
    let n = points.max(1);
    (0..=n).map(move |i| i as f64 * reservoir_pressure / n as f64)
}

/// Composite Vogel IPR.
///
/// - pb = min(bubble_point, Pr)
/// - qb = PI × (Pr - pb)
/// - qmax = qb + PI × pb / 1.8
/// - pwf >= pb: q = PI × (Pr - pwf)
/// - pwf < pb: q = qb + (PI × pb / 1.8) × [1 - 0.2 (pwf/pb) - 0.8 (pwf/pb)²]
///
/// Rates are floored at 0. The returned AOF is `qmax`.
pub fn calculate_vogel_ipr(
    reservoir_pressure: f64,
    productivity_index: f64,
    bubble_point: f64,
    points: usize,
) -> IprCurve {
    let pr = reservoir_pressure;
    let pi = productivity_index;
    let pb = bubble_point.min(pr);
    let qb = pi * (pr - pb);
    let vogel_max = pi * pb / VOGEL_DIVISOR;
    let qmax = qb + vogel_max;

    let points = pwf_grid(pr, points)
        .map(|pwf| {
            let rate = if pwf >= pb {
                pi * (pr - pwf)
            } else {
                let x = pwf / pb;
                qb + vogel_max * (1.0 - VOGEL_LINEAR * x - VOGEL_QUADRATIC * x * x)
            };
            IprPoint { pwf, rate: rate.max(0.0) }
        })
        .collect();

    IprCurve { points, aof: qmax }
}

/// Fetkovich coefficient matching the small-drawdown slope of
/// `q = C (Pr² - pwf²)^n` to the productivity index.
///
/// Formula: C = PI / (2 × Pr × Pr^(n-1))
pub fn fetkovich_coefficient(reservoir_pressure: f64, productivity_index: f64, n: f64) -> f64 {
    productivity_index / (2.0 * reservoir_pressure * reservoir_pressure.powf(n - 1.0))
}

/// Fetkovich back-pressure IPR.
///
/// q = C × max(0, Pr² - pwf²)^n, floored at 0. AOF = C × (Pr²)^n.
///
/// The bubble point plays no part here.
pub fn calculate_fetkovich_ipr(
    reservoir_pressure: f64,
    productivity_index: f64,
    n: f64,
    points: usize,
) -> IprCurve {
    let pr = reservoir_pressure;
    let c = fetkovich_coefficient(pr, productivity_index, n);
    let pr_sq = pr * pr;
    let aof = c * pr_sq.powf(n);

    let points = pwf_grid(pr, points)
        .map(|pwf| {
            let rate = c * (pr_sq - pwf * pwf).max(0.0).powf(n);
            IprPoint { pwf, rate: rate.max(0.0) }
        })
        .collect();

    IprCurve { points, aof }
}

/// Operating point implied by the chosen rate under the linear PI relation.
///
/// pwf = max(0, Pr - q / PI); the rate is passed through unchanged.
pub fn operating_point(reservoir_pressure: f64, rate: f64, productivity_index: f64) -> IprPoint {
    IprPoint {
        pwf: (reservoir_pressure - rate / productivity_index).max(0.0),
        rate,
    }
}

/// Compute both IPR curves with default grid and exponent.
pub fn calculate_ipr(params: &SimulatorParams) -> IprData {
    calculate_ipr_with(params, &IprOptions::default())
}

/// Compute both IPR curves and the operating point.
pub fn calculate_ipr_with(params: &SimulatorParams, options: &IprOptions) -> IprData {
    let pr = params.reservoir_pressure;
    let pi = params.productivity_index();

    let vogel = calculate_vogel_ipr(pr, pi, params.bubble_point(), options.points);
    let fetkovich = calculate_fetkovich_ipr(pr, pi, options.fetkovich_n, options.points);
    let op = operating_point(pr, params.production_rate, pi);

    debug!(
        aof_vogel = vogel.aof,
        aof_fetkovich = fetkovich.aof,
        operating_pwf = op.pwf,
        "IPR curves computed"
    );

    IprData {
        qmax: vogel.aof.max(fetkovich.aof),
        aof_vogel: vogel.aof,
        aof_fetkovich: fetkovich.aof,
        vogel_curve: vogel.points,
        fetkovich_curve: fetkovich.points,
        operating_point: op,
        reservoir_pressure: pr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_vogel_composite_aof() {
        // Pr 3500, PI 5, pb 2450: qb = 5250, qmax = 5250 + 5×2450/1.8 = 12055.56
        let curve = calculate_vogel_ipr(3500.0, 5.0, 2450.0, 50);
        assert!((curve.aof - 12_055.555_555).abs() < 1e-3, "AOF was {}", curve.aof);
        assert_eq!(curve.points.len(), 51);
    }

    #[test]
    fn test_vogel_boundaries() {
        let curve = calculate_vogel_ipr(3500.0, 5.0, 2450.0, 50);
        let first = curve.points[0];
        let last = curve.points[50];
        assert_eq!(first.pwf, 0.0);
        assert!((first.rate - curve.aof).abs() < TOL);
        assert_eq!(last.pwf, 3500.0);
        assert_eq!(last.rate, 0.0);
    }

    #[test]
    fn test_vogel_linear_at_bubble_point() {
        // pwf = 2450 lies on grid index 35 and uses the linear branch
        let curve = calculate_vogel_ipr(3500.0, 5.0, 2450.0, 50);
        let p = curve.points[35];
        assert!((p.pwf - 2450.0).abs() < TOL);
        assert!((p.rate - 5250.0).abs() < TOL);
    }

    #[test]
    fn test_vogel_rate_decreases_with_pwf() {
        let curve = calculate_vogel_ipr(3500.0, 5.0, 2450.0, 50);
        for w in curve.points.windows(2) {
            assert!(w[1].pwf > w[0].pwf);
            assert!(w[1].rate <= w[0].rate);
        }
    }

    #[test]
    fn test_vogel_clamps_bubble_point_to_reservoir() {
        // pb above Pr behaves like a fully saturated reservoir: qmax = PI × Pr / 1.8
        let curve = calculate_vogel_ipr(3000.0, 4.0, 5000.0, 50);
        assert!((curve.aof - 4.0 * 3000.0 / 1.8).abs() < TOL);
    }

    #[test]
    fn test_vogel_zero_bubble_point_is_linear() {
        let curve = calculate_vogel_ipr(3000.0, 4.0, 0.0, 10);
        assert!((curve.aof - 12_000.0).abs() < TOL);
        assert!((curve.points[5].rate - 6_000.0).abs() < TOL);
    }

    #[test]
    fn test_fetkovich_boundaries() {
        let curve = calculate_fetkovich_ipr(3500.0, 5.0, 0.8, 50);
        assert_eq!(curve.points.len(), 51);
        assert!((curve.points[0].rate - curve.aof).abs() < 1e-6);
        assert_eq!(curve.points[50].rate, 0.0);
    }

    #[test]
    fn test_fetkovich_matches_pi_at_small_drawdown() {
        // dq/dpwf at pwf → Pr equals PI when n = 1
        let pr = 3000.0;
        let pi = 2.5;
        let c = fetkovich_coefficient(pr, pi, 1.0);
        let dp = 1.0;
        let q = c * (pr * pr - (pr - dp) * (pr - dp));
        assert!((q / dp - pi).abs() < 1e-3, "slope {} should be ~PI", q / dp);
    }

    #[test]
    fn test_fetkovich_aof_value() {
        // C = 5 / (2 × 3500 × 3500^-0.2); AOF = C × 3500^1.6
        let curve = calculate_fetkovich_ipr(3500.0, 5.0, 0.8, 50);
        assert!((curve.aof - 1_710.781).abs() < 1e-2, "AOF was {}", curve.aof);
    }

    #[test]
    fn test_operating_point_floors_pwf() {
        let op = operating_point(3500.0, 800.0, 5.0);
        assert_eq!(op.pwf, 3340.0);
        assert_eq!(op.rate, 800.0);

        let op = operating_point(3500.0, 20_000.0, 5.0);
        assert_eq!(op.pwf, 0.0);
        assert_eq!(op.rate, 20_000.0);
    }

    #[test]
    fn test_calculate_ipr_qmax() {
        let data = calculate_ipr(&SimulatorParams::default());
        assert_eq!(data.qmax, data.aof_vogel.max(data.aof_fetkovich));
        assert_eq!(data.reservoir_pressure, 3500.0);
        assert_eq!(data.vogel_curve.len(), data.fetkovich_curve.len());
    }
}
