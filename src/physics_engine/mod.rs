//! Physics Engine Module
//!
//! Deterministic petroleum-engineering calculations for a producing well.
//! Every function here is pure: no I/O, no shared state, fixed-size loops.
//!
//! ## Entry Points
//! - `calculate_traverse()` - Pressure profile from bottom-hole to surface
//! - `calculate_ipr()` - Vogel and Fetkovich inflow curves plus operating point
//! - `api_to_specific_gravity()` / `get_fluid_color()` - Display helpers
//! - `well_report()` - Both calculations folded into one operator summary
//!
//! The traverse takes pwf from the linear PI relation while the IPR module
//! draws Vogel/Fetkovich curves. The two are deliberately left unreconciled.

pub mod display;
pub mod fluid_models;
pub mod ipr_models;
pub mod status;
pub mod traverse;

pub use display::{
    drawdown, efficiency_bar_percent, efficiency_percent, fluid_color, get_fluid_color,
    progress_fraction, Rgb,
};
pub use fluid_models::{api_to_specific_gravity, dynamic_gradient, DynamicGradient};
pub use ipr_models::{
    calculate_fetkovich_ipr, calculate_ipr, calculate_ipr_with, calculate_vogel_ipr,
    operating_point, IprOptions,
};
pub use status::{classify, StatusAssessment};
pub use traverse::{calculate_traverse, calculate_traverse_with, TraverseOptions};

use crate::types::{SimulatorParams, WellReport};

/// Run both engines on one parameter record and fold the scalars together.
pub fn well_report(
    params: &SimulatorParams,
    traverse_options: &TraverseOptions,
    ipr_options: &IprOptions,
) -> WellReport {
    let traverse = calculate_traverse_with(params, traverse_options);
    let ipr = calculate_ipr_with(params, ipr_options);

    WellReport {
        reservoir_pressure: params.reservoir_pressure,
        pwf: traverse.pwf,
        whp: traverse.whp,
        whp_gauge: progress_fraction(traverse.whp, params.reservoir_pressure),
        drawdown: drawdown(params.reservoir_pressure, traverse.pwf),
        velocity: traverse.velocity,
        production_rate: params.production_rate,
        aof_vogel: ipr.aof_vogel,
        aof_fetkovich: ipr.aof_fetkovich,
        efficiency_percent: efficiency_percent(params.production_rate, ipr.aof_vogel),
        status: traverse.status,
        status_label: traverse.status.label(traverse_options.locale),
        status_message: traverse.status_message,
        fluid_sg: traverse.fluid_sg,
        fluid_color: get_fluid_color(params.water_cut, traverse.fluid_sg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WellStatus;

    #[test]
    fn test_report_default_scenario() {
        let params = SimulatorParams::default();
        let report = well_report(&params, &TraverseOptions::default(), &IprOptions::default());

        assert_eq!(report.pwf, 3340.0);
        assert_eq!(report.drawdown, 160.0);
        // 800 / 12055.56 × 100
        let eff = report.efficiency_percent.unwrap();
        assert!((eff - 6.6359).abs() < 1e-3, "efficiency was {eff}");
        // The default scenario cannot lift to surface under this gradient model
        assert_eq!(report.status, WellStatus::Dead);
        assert_eq!(report.status_label, "Dead");
        assert_eq!(report.whp_gauge, 0.0);
        assert!(report.fluid_color.starts_with("rgb("));
    }

    #[test]
    fn test_report_zero_aof_has_no_efficiency() {
        let params = SimulatorParams {
            productivity_index: Some(0.0),
            ..SimulatorParams::default()
        };
        let report = well_report(&params, &TraverseOptions::default(), &IprOptions::default());
        assert_eq!(report.aof_vogel, 0.0);
        assert_eq!(report.efficiency_percent, None);
    }
}
