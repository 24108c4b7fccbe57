//! Combined operating summary

use serde::Serialize;

use super::WellStatus;

/// Every scalar an operator panel shows for one parameter record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellReport {
    pub reservoir_pressure: f64,
    pub pwf: f64,
    pub whp: f64,
    /// WHP as a fraction of reservoir pressure, clamped to `[0, 1]`
    pub whp_gauge: f64,
    /// Reservoir drawdown `Pr - pwf` (psi)
    pub drawdown: f64,
    pub velocity: f64,
    pub production_rate: f64,
    pub aof_vogel: f64,
    pub aof_fetkovich: f64,
    /// `rate / AOF(Vogel) × 100`, absent when the AOF is zero
    pub efficiency_percent: Option<f64>,
    pub status: WellStatus,
    pub status_label: &'static str,
    pub status_message: String,
    #[serde(rename = "fluidSG")]
    pub fluid_sg: f64,
    pub fluid_color: String,
}
