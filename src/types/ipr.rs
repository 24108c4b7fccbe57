//! Inflow performance output

use serde::{Deserialize, Serialize};

/// One point on an IPR curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IprPoint {
    /// Bottom-hole flowing pressure (psi)
    pub pwf: f64,
    /// Liquid rate (STB/day)
    pub rate: f64,
}

/// A generated curve together with its absolute open flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IprCurve {
    /// Points ordered by increasing pwf, from 0 to reservoir pressure
    pub points: Vec<IprPoint>,
    /// Rate at pwf = 0 (STB/day)
    pub aof: f64,
}

/// Both inflow models plus the operating point implied by the chosen rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IprData {
    pub vogel_curve: Vec<IprPoint>,
    pub fetkovich_curve: Vec<IprPoint>,
    pub operating_point: IprPoint,
    pub aof_vogel: f64,
    pub aof_fetkovich: f64,
    /// Larger of the two AOF values, for axis scaling
    pub qmax: f64,
    pub reservoir_pressure: f64,
}

/// Vogel and Fetkovich rates side by side at a common pwf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IprChartRow {
    pub pwf: f64,
    pub vogel_rate: f64,
    pub fetkovich_rate: f64,
}

impl IprData {
    /// Merge the two curves row by row for plotting.
    ///
    /// Both curves share the same pwf grid, so rows pair up index for index.
    pub fn chart_rows(&self) -> Vec<IprChartRow> {
        self.vogel_curve
            .iter()
            .zip(&self.fetkovich_curve)
            .map(|(v, f)| IprChartRow {
                pwf: v.pwf,
                vogel_rate: v.rate,
                fetkovich_rate: f.rate,
            })
            .collect()
    }
}
