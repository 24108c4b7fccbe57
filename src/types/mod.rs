//! Shared data structures for the well performance engine
//!
//! - `SimulatorParams`: input record (plus opt-in range checks)
//! - `TraverseResult`: pressure profile along the tubing
//! - `IprData`: Vogel / Fetkovich inflow curves and operating point
//! - `WellStatus`: operating condition with localized messages
//! - `WellReport`: the combined summary shown to operators

mod ipr;
mod params;
mod report;
mod status;
mod traverse;

pub use ipr::*;
pub use params::*;
pub use report::*;
pub use status::*;
pub use traverse::*;
