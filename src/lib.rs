//! Well Traverse: producing-well pressure traverse and inflow performance
//!
//! ## Architecture
//!
//! - **Physics Engine**: Fluid gradient, pressure traverse, Vogel/Fetkovich IPR,
//!   status classification and display helpers
//! - **Config**: TOML-backed default scenario, slider ranges and grid sizes
//! - **API**: JSON HTTP surface over the engine

pub mod api;
pub mod config;
pub mod physics_engine;
pub mod types;

// Re-export configuration
pub use config::SimConfig;

// Re-export engine entry points
pub use physics_engine::{
    api_to_specific_gravity, calculate_ipr, calculate_ipr_with, calculate_traverse,
    calculate_traverse_with, fluid_color, get_fluid_color, well_report, IprOptions,
    TraverseOptions,
};

// Re-export commonly used types
pub use types::{
    IprData, IprPoint, Locale, ParamBounds, SimulatorParams, TraverseResult, WellReport,
    WellStatus,
};
