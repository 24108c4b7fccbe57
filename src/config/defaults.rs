//! System-wide default constants.
//!
//! Centralises the literals used by the calculation engine. They are never
//! mutated at runtime; tunable knobs (grid sizes, locale, bounds) live in
//! [`SimConfig`](super::SimConfig) instead.

// ============================================================================
// Fluid Properties
// ============================================================================

/// Hydrostatic gradient of fresh water (psi/ft).
pub const WATER_GRADIENT_PSI_FT: f64 = 0.433;

/// Specific gravity of produced water.
pub const WATER_SG: f64 = 1.0;

/// Numerator of the API gravity conversion: `SG = 141.5 / (131.5 + API)`.
pub const API_SG_NUMERATOR: f64 = 141.5;

/// Offset of the API gravity conversion.
pub const API_SG_OFFSET: f64 = 131.5;

/// Lower clamp on `p / p_res` in the gas-expansion term.
pub const MIN_PRESSURE_RATIO: f64 = 0.01;

/// Upper clamp on `p / p_res` in the gas-expansion term.
pub const MAX_PRESSURE_RATIO: f64 = 1.0;

/// Gas-expansion factor: `1 / (BASE + WEIGHT × ratio^EXPONENT)`.
pub const GAS_EXPANSION_BASE: f64 = 0.2;
pub const GAS_EXPANSION_WEIGHT: f64 = 0.8;
pub const GAS_EXPANSION_EXPONENT: f64 = 0.6;

// ============================================================================
// Tubing Hydraulics
// ============================================================================

/// Empirical friction constant: `grad = K × q^1.8 / ID^4.8` (psi/ft).
pub const FRICTION_CONSTANT: f64 = 2.5e-6;

/// Rate exponent of the friction correlation.
pub const FRICTION_RATE_EXPONENT: f64 = 1.8;

/// Tubing ID exponent of the friction correlation.
pub const FRICTION_ID_EXPONENT: f64 = 4.8;

/// Cubic feet per stock-tank barrel.
pub const STB_TO_FT3: f64 = 5.615;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Tubing ID (inches) divided by this gives the radius in feet.
pub const INCH_DIAMETER_TO_FT_RADIUS: f64 = 24.0;

// ============================================================================
// Default Scenario
// ============================================================================

/// Static reservoir pressure of the built-in scenario (psi).
pub const DEFAULT_RESERVOIR_PRESSURE_PSI: f64 = 3_500.0;

/// Water cut of the built-in scenario.
pub const DEFAULT_WATER_CUT: f64 = 0.15;

/// Oil gravity of the built-in scenario (°API).
pub const DEFAULT_OIL_API: f64 = 32.0;

/// Tubing inner diameter of the built-in scenario (in).
pub const DEFAULT_TUBING_ID_IN: f64 = 2.875;

/// Production rate of the built-in scenario (STB/day).
pub const DEFAULT_PRODUCTION_RATE: f64 = 800.0;

// ============================================================================
// Traverse Grid
// ============================================================================

/// Number of depth points in the pressure traverse.
pub const TRAVERSE_POINTS: usize = 100;

/// Default well depth (ft) when the parameter record omits it.
pub const DEFAULT_DEPTH_FT: f64 = 8_000.0;

// ============================================================================
// Inflow Performance
// ============================================================================

/// Default productivity index (STB/day/psi).
pub const DEFAULT_PRODUCTIVITY_INDEX: f64 = 5.0;

/// Default bubble point as a fraction of reservoir pressure.
pub const DEFAULT_BUBBLE_POINT_FRACTION: f64 = 0.7;

/// Number of pwf intervals in each IPR curve (curves carry `points + 1` entries).
pub const IPR_POINTS: usize = 50;

/// Default Fetkovich deliverability exponent.
pub const FETKOVICH_N: f64 = 0.8;

/// Vogel two-phase divisor: `q_v = PI × pb / 1.8`.
pub const VOGEL_DIVISOR: f64 = 1.8;

/// Vogel linear coefficient.
pub const VOGEL_LINEAR: f64 = 0.2;

/// Vogel quadratic coefficient.
pub const VOGEL_QUADRATIC: f64 = 0.8;

// ============================================================================
// Status Classification
// ============================================================================

/// Wellhead pressure at or below which the well cannot flow naturally (psi).
pub const DEAD_WHP_PSI: f64 = 0.0;

/// Velocity above which tubing erosion becomes a risk (ft/s).
pub const EROSION_VELOCITY_FT_S: f64 = 15.0;

// ============================================================================
// Display
// ============================================================================

/// Scale applied to `1 - SG` when tinting the fluid toward the gas color.
pub const GAS_TINT_SCALE: f64 = 1.5;

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
