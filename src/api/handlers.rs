//! API route handlers
//!
//! Every handler recomputes from the request body and the read-only config.
//! All responses go through [`ApiResponse::ok`] or [`ApiErrorResponse`].

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::SimConfig;
use crate::physics_engine::{self, fluid_color, Rgb, TraverseOptions};
use crate::types::{Locale, ParamBounds, SimulatorParams};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<SimConfig>,
}

impl ApiState {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Snapshot of the process-wide config from [`crate::config::get`].
    pub fn from_global() -> Self {
        Self::new(crate::config::get().clone())
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub well: String,
}

/// Default scenario together with the control ranges it is edited within.
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub params: SimulatorParams,
    pub bounds: ParamBounds,
}

#[derive(Debug, Serialize)]
pub struct FluidColorResponse {
    pub rgb: Rgb,
    pub css: String,
}

// ============================================================================
// Request types
// ============================================================================

/// Optional `?locale=en|ar` on the calculation routes.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<Locale>,
}

#[derive(Debug, Deserialize)]
pub struct FluidColorQuery {
    pub water_cut: f64,
    pub fluid_sg: f64,
}

/// Unwrap a JSON body, reject non-finite values and log out-of-range ones.
fn accept_params(
    body: Result<Json<SimulatorParams>, JsonRejection>,
    bounds: &ParamBounds,
) -> Result<SimulatorParams, Response> {
    let Json(params) = body.map_err(|e| ApiErrorResponse::bad_request(e.body_text()))?;
    params
        .ensure_finite()
        .map_err(|e| ApiErrorResponse::bad_request(e.to_string()))?;
    for w in params.check(bounds) {
        warn!(field = w.field, "{}", w);
    }
    Ok(params)
}

fn traverse_options(
    state: &ApiState,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> Result<TraverseOptions, Response> {
    let Query(query) = query.map_err(|e| ApiErrorResponse::bad_request(e.body_text()))?;
    let mut options = state.config.traverse_options();
    if let Some(locale) = query.locale {
        options.locale = locale;
    }
    Ok(options)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/health
pub async fn get_health(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        well: state.config.well.name.clone(),
    })
}

/// GET /api/v1/config - Return the active configuration
pub async fn get_config(State(state): State<ApiState>) -> Response {
    match serde_json::to_value(&*state.config) {
        Ok(v) => ApiResponse::ok(v),
        Err(e) => ApiErrorResponse::internal(format!("Failed to serialize config: {e}")),
    }
}

/// GET /api/v1/scenario - Default parameter record and control ranges
pub async fn get_scenario(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(ScenarioResponse {
        params: state.config.scenario,
        bounds: state.config.bounds.clone(),
    })
}

/// POST /api/v1/traverse - Pressure profile for the posted parameters
pub async fn post_traverse(
    State(state): State<ApiState>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
    body: Result<Json<SimulatorParams>, JsonRejection>,
) -> Response {
    let options = match traverse_options(&state, query) {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let params = match accept_params(body, &state.config.bounds) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let result = physics_engine::calculate_traverse_with(&params, &options);
    debug!(whp = result.whp, status = %result.status, "traverse served");
    ApiResponse::ok(result)
}

/// POST /api/v1/ipr - Vogel and Fetkovich curves for the posted parameters
pub async fn post_ipr(
    State(state): State<ApiState>,
    body: Result<Json<SimulatorParams>, JsonRejection>,
) -> Response {
    let params = match accept_params(body, &state.config.bounds) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    ApiResponse::ok(physics_engine::calculate_ipr_with(&params, &state.config.ipr_options()))
}

/// POST /api/v1/report - Combined operator summary
pub async fn post_report(
    State(state): State<ApiState>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
    body: Result<Json<SimulatorParams>, JsonRejection>,
) -> Response {
    let options = match traverse_options(&state, query) {
        Ok(o) => o,
        Err(resp) => return resp,
    };
    let params = match accept_params(body, &state.config.bounds) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    ApiResponse::ok(physics_engine::well_report(
        &params,
        &options,
        &state.config.ipr_options(),
    ))
}

/// GET /api/v1/fluid-color?water_cut=&fluid_sg=
pub async fn get_fluid_color(query: Result<Query<FluidColorQuery>, QueryRejection>) -> Response {
    let Ok(Query(q)) = query else {
        return ApiErrorResponse::bad_request("water_cut and fluid_sg query parameters are required");
    };
    if !q.water_cut.is_finite() || !q.fluid_sg.is_finite() {
        return ApiErrorResponse::bad_request("water_cut and fluid_sg must be finite");
    }
    let rgb = fluid_color(q.water_cut, q.fluid_sg);
    ApiResponse::ok(FluidColorResponse {
        css: rgb.to_string(),
        rgb,
    })
}
