//! REST API module using Axum
//!
//! JSON endpoints over the physics engine, all under `/api/v1` and all
//! wrapped in the envelope from [`envelope`].

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::http::{header, Method};
use axum::response::Response;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use envelope::ApiErrorResponse;

/// Environment variable holding a comma-separated list of allowed origins.
pub const CORS_ENV_VAR: &str = "WELL_TRAVERSE_CORS_ORIGINS";

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `WELL_TRAVERSE_CORS_ORIGINS` (e.g. `http://localhost:5173`) to allow
/// a separately served front end.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var(CORS_ENV_VAR) {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

async fn fallback() -> Response {
    ApiErrorResponse::not_found("No such endpoint")
}

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}
