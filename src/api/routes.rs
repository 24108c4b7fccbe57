//! API route definitions
//!
//! - /api/v1/health - Liveness and version
//! - /api/v1/config - Active configuration
//! - /api/v1/scenario - Default parameters and control ranges
//! - /api/v1/traverse, /ipr, /report - Calculations on a posted parameter record
//! - /api/v1/fluid-color - Display color for a water cut and specific gravity

use axum::{routing::{get, post}, Router};

use super::handlers::{self, ApiState};

/// Create all v1 API routes
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/config", get(handlers::get_config))
        .route("/scenario", get(handlers::get_scenario))
        .route("/traverse", post(handlers::post_traverse))
        .route("/ipr", post(handlers::post_ipr))
        .route("/report", post(handlers::post_report))
        .route("/fluid-color", get(handlers::get_fluid_color))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = api_routes(ApiState::default());
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fluid_color_missing_query_is_bad_request() {
        let app = api_routes(ApiState::default());
        let resp = app
            .oneshot(Request::builder().uri("/fluid-color").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
