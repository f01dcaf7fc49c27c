//! REST API router

use crate::{
    middleware::{AuthLayer, RequestIdLayer},
    AppState,
};
use axum::{routing::get, Router};

/// Create REST API router
pub fn create_router(app_state: AppState) -> Router {
    // Both action routes sit behind authentication; /health stays open for
    // liveness probes.
    let protected = Router::new()
        .route(
            "/sidecar/action/:sidecar_id",
            get(super::handlers::actions::get_actions).put(super::handlers::actions::put_actions),
        )
        .route_layer(AuthLayer::new(app_state.auth.clone()));

    Router::new()
        .merge(protected)
        .route("/health", get(super::handlers::health::health_check))
        .layer(RequestIdLayer)
        .with_state(app_state)
}
