//! API Router configuration.

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_status))
        .route("/generate-design", post(handlers::generate_design))
        .route("/llm-design", post(handlers::llm_design))
        .route("/simulate", post(handlers::simulate_ventilator))
        .route("/simulate-cgm", post(handlers::simulate_cgm))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
