//! Root status handler.

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Root status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub llm_available: bool,
    pub uptime: String,
}

/// Service liveness and model availability.
pub async fn root_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Digital Twin Platform Running".to_string(),
        version: state.version.clone(),
        llm_available: state.llm_available,
        uptime: state.uptime(),
    })
}
