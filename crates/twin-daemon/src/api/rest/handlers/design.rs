//! Architecture design handlers.
//!
//! Both endpoints always answer 200 for well-formed bodies. The
//! rule-based path is total; the LLM path absorbs every backend
//! failure into a well-formed outcome object (fail-soft boundary).

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use twin_cognition::DesignOutcome;
use twin_types::{ArchitectureResult, DeviceRequirement};

/// Response of `POST /generate-design`.
#[derive(Debug, Serialize)]
pub struct GenerateDesignResponse {
    pub device: String,
    #[serde(rename = "class")]
    pub device_class: String,
    pub generated_architecture: ArchitectureResult,
}

/// Rule-based design generation.
pub async fn generate_design(
    Json(requirement): Json<DeviceRequirement>,
) -> Json<GenerateDesignResponse> {
    let architecture = twin_architect::generate_architecture(&requirement);

    Json(GenerateDesignResponse {
        device: requirement.device_type,
        device_class: requirement.device_class,
        generated_architecture: architecture,
    })
}

/// LLM-backed design generation.
///
/// The body is either an `ArchitectureResult` (generated or fallback)
/// or the `{error, reason}` object when the backend cannot be
/// invoked; never an HTTP error.
pub async fn llm_design(
    State(state): State<AppState>,
    Json(requirement): Json<DeviceRequirement>,
) -> Json<DesignOutcome> {
    let outcome = state.architect.design(&requirement).await;
    Json(outcome)
}
