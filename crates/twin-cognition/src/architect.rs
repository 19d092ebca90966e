//! Generative architect: prompt, invoke, extract, fall back.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use twin_types::{ArchitectureResult, DesignStatus, DeviceRequirement};

use crate::extract::extract_json_region;
use crate::prompt::build_prompt;
use crate::transport::{SamplingOptions, TextGeneration, UnavailableTransport};

/// Fixed error string reported when the backend cannot be invoked.
pub const UNAVAILABLE_ERROR: &str = "LLM failed to load";

/// Fixed note attached to the fallback design.
pub const FALLBACK_NOTE: &str = "Fallback design used (JSON parse failed)";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Outcome of a generative design call.
///
/// The two failure modes keep their distinct wire shapes on purpose:
/// an unreachable backend serializes as `{"error", "reason"}`, while
/// unparseable output serializes as the fallback design with a note.
/// Unifying them would change the external response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignOutcome {
    /// A design, either parsed from model output or the fixed
    /// fallback.
    Design(ArchitectureResult),
    /// The generation backend could not be invoked at all.
    Unavailable { error: String, reason: String },
}

impl DesignOutcome {
    fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            error: UNAVAILABLE_ERROR.to_string(),
            reason: reason.into(),
        }
    }
}

/// Shape the backend is instructed to produce. Both keys are
/// required; an object missing either takes the fallback path.
#[derive(Debug, Deserialize)]
struct GeneratedDesign {
    components: BTreeMap<String, String>,
    interfaces: Vec<String>,
}

/// Architect that delegates reasoning to a text-generation backend.
///
/// Constructed once at process start and shared by reference; holds
/// no per-request state.
#[derive(Clone)]
pub struct GenerativeArchitect {
    transport: Arc<dyn TextGeneration>,
    options: SamplingOptions,
    timeout: Duration,
}

impl std::fmt::Debug for GenerativeArchitect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeArchitect")
            .field("options", &self.options)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GenerativeArchitect {
    pub fn new(transport: Arc<dyn TextGeneration>) -> Self {
        Self {
            transport,
            options: SamplingOptions::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Architect whose every call reports the backend as unavailable.
    /// Used when transport construction fails at startup, so the
    /// process keeps serving instead of crashing.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(Arc::new(UnavailableTransport::new(reason)))
    }

    /// Override the per-call generation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the sampling options.
    pub fn with_options(mut self, options: SamplingOptions) -> Self {
        self.options = options;
        self
    }

    /// Produce a design for the requirement.
    ///
    /// Fail-soft: this never returns an error. Backend failures and
    /// timeouts become `DesignOutcome::Unavailable`; unparseable
    /// output becomes the fixed fallback design.
    pub async fn design(&self, requirement: &DeviceRequirement) -> DesignOutcome {
        let prompt = build_prompt(requirement);

        let generated =
            match tokio::time::timeout(self.timeout, self.transport.generate(&prompt, &self.options))
                .await
            {
                Ok(Ok(text)) => text,
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "generation backend failed");
                    return DesignOutcome::unavailable(err.to_string());
                }
                Err(_) => {
                    tracing::warn!(timeout = ?self.timeout, "generation timed out");
                    return DesignOutcome::unavailable(format!(
                        "generation timed out after {:?}",
                        self.timeout
                    ));
                }
            };

        DesignOutcome::Design(parse_design(&generated))
    }
}

/// Parse raw model output into a design, substituting the fixed
/// fallback when no parseable JSON region exists.
fn parse_design(generated: &str) -> ArchitectureResult {
    let parsed = extract_json_region(generated)
        .and_then(|region| serde_json::from_str::<GeneratedDesign>(region).ok());

    match parsed {
        Some(design) => ArchitectureResult {
            components: design.components,
            interfaces: design.interfaces,
            status: DesignStatus::Generated,
            note: None,
        },
        None => {
            tracing::warn!("model output had no parseable design, using fallback");
            fallback_design()
        }
    }
}

/// The fixed generic design substituted on extraction failure.
pub fn fallback_design() -> ArchitectureResult {
    ArchitectureResult {
        components: BTreeMap::from([
            ("MCU".to_string(), "Generic MCU".to_string()),
            ("Sensor".to_string(), "Generic Sensor".to_string()),
            ("Actuator".to_string(), "Generic Actuator".to_string()),
        ]),
        interfaces: vec!["I2C".to_string(), "GPIO".to_string()],
        status: DesignStatus::Fallback,
        note: Some(FALLBACK_NOTE.to_string()),
    }
}
