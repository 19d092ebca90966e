//! Text-generation transport seam.
//!
//! The architect only depends on the `TextGeneration` trait. The real
//! backend is an Ollama-compatible HTTP endpoint; scripted and
//! always-failing transports exist for tests and for degraded
//! startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling parameters forwarded to the generation backend.
///
/// The non-zero default temperature makes raw output non-deterministic
/// by design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Cap on generated length, in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus-sampling threshold.
    pub top_p: f64,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Failure signaled by a generation backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Backend is not loaded or cannot be reached.
    #[error("model backend unavailable: {0}")]
    Unavailable(String),

    /// Request reached the backend but failed in flight.
    #[error("model transport failure: {0}")]
    Transport(String),

    /// Backend returned a payload we could not decode.
    #[error("model response decode failure: {0}")]
    Decode(String),
}

/// Contract required from any text-generation capability: bounded
/// prompt in, generated text or a signaled failure out.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: &SamplingOptions,
    ) -> Result<String, GenerationError>;
}

/// HTTP transport for an Ollama-compatible `/api/generate` endpoint.
///
/// The reqwest client pools connections internally and is safe to
/// share across concurrent requests, so no serialization discipline
/// is needed at this layer.
#[derive(Debug, Clone)]
pub struct OllamaTransport {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    num_predict: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaTransport {
    /// Create a transport for `endpoint` (e.g. `http://127.0.0.1:11434`)
    /// and a model name.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| GenerationError::Unavailable(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGeneration for OllamaTransport {
    async fn generate(
        &self,
        prompt: &str,
        options: &SamplingOptions,
    ) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: options.max_tokens,
                temperature: options.temperature,
                top_p: options.top_p,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerationError::Unavailable(err.to_string()))?
            .error_for_status()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Decode(err.to_string()))?;

        Ok(body.response)
    }
}

/// Transport returning canned text. Test double for exercising the
/// extraction and fallback paths deterministically.
#[derive(Debug, Clone)]
pub struct ScriptedTransport {
    output: String,
}

impl ScriptedTransport {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

#[async_trait]
impl TextGeneration for ScriptedTransport {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &SamplingOptions,
    ) -> Result<String, GenerationError> {
        Ok(self.output.clone())
    }
}

/// Transport that always fails. Stands in for a backend that could
/// not be constructed at startup.
#[derive(Debug, Clone)]
pub struct UnavailableTransport {
    reason: String,
}

impl UnavailableTransport {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGeneration for UnavailableTransport {
    async fn generate(
        &self,
        _prompt: &str,
        _options: &SamplingOptions,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable(self.reason.clone()))
    }
}
