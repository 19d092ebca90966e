//! Generative architecture engine.
//!
//! Delegates design reasoning to an external text-generation backend
//! and tolerates its unreliability. The single most important
//! property of this crate is the fail-soft boundary: `design` always
//! returns a well-formed outcome value, never an error, regardless of
//! what the backend does.
//!
//! Generation runs with a non-zero sampling temperature, so two calls
//! with the same requirement may produce different raw text. Only the
//! post-extraction structural contract is stable; nothing here (or in
//! the tests) assumes raw-output determinism.

pub mod architect;
pub mod extract;
pub mod prompt;
pub mod transport;

pub use architect::{DesignOutcome, GenerativeArchitect, FALLBACK_NOTE, UNAVAILABLE_ERROR};
pub use extract::extract_json_region;
pub use prompt::build_prompt;
pub use transport::{
    GenerationError, OllamaTransport, SamplingOptions, ScriptedTransport, TextGeneration,
    UnavailableTransport,
};
