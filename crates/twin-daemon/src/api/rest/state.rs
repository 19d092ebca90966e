//! Application state for API handlers.

use std::sync::Arc;
use twin_cognition::GenerativeArchitect;

/// Shared application state.
///
/// The generative architect is constructed once at startup and shared
/// by reference into every request; there is no other process-wide
/// state.
#[derive(Clone)]
pub struct AppState {
    /// LLM-backed architect (owned resource handle, never rebuilt
    /// per request).
    pub architect: Arc<GenerativeArchitect>,

    /// Whether the generation backend was constructed successfully
    /// at startup.
    pub llm_available: bool,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(architect: Arc<GenerativeArchitect>, llm_available: bool) -> Self {
        Self {
            architect,
            llm_available,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string.
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }
}
