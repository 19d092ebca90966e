//! Configuration for twin-daemon.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{DaemonError, DaemonResult};

/// Main daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation model configuration
    #[serde(default)]
    pub model: ModelConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a JSON file, or defaults when no path
    /// is given.
    pub fn load(path: Option<&str>) -> DaemonResult<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(Path::new(path))?;
                serde_json::from_str(&raw).map_err(|err| DaemonError::Config(err.to_string()))
            }
            None => Ok(Self::default()),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Text-generation backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the Ollama-compatible endpoint.
    pub endpoint: String,

    /// Model name to request.
    pub model: String,

    /// Per-call generation timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:11434".to_string(),
            model: "tinyllama".to_string(),
            timeout_secs: 60,
        }
    }
}
