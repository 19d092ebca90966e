//! Twin daemon library.
//!
//! This module provides the components of the medtwin HTTP service:
//! - REST API handlers and router
//! - Configuration and CLI plumbing
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::DaemonConfig;
pub use error::{DaemonError, DaemonResult};
pub use server::Server;
