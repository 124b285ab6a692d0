//! VSPC Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other VSPC crates:
//! - Client configuration (endpoint, access token, page size)
//! - Error types covering configuration, transport and authentication
//! - Structured logging with tracing
//! - Per-user directories for config and log files
//! - Common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ServerConfig};
pub use error::{VspcError, VspcResult};
pub use logging::init_logging;
