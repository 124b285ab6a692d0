//! Error types for the VSPC client.
//!
//! Configuration, transport and authentication failures are unified into a
//! single `VspcError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using VspcError.
pub type VspcResult<T> = Result<T, VspcError>;

/// Unified error type for the VSPC client crates.
#[derive(Error, Debug)]
pub enum VspcError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// A caller supplied an argument outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Transport errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The server rejected the request credentials (401/403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The server rejected the request (4xx other than 401/403).
    #[error("client error (status {status}): {message}")]
    ClientError {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the server.
        message: String,
    },

    /// The server failed to handle the request (5xx).
    #[error("server error (status {status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the server.
        message: String,
    },

    // -- Domain errors --
    /// Authentication against the VSPC portal failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VspcError {
    /// Whether the error was caused by rejected credentials, at either the
    /// transport or the domain level.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, VspcError::Unauthorized(_) | VspcError::AuthFailed(_))
    }

    /// HTTP status code carried by the error, when known.
    pub fn status(&self) -> Option<u16> {
        match self {
            VspcError::ClientError { status, .. } | VspcError::ServerError { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for VspcError {
    fn from(e: serde_json::Error) -> Self {
        VspcError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for VspcError {
    fn from(e: toml::de::Error) -> Self {
        VspcError::Config(e.to_string())
    }
}
