//! Client configuration management.
//!
//! Configuration is an immutable value handed to the API client at
//! construction time. It can be built in code, loaded from a TOML file, and
//! overridden from environment variables. Resetting to defaults is simply
//! `AppConfig::default()`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{VspcError, VspcResult};
use crate::platform;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server connection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// VSPC server URL (e.g., "https://vspc.example.com:1280").
    #[serde(default)]
    pub endpoint: String,

    /// Bearer token (API key) sent with every request.
    #[serde(default)]
    pub access_token: String,

    /// Number of items requested per page on paginated endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// User-Agent header value.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether to accept self-signed SSL certificates from the server.
    #[serde(default)]
    pub accept_self_signed_certs: bool,

    /// Extra HTTP headers as key-value pairs.
    #[serde(default)]
    pub custom_headers: HashMap<String, String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_page_size() -> u32 {
    constants::DEFAULT_PAGE_SIZE
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            access_token: String::new(),
            page_size: default_page_size(),
            user_agent: constants::default_user_agent(),
            api_timeout_ms: default_api_timeout(),
            accept_self_signed_certs: false,
            custom_headers: HashMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given endpoint and access token, with
    /// every other setting at its default.
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Set the page size used for paginated endpoints.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.api_timeout_ms = timeout_ms;
        self
    }

    /// Add an extra header sent with every request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    /// Accept self-signed certificates (lab installations).
    pub fn with_self_signed_certs(mut self, accept: bool) -> Self {
        self.accept_self_signed_certs = accept;
        self
    }

    /// Whether a non-blank access token is configured.
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// Check the settings needed to build a client.
    ///
    /// The access token is not required here; `login` reports a missing
    /// token on its own so that an unauthenticated client can still be built.
    pub fn validate(&self) -> VspcResult<()> {
        if sanitize_endpoint(&self.endpoint).is_empty() {
            return Err(VspcError::MissingConfig("endpoint".into()));
        }
        if self.page_size == 0 {
            return Err(VspcError::InvalidArgument(
                "page_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The endpoint in canonical form (see [`sanitize_endpoint`]).
    pub fn sanitized_endpoint(&self) -> String {
        sanitize_endpoint(&self.endpoint)
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, falling back
    /// to defaults when the file does not exist.
    pub fn load_default() -> VspcResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> VspcResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> VspcResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| VspcError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> VspcResult<PathBuf> {
        Ok(platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> VspcResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> VspcResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> VspcResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(constants::ENV_API_HOST) {
            self.server.endpoint = endpoint;
        }
        if let Some(token) = lookup(constants::ENV_API_KEY) {
            self.server.access_token = token;
        }
        if let Some(raw) = lookup(constants::ENV_PAGE_SIZE) {
            self.server.page_size = raw.trim().parse().map_err(|_| {
                VspcError::Config(format!(
                    "{} must be a positive integer, got {raw:?}",
                    constants::ENV_PAGE_SIZE
                ))
            })?;
        }
        Ok(())
    }
}

/// Sanitize and normalize a server endpoint.
///
/// Strips whitespace, quotes, trailing slashes and a trailing API prefix, and
/// defaults the scheme to https.
pub fn sanitize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_matches('"').trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let without_slash = with_scheme.trim_end_matches('/');
    without_slash
        .strip_suffix(constants::API_PREFIX)
        .unwrap_or(without_slash)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.page_size, 100);
        assert_eq!(config.server.api_timeout_ms, 30_000);
        assert!(config.server.user_agent.starts_with("VSPC Rust API client"));
        assert!(!config.server.has_access_token());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_builder_methods() {
        let config = ServerConfig::new("vspc.local", "secret")
            .with_page_size(10)
            .with_timeout_ms(5_000)
            .with_header("X-Tenant", "acme")
            .with_user_agent("probe/1.0");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.api_timeout_ms, 5_000);
        assert_eq!(config.custom_headers.get("X-Tenant").map(String::as_str), Some("acme"));
        assert_eq!(config.user_agent, "probe/1.0");
        assert!(config.has_access_token());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            ServerConfig::default().validate(),
            Err(VspcError::MissingConfig(_))
        ));
        assert!(matches!(
            ServerConfig::new("vspc.local", "").with_page_size(0).validate(),
            Err(VspcError::InvalidArgument(_))
        ));
        assert!(ServerConfig::new("vspc.local", "").validate().is_ok());
    }

    #[test]
    fn test_sanitize_endpoint() {
        assert_eq!(sanitize_endpoint("vspc.example.com"), "https://vspc.example.com");
        assert_eq!(
            sanitize_endpoint("http://10.0.0.5:1280/"),
            "http://10.0.0.5:1280"
        );
        assert_eq!(
            sanitize_endpoint("  \"https://vspc.example.com/api/v3/\"  "),
            "https://vspc.example.com"
        );
        assert_eq!(sanitize_endpoint("   "), "");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env_from(|key| match key {
                "VSPC_API_HOST" => Some("https://vspc.test".into()),
                "VSPC_API_KEY" => Some("token".into()),
                "VSPC_PAGE_SIZE" => Some("25".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.endpoint, "https://vspc.test");
        assert_eq!(config.server.access_token, "token");
        assert_eq!(config.server.page_size, 25);
    }

    #[test]
    fn test_env_rejects_bad_page_size() {
        let mut config = AppConfig::default();
        let result = config.apply_env_from(|key| {
            (key == "VSPC_PAGE_SIZE").then(|| "lots".to_string())
        });
        assert!(matches!(result, Err(VspcError::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            endpoint = "https://vspc.example.com"
            page_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.server.page_size, 10);
        assert_eq!(config.server.api_timeout_ms, 30_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.server = ServerConfig::new("https://vspc.example.com", "abc").with_page_size(7);
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server, config.server);
    }
}
