//! Client-wide constants.

/// Application name, used for platform directories.
pub const APP_NAME: &str = "vspc";

/// Client version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API path prefix for all VSPC resources.
pub const API_PREFIX: &str = "/api/v3";

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding the server endpoint.
pub const ENV_API_HOST: &str = "VSPC_API_HOST";

/// Environment variable overriding the access token.
pub const ENV_API_KEY: &str = "VSPC_API_KEY";

/// Environment variable overriding the page size.
pub const ENV_PAGE_SIZE: &str = "VSPC_PAGE_SIZE";

/// Default User-Agent sent with every request.
pub fn default_user_agent() -> String {
    format!("VSPC Rust API client {APP_VERSION}")
}
