//! HTTP client for the VSPC REST API.
//!
//! Handles bearer authentication, custom headers, timeouts, SSL certificate
//! handling, exponential backoff retry, JSON decoding and driving paginated
//! collection requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use vspc_core::config::ServerConfig;
use vspc_core::constants;
use vspc_core::error::{VspcError, VspcResult};

use crate::pagination::{coerce_total, into_data, page_info, PageCursor, PageParams};

/// Retry configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Base delay between retries (doubles each attempt).
    pub base_delay: Duration,
    /// Maximum delay cap.
    pub max_delay: Duration,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(4),
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Never retry.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// HTTP client for communicating with a VSPC server.
///
/// Wraps reqwest::Client with VSPC-specific authentication, header
/// injection, retry logic, and error handling. Cloning is cheap and shares
/// the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Configuration the client was built from, endpoint sanitized.
    config: ServerConfig,
    /// Retry configuration.
    retry_config: RetryConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.config.endpoint)
            .field("page_size", &self.config.page_size)
            .field("has_access_token", &self.config.has_access_token())
            .finish()
    }
}

impl ApiClient {
    /// Create a new ApiClient from server configuration.
    pub fn new(config: &ServerConfig) -> VspcResult<Self> {
        config.validate()?;

        let mut config = config.clone();
        config.endpoint = config.sanitized_endpoint();

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers(&config)?)
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30));

        // Handle self-signed certificates
        if config.accept_self_signed_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| VspcError::Http(format!("failed to build HTTP client: {e}")))?;

        debug!("api client created for {}", config.endpoint);

        Ok(Self {
            inner,
            config,
            retry_config: RetryConfig::default(),
        })
    }

    /// Set custom retry configuration.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The sanitized server endpoint.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Page size used by [`ApiClient::get_paged`].
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.config.endpoint)
        } else {
            format!("{}/{path}", self.config.endpoint)
        }
    }

    /// Execute a GET request with exponential backoff retry.
    async fn request_with_retry<Q>(&self, path: &str, query: &Q) -> VspcResult<Response>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("GET {}", path);

        let mut last_error: Option<VspcError> = None;

        for attempt in 0..=self.retry_config.max_retries {
            if attempt > 0 {
                let delay = self.calculate_retry_delay(attempt - 1);
                warn!(
                    "retrying GET {} (attempt {}/{}) after {:.1}s",
                    path,
                    attempt + 1,
                    self.retry_config.max_retries + 1,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }

            let mut builder = self.inner.get(&url).query(query);
            if self.config.has_access_token() {
                builder = builder.bearer_auth(&self.config.access_token);
            }

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();

                    if self
                        .retry_config
                        .retryable_statuses
                        .contains(&status.as_u16())
                        && attempt < self.retry_config.max_retries
                    {
                        warn!("retryable status {} from {}", status.as_u16(), path);
                        last_error = Some(VspcError::ServerError {
                            status: status.as_u16(),
                            message: format!("retryable status {status}"),
                        });
                        continue;
                    }

                    return Self::check_status(response).await;
                }
                Err(e) => {
                    let is_retryable = e.is_timeout() || e.is_connect();
                    let err = Self::classify_error(e);

                    if is_retryable && attempt < self.retry_config.max_retries {
                        warn!("retryable error on {}: {}", path, err);
                        last_error = Some(err);
                        continue;
                    }

                    return Err(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| VspcError::Http("max retries exceeded".into())))
    }

    /// Calculate retry delay with exponential backoff.
    fn calculate_retry_delay(&self, attempt: u32) -> Duration {
        let base_ms = self.retry_config.base_delay.as_millis() as u64;
        let delay_ms = base_ms.saturating_mul(1u64.checked_shl(attempt).unwrap_or(u64::MAX));
        let max_ms = self.retry_config.max_delay.as_millis() as u64;
        Duration::from_millis(delay_ms.min(max_ms))
    }

    /// GET a path with query parameters and decode the JSON body.
    async fn get_value<Q>(&self, path: &str, query: &Q) -> VspcResult<Value>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.request_with_retry(path, query).await?;
        Self::parse_body(response).await
    }

    // --- Public request methods ---

    /// Execute a GET request and return the decoded JSON body as-is.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> VspcResult<Value> {
        self.get_value(path, query).await
    }

    /// GET a single resource and deserialize its `data` payload.
    ///
    /// Bodies without a `data` wrapper are deserialized whole.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> VspcResult<T> {
        let body = self.get_value(path, &[] as &[(&str, String)]).await?;
        serde_json::from_value(into_data(body))
            .map_err(|e| VspcError::Serialization(format!("failed to parse {path}: {e}")))
    }

    /// GET every page of a collection and concatenate the items.
    ///
    /// Each round trip is: fetch with the cursor's params, advance the cursor
    /// with the body, collect the data, stop once the cursor has no more
    /// pages. A failed request aborts the whole sequence.
    pub async fn get_paged(&self, path: &str) -> VspcResult<Vec<Value>> {
        let mut cursor = PageCursor::new(self.config.page_size)?;
        let mut items = Vec::new();

        loop {
            let params: PageParams = cursor.current_page_params();
            let body = self.get_value(path, &params).await?;
            cursor.advance(&body);

            match into_data(body) {
                Value::Array(page) => items.extend(page),
                other => items.push(other),
            }

            if !cursor.has_more_pages() {
                break;
            }
        }

        debug!(
            "GET {} collected {} item(s), server total {}",
            path,
            items.len(),
            cursor.total()
        );
        Ok(items)
    }

    /// Total number of items in a collection, from a single one-item page.
    ///
    /// Reads `meta.pagingInfo.total` the same way [`PageCursor::advance`]
    /// does, so missing or malformed metadata counts as 0.
    pub async fn count(&self, path: &str) -> VspcResult<u64> {
        let params = PageParams { limit: 1, offset: 0 };
        let body = self.get_value(path, &params).await?;
        Ok(page_info(&body)
            .map(|info| coerce_total(info.get("total")))
            .unwrap_or(0))
    }

    // --- Response helpers ---

    /// Decode a response body as JSON. An empty body decodes to `null`.
    async fn parse_body(response: Response) -> VspcResult<Value> {
        let text = response
            .text()
            .await
            .map_err(|e| VspcError::Http(format!("failed to read response body: {e}")))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| VspcError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Check the HTTP status code and convert to VspcError if needed.
    async fn check_status(response: Response) -> VspcResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(VspcError::Unauthorized(format!("server returned {status}")));
        }

        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(VspcError::ClientError {
                status: status.as_u16(),
                message: body,
            });
        }

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(VspcError::ServerError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }

    /// Classify a reqwest error into a VspcError variant.
    fn classify_error(e: reqwest::Error) -> VspcError {
        if e.is_timeout() {
            VspcError::Timeout(e.to_string())
        } else if e.is_connect() {
            VspcError::Http(format!("connection failed: {e}"))
        } else {
            VspcError::Http(e.to_string())
        }
    }
}

/// Headers sent with every request: JSON accept plus configured extras.
fn default_headers(config: &ServerConfig) -> VspcResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (key, value) in &config.custom_headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| VspcError::Config(format!("invalid header name {key:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| VspcError::Config(format!("invalid value for header {key:?}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig::new("vspc.local:1280", "token")
    }

    #[test]
    fn test_endpoint_is_sanitized() {
        let client = ApiClient::new(&ServerConfig::new("vspc.local:1280/api/v3/", "t")).unwrap();
        assert_eq!(client.endpoint(), "https://vspc.local:1280");
        assert_eq!(client.url("/api/v3/about"), "https://vspc.local:1280/api/v3/about");
        assert_eq!(client.url("api/v3/about"), "https://vspc.local:1280/api/v3/about");
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let err = ApiClient::new(&ServerConfig::new("", "token")).unwrap_err();
        assert!(matches!(err, VspcError::MissingConfig(_)));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = ApiClient::new(&test_config().with_page_size(0)).unwrap_err();
        assert!(matches!(err, VspcError::InvalidArgument(_)));
    }

    #[test]
    fn test_client_without_token_can_be_built() {
        let client = ApiClient::new(&ServerConfig::new("vspc.local", "")).unwrap();
        assert!(!client.config().has_access_token());
    }

    #[test]
    fn test_invalid_custom_header_is_rejected() {
        let config = test_config().with_header("bad header", "x");
        assert!(matches!(ApiClient::new(&config), Err(VspcError::Config(_))));
    }

    #[test]
    fn test_retry_delay_calculation() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(client.calculate_retry_delay(0), Duration::from_secs(1));
        assert_eq!(client.calculate_retry_delay(1), Duration::from_secs(2));
        assert_eq!(client.calculate_retry_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn test_retry_delay_capped() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert!(client.calculate_retry_delay(10) <= Duration::from_secs(4));
        assert!(client.calculate_retry_delay(80) <= Duration::from_secs(4));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = ApiClient::new(&test_config()).unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("has_access_token: true"));
        assert!(!rendered.contains("\"token\""));
    }
}
