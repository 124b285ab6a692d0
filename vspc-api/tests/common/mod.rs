//! Shared helpers for the VSPC client integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use vspc_api::{ApiClient, RetryConfig};
use vspc_core::ServerConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-api-key";

/// Client pointed at the mock server with the given page size and no retries.
pub fn client_for(server: &MockServer, page_size: u32) -> ApiClient {
    let config = ServerConfig::new(server.uri(), TOKEN).with_page_size(page_size);
    ApiClient::new(&config)
        .expect("failed to build client")
        .with_retry_config(RetryConfig::disabled())
}

/// Client with a fast retry policy for exercising backoff.
pub fn retrying_client_for(server: &MockServer) -> ApiClient {
    client_for(server, 100).with_retry_config(RetryConfig {
        max_retries: 2,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
        retryable_statuses: vec![502, 503, 504],
    })
}

/// `count` fake resources named `prefix-<n>`, starting at `start`.
pub fn items(prefix: &str, start: u64, count: u64) -> Vec<Value> {
    (start..start + count)
        .map(|n| json!({ "instanceUid": format!("{prefix}-{n}"), "name": format!("{prefix} {n}") }))
        .collect()
}

/// A VSPC collection page envelope.
pub fn page_body(data: Vec<Value>, total: u64, offset: u64) -> Value {
    let count = data.len();
    json!({
        "data": data,
        "meta": { "pagingInfo": { "total": total, "count": count, "offset": offset } }
    })
}

/// A VSPC single-object envelope.
pub fn object_body(data: Value) -> Value {
    json!({ "data": data, "meta": null })
}

/// Mount one page of a `total`-item collection at `api_path`, expected to be
/// requested exactly once.
pub async fn mount_page(
    server: &MockServer,
    api_path: &str,
    prefix: &str,
    limit: u64,
    offset: u64,
    total: u64,
) {
    let count = limit.min(total.saturating_sub(offset));
    Mock::given(method("GET"))
        .and(path(api_path))
        .and(query_param("limit", limit.to_string()))
        .and(query_param("offset", offset.to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(items(prefix, offset, count), total, offset)),
        )
        .expect(1)
        .mount(server)
        .await;
}
