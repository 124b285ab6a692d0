//! VSPC API - HTTP client for the Veeam Service Provider Console REST API.
//!
//! This crate binds the company, infrastructure, alarm and about resources
//! to methods on [`ApiClient`]. It handles bearer authentication, retry with
//! exponential backoff, and offset/limit pagination over the VSPC
//! `meta.pagingInfo` envelope via [`PageCursor`].
//!
//! ```no_run
//! use vspc_api::ApiClient;
//! use vspc_core::ServerConfig;
//!
//! # async fn run() -> vspc_core::VspcResult<()> {
//! let config = ServerConfig::new("https://vspc.example.com:1280", "api-key").with_page_size(50);
//! let client = ApiClient::new(&config)?;
//! client.login().await?;
//! for company in client.companies().await? {
//!     println!("{}", company["name"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod response;

// Re-export key types
pub use client::{ApiClient, RetryConfig};
pub use pagination::{extract_data, into_data, page_info, PageCursor, PageParams};
pub use response::{PagingInfo, ResponseEnvelope, ResponseMeta};
