//! Server response types.
//!
//! VSPC REST responses wrap their payload in a common envelope with a `data`
//! field and a `meta` block carrying pagination bookkeeping.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::pagination::coerce_total;

/// Standard server response envelope.
///
/// ```json
/// { "data": [ ... ], "meta": { "pagingInfo": { "total": 35, "count": 10, "offset": 0 } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = serde_json::Value> {
    /// Response payload (type varies by endpoint).
    pub data: Option<T>,
    /// Metadata (pagination info). A `meta` of the wrong shape reads as absent.
    #[serde(default, deserialize_with = "lenient")]
    pub meta: Option<ResponseMeta>,
}

/// The `meta` block of an envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Pagination metadata, present on collection endpoints.
    #[serde(rename = "pagingInfo", default, deserialize_with = "lenient")]
    pub paging_info: Option<PagingInfo>,
}

/// Pagination metadata from collection responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagingInfo {
    /// Total number of items matching the query.
    #[serde(default, deserialize_with = "loose_count")]
    pub total: Option<u64>,
    /// Number of items in this page.
    #[serde(default, deserialize_with = "loose_count")]
    pub count: Option<u64>,
    /// Offset of the first item in this page.
    #[serde(default, deserialize_with = "loose_count")]
    pub offset: Option<u64>,
}

impl<T> ResponseEnvelope<T> {
    /// Total item count reported by the server, if any.
    pub fn total(&self) -> Option<u64> {
        self.meta
            .as_ref()
            .and_then(|m| m.paging_info.as_ref())
            .and_then(|p| p.total)
    }
}

/// Decode a value, treating anything of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Counts use the same integer coercion as [`crate::PageCursor`].
fn loose_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| coerce_total(Some(&v))))
}
