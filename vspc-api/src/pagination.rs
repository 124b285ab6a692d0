//! Offset/limit pagination over the VSPC response envelope.
//!
//! Paginated VSPC endpoints accept `limit` and `offset` query parameters and
//! report the total number of items in `meta.pagingInfo.total`:
//!
//! ```json
//! { "data": [ ... ], "meta": { "pagingInfo": { "total": 35, "count": 10, "offset": 0 } } }
//! ```
//!
//! A [`PageCursor`] is driven in a fixed order: fetch with
//! [`PageCursor::current_page_params`], collect [`extract_data`], call
//! [`PageCursor::advance`] with the body, and stop once
//! [`PageCursor::has_more_pages`] turns false.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use vspc_core::error::{VspcError, VspcResult};

/// Query parameters for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub limit: u32,
    pub offset: u64,
}

/// Progress through one paginated request sequence.
///
/// `total` starts at 1 so that the first page is always fetched. Every
/// advance moves `offset` forward by exactly `limit`; only server metadata
/// decides when iteration ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    offset: u64,
    limit: u32,
    total: u64,
}

impl PageCursor {
    /// Create a cursor positioned before the first page.
    pub fn new(page_size: u32) -> VspcResult<Self> {
        if page_size == 0 {
            return Err(VspcError::InvalidArgument(
                "page size must be greater than zero".into(),
            ));
        }
        let offset = 0;
        Ok(Self {
            offset,
            limit: page_size,
            total: offset + 1,
        })
    }

    /// Number of items already consumed.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Total item count last reported by the server.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Parameters to attach to the next request.
    pub fn current_page_params(&self) -> PageParams {
        PageParams {
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Fold one response body into the cursor.
    ///
    /// A body without `meta.pagingInfo` sets `total` to 0, which ends the
    /// iteration even if earlier pages reported more items.
    pub fn advance(&mut self, body: &Value) {
        self.offset = self.offset.saturating_add(u64::from(self.limit));
        self.total = match page_info(body) {
            Some(info) => coerce_total(info.get("total")),
            None => {
                warn!(
                    offset = self.offset,
                    "response carries no meta.pagingInfo, stopping pagination"
                );
                0
            }
        };
    }

    /// Whether another page should be requested.
    pub fn has_more_pages(&self) -> bool {
        self.offset < self.total
    }
}

/// Look up `meta.pagingInfo`, tolerating either key being absent.
pub fn page_info(body: &Value) -> Option<&Value> {
    body.get("meta")?.get("pagingInfo")
}

/// The `data` payload of an envelope, or the whole body when `data` is
/// missing, `null` or `false`.
pub fn extract_data(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if is_present(data) => data,
        _ => body,
    }
}

/// Owned counterpart of [`extract_data`].
pub fn into_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.get("data").is_some_and(is_present) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Integer conversion with a zero fallback.
///
/// Floats are truncated, strings contribute their leading digits, and
/// anything non-numeric (or negative) becomes 0.
pub(crate) fn coerce_total(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let trimmed = s.trim_start();
            let digits: String = trimmed
                .strip_prefix('+')
                .unwrap_or(trimmed)
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}
