//! API endpoint modules organized by resource group.
//!
//! Each module adds methods to [`crate::ApiClient`] for a group of related
//! VSPC endpoints. Single resources come back as the unwrapped `data`
//! object, collections as every item across all pages.

pub mod about;
pub mod alarms;
pub mod companies;
pub mod infrastructure;

use vspc_core::constants::API_PREFIX;

pub(crate) use about::ABOUT_PATH;

/// Build an API path from a resource prefix and raw segments, percent-encoding
/// each segment.
pub(crate) fn resource_path(prefix: &str, segments: &[&str]) -> String {
    let mut path = format!("{API_PREFIX}{prefix}");
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    path
}

fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
