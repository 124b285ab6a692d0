//! CLI command implementations.

pub mod about;
pub mod alarms;
pub mod companies;
pub mod servers;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::Value;

use vspc_api::ApiClient;
use vspc_core::config::AppConfig;
use vspc_core::error::VspcResult;
use crate::OutputFormat;

/// A table column: header and JSON pointer into each item.
pub type Column = (&'static str, &'static str);

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> VspcResult<ApiClient> {
    ApiClient::new(&config.server)
}

/// Render a JSON field for a table cell.
pub fn cell(item: &Value, pointer: &str) -> String {
    match item.pointer(pointer) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Print a collection as a table or as a JSON array. `plural` names the
/// items in the text footer.
pub fn print_items(items: &[Value], columns: &[Column], plural: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
        }
        OutputFormat::Text => {
            if items.is_empty() {
                println!("{}", summary(plural, 0));
                return;
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(columns.iter().map(|(header, _)| *header).collect::<Vec<_>>());
            for item in items {
                table.add_row(columns.iter().map(|(_, pointer)| cell(item, pointer)).collect::<Vec<_>>());
            }

            println!("{table}");
            println!("\n{}", summary(plural, items.len()));
        }
    }
}

fn summary(plural: &str, count: usize) -> String {
    if count == 0 {
        format!("No {plural} found.")
    } else {
        format!("{plural}: {count}")
    }
}

/// Print a single resource: pretty JSON in both formats, with a heading in text mode.
pub fn print_item(item: &Value, heading: &str, format: OutputFormat) {
    let body = serde_json::to_string_pretty(item).unwrap_or_default();
    match format {
        OutputFormat::Json => println!("{body}"),
        OutputFormat::Text => {
            println!("{}", console::style(heading).bold().underlined());
            println!("{body}");
        }
    }
}
