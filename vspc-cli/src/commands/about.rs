//! About and login commands.

use console::style;
use vspc_api::ApiClient;
use vspc_core::error::VspcResult;
use crate::OutputFormat;

/// Run the about command.
pub async fn run(api: &ApiClient, format: OutputFormat) -> VspcResult<()> {
    let about = api.about().await?;
    super::print_item(&about, "Server Information", format);
    Ok(())
}

/// Run the login command: verify the access token.
pub async fn login(api: &ApiClient, format: OutputFormat) -> VspcResult<()> {
    let start = std::time::Instant::now();
    let result = api.login().await;
    let elapsed = start.elapsed();

    match format {
        OutputFormat::Json => {
            let json = match &result {
                Ok(about) => serde_json::json!({
                    "authenticated": true,
                    "endpoint": api.endpoint(),
                    "server_version": about.get("serverVersion"),
                    "latency_ms": elapsed.as_millis(),
                }),
                Err(e) => serde_json::json!({
                    "authenticated": false,
                    "endpoint": api.endpoint(),
                    "error": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => match &result {
            Ok(about) => {
                println!(
                    "  {} token accepted by {} ({}ms)",
                    style("OK").green().bold(),
                    api.endpoint(),
                    elapsed.as_millis()
                );
                if let Some(version) = about.get("serverVersion").and_then(|v| v.as_str()) {
                    println!("  Server version: {version}");
                }
            }
            Err(e) => {
                println!("  {} {e}", style("FAIL").red().bold());
            }
        },
    }

    result.map(|_| ())
}
