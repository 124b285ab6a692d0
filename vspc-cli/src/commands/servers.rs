//! Backup server commands.

use clap::Subcommand;
use vspc_api::ApiClient;
use vspc_core::error::VspcResult;
use crate::OutputFormat;
use super::Column;

const COLUMNS: &[Column] = &[
    ("Instance UID", "/instanceUid"),
    ("Name", "/name"),
    ("Version", "/version"),
    ("Status", "/status"),
];

#[derive(Subcommand)]
pub enum ServersAction {
    /// List all backup servers.
    List,
    /// Show a single backup server.
    Get {
        /// Backup server instance UID.
        id: String,
    },
    /// Show the number of backup servers.
    Count,
}

pub async fn run(api: &ApiClient, action: ServersAction, format: OutputFormat) -> VspcResult<()> {
    match action {
        ServersAction::List => {
            let servers = api.backup_servers().await?;
            super::print_items(&servers, COLUMNS, "backup servers", format);
        }
        ServersAction::Get { id } => {
            let server = api.backup_server(&id).await?;
            super::print_item(&server, &format!("Backup server {id}"), format);
        }
        ServersAction::Count => {
            let count = api.backup_server_count().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "backup_servers": count })),
                OutputFormat::Text => println!("backup servers: {count}"),
            }
        }
    }
    Ok(())
}
