//! Company commands.

use clap::Subcommand;
use vspc_api::ApiClient;
use vspc_core::error::VspcResult;
use crate::OutputFormat;
use super::Column;

const COLUMNS: &[Column] = &[
    ("Instance UID", "/instanceUid"),
    ("Name", "/name"),
    ("Status", "/status"),
];

#[derive(Subcommand)]
pub enum CompaniesAction {
    /// List all companies.
    List,
    /// Show a single company.
    Get {
        /// Company instance UID.
        id: String,
    },
    /// Show the number of companies.
    Count,
}

pub async fn run(api: &ApiClient, action: CompaniesAction, format: OutputFormat) -> VspcResult<()> {
    match action {
        CompaniesAction::List => {
            let companies = api.companies().await?;
            super::print_items(&companies, COLUMNS, "companies", format);
        }
        CompaniesAction::Get { id } => {
            let company = api.company(&id).await?;
            super::print_item(&company, &format!("Company {id}"), format);
        }
        CompaniesAction::Count => {
            let count = api.company_count().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "companies": count })),
                OutputFormat::Text => println!("companies: {count}"),
            }
        }
    }
    Ok(())
}
