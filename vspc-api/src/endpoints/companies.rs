//! Company endpoints.

use vspc_core::error::VspcResult;
use crate::client::ApiClient;
use super::resource_path;

const COMPANIES: &str = "/organizations/companies";

impl ApiClient {
    /// List all companies managed by the console.
    pub async fn companies(&self) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(COMPANIES, &[])).await
    }

    /// Get a single company by its instance UID.
    pub async fn company(&self, company_id: &str) -> VspcResult<serde_json::Value> {
        self.get_data(&resource_path(COMPANIES, &[company_id])).await
    }

    /// Get the total number of companies.
    pub async fn company_count(&self) -> VspcResult<u64> {
        self.count(&resource_path(COMPANIES, &[])).await
    }
}
