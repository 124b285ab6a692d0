//! Infrastructure endpoints (backup servers).

use vspc_core::error::VspcResult;
use crate::client::ApiClient;
use super::resource_path;

const BACKUP_SERVERS: &str = "/infrastructure/backupServers";

impl ApiClient {
    /// List all backup servers connected to the console.
    pub async fn backup_servers(&self) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(BACKUP_SERVERS, &[])).await
    }

    /// Get a single backup server by its instance UID.
    pub async fn backup_server(&self, server_id: &str) -> VspcResult<serde_json::Value> {
        self.get_data(&resource_path(BACKUP_SERVERS, &[server_id])).await
    }

    /// Get the total number of backup servers.
    pub async fn backup_server_count(&self) -> VspcResult<u64> {
        self.count(&resource_path(BACKUP_SERVERS, &[])).await
    }
}
