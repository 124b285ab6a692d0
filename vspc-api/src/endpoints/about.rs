//! About endpoint.

use vspc_core::error::VspcResult;
use crate::client::ApiClient;

/// General server information; also used as the token sanity check.
pub(crate) const ABOUT_PATH: &str = "/api/v3/about";

impl ApiClient {
    /// Get general information about the server (versions, installation id).
    pub async fn about(&self) -> VspcResult<serde_json::Value> {
        self.get_data(ABOUT_PATH).await
    }
}
