//! Authentication sanity check.
//!
//! VSPC authenticates every request with a bearer token, so there is no
//! login exchange. `login` only verifies that a token is configured and that
//! the server accepts it.

use serde_json::Value;
use tracing::{debug, warn};

use vspc_core::error::{VspcError, VspcResult};

use crate::client::ApiClient;
use crate::endpoints::ABOUT_PATH;

impl ApiClient {
    /// Verify the configured access token against `GET /api/v3/about`.
    ///
    /// Returns the about payload on success. A missing token fails before any
    /// request is made; a rejected token surfaces as
    /// [`VspcError::AuthFailed`]. Other transport errors pass through.
    pub async fn login(&self) -> VspcResult<Value> {
        if !self.config().has_access_token() {
            return Err(VspcError::MissingConfig(
                "access_token (API key) is not set".into(),
            ));
        }

        match self.get_data::<Value>(ABOUT_PATH).await {
            Ok(about) => {
                debug!("access token accepted by {}", self.endpoint());
                Ok(about)
            }
            Err(VspcError::Unauthorized(reason)) => {
                warn!("access token rejected by {}: {reason}", self.endpoint());
                Err(VspcError::AuthFailed(reason))
            }
            Err(e) => Err(e),
        }
    }
}
