//! Alarm endpoints: triggered alarms, their history, and alarm templates.

use vspc_core::error::VspcResult;
use crate::client::ApiClient;
use super::resource_path;

const ACTIVE: &str = "/alarms/active";
const TEMPLATES: &str = "/alarms/templates";

impl ApiClient {
    /// List all triggered alarms.
    pub async fn active_alarms(&self) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(ACTIVE, &[])).await
    }

    /// Get a triggered alarm by its instance UID.
    pub async fn active_alarm(&self, alarm_id: &str) -> VspcResult<serde_json::Value> {
        self.get_data(&resource_path(ACTIVE, &[alarm_id])).await
    }

    /// List all status changes of a triggered alarm, oldest first.
    pub async fn alarm_history(&self, alarm_id: &str) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(ACTIVE, &[alarm_id, "history"]))
            .await
    }

    /// Get the total number of triggered alarms.
    pub async fn active_alarm_count(&self) -> VspcResult<u64> {
        self.count(&resource_path(ACTIVE, &[])).await
    }

    /// List all alarm templates.
    pub async fn alarm_templates(&self) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(TEMPLATES, &[])).await
    }

    /// Get an alarm template by its instance UID.
    pub async fn alarm_template(&self, template_id: &str) -> VspcResult<serde_json::Value> {
        self.get_data(&resource_path(TEMPLATES, &[template_id])).await
    }

    /// List all status changes of triggered alarms created from a template.
    pub async fn alarm_template_events(
        &self,
        template_id: &str,
    ) -> VspcResult<Vec<serde_json::Value>> {
        self.get_paged(&resource_path(TEMPLATES, &[template_id, "events"]))
            .await
    }
}
