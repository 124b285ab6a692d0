//! Alarm commands.

use clap::Subcommand;
use vspc_api::ApiClient;
use vspc_core::error::VspcResult;
use crate::OutputFormat;
use super::Column;

const ALARM_COLUMNS: &[Column] = &[
    ("Instance UID", "/instanceUid"),
    ("Template", "/alarmTemplateUid"),
    ("Object", "/object/objectName"),
    ("Status", "/lastActivation/status"),
    ("Time", "/lastActivation/time"),
];

const ACTIVATION_COLUMNS: &[Column] = &[
    ("Instance UID", "/instanceUid"),
    ("Status", "/status"),
    ("Time", "/time"),
    ("Message", "/message"),
];

const TEMPLATE_COLUMNS: &[Column] = &[
    ("Instance UID", "/instanceUid"),
    ("Name", "/name"),
    ("Category", "/category"),
    ("Enabled", "/isEnabled"),
];

#[derive(Subcommand)]
pub enum AlarmsAction {
    /// List all triggered alarms.
    Active,
    /// Show a single triggered alarm.
    Get {
        /// Alarm instance UID.
        id: String,
    },
    /// Print the number of triggered alarms.
    Count,
    /// List the status changes of a triggered alarm.
    History {
        /// Alarm instance UID.
        id: String,
    },
    /// List all alarm templates.
    Templates,
    /// Show a single alarm template.
    Template {
        /// Template instance UID.
        id: String,
    },
    /// List the status changes of alarms raised from a template.
    Events {
        /// Template instance UID.
        id: String,
    },
}

pub async fn run(api: &ApiClient, action: AlarmsAction, format: OutputFormat) -> VspcResult<()> {
    match action {
        AlarmsAction::Active => {
            let alarms = api.active_alarms().await?;
            super::print_items(&alarms, ALARM_COLUMNS, "triggered alarms", format);
        }
        AlarmsAction::Get { id } => {
            let alarm = api.active_alarm(&id).await?;
            super::print_item(&alarm, &format!("Alarm {id}"), format);
        }
        AlarmsAction::Count => {
            let total = api.active_alarm_count().await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "alarms": total })),
                OutputFormat::Text => println!("triggered alarms: {total}"),
            }
        }
        AlarmsAction::History { id } => {
            let history = api.alarm_history(&id).await?;
            super::print_items(&history, ACTIVATION_COLUMNS, "status changes", format);
        }
        AlarmsAction::Templates => {
            let templates = api.alarm_templates().await?;
            super::print_items(&templates, TEMPLATE_COLUMNS, "alarm templates", format);
        }
        AlarmsAction::Template { id } => {
            let template = api.alarm_template(&id).await?;
            super::print_item(&template, &format!("Alarm template {id}"), format);
        }
        AlarmsAction::Events { id } => {
            let events = api.alarm_template_events(&id).await?;
            super::print_items(&events, ACTIVATION_COLUMNS, "events", format);
        }
    }
    Ok(())
}
