use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::work_order_command::ParsedWorkOrder;

/// Payload sent to the backend when an operator submits a command.
///
/// Only the raw command string travels; the backend parses and validates it
/// again and its verdict is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderSubmissionRequest {
    pub flight_id: String,
    pub command: String,
}

/// History row for a submitted command, as listed per flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSubmission {
    pub id: Uuid,
    pub command_string: String,
    pub human_readable_commands: String,
    pub submitted_at: DateTime<Utc>,
}

impl CommandSubmission {
    pub fn from_parsed(parsed: &ParsedWorkOrder, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            command_string: parsed.original_command.clone(),
            human_readable_commands: parsed.human_readable_commands(),
            submitted_at,
        }
    }
}
