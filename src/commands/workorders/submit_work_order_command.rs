use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    commands::Command,
    config::AppConfig,
    errors::ServiceError,
    models::{
        work_order_command::ParsedWorkOrder,
        work_order_submission::WorkOrderSubmissionRequest,
    },
    services::work_order_parser::WorkOrderParser,
};

/// Prepares the backend payload for a command submission.
///
/// Mirrors the dashboard's submit gate: the command must parse cleanly before
/// it is sent. Only the trimmed raw string is forwarded; the backend
/// re-validates it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitWorkOrderCommand {
    #[validate(length(min = 1, message = "Flight id cannot be empty"))]
    pub flight_id: String,
    pub command: String,
    pub max_command_length: usize,
}

impl SubmitWorkOrderCommand {
    pub fn new(flight_id: impl Into<String>, command: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            flight_id: flight_id.into(),
            command: command.into(),
            max_command_length: config.max_command_length,
        }
    }

    fn rejection_message(parsed: &ParsedWorkOrder) -> String {
        parsed
            .errors
            .iter()
            .cloned()
            .chain(parsed.invalid_commands().map(|c| c.description.clone()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Command for SubmitWorkOrderCommand {
    type Result = WorkOrderSubmissionRequest;

    #[instrument(skip(self), fields(flight_id = %self.flight_id))]
    fn execute(&self) -> Result<Self::Result, ServiceError> {
        self.validate().map_err(|e| {
            warn!("Invalid submission: {}", e);
            ServiceError::from(e)
        })?;

        let length = self.command.trim().chars().count();
        if length > self.max_command_length {
            let msg = format!(
                "Command is {} characters long; the limit is {}",
                length, self.max_command_length
            );
            warn!("{}", msg);
            return Err(ServiceError::InvalidInput(msg));
        }

        let parsed = WorkOrderParser::parse_command(&self.command);
        if !parsed.is_valid {
            let msg = Self::rejection_message(&parsed);
            warn!("Rejected work order command for flight {}: {}", self.flight_id, msg);
            return Err(ServiceError::ValidationError(msg));
        }

        info!(
            "Work order command prepared for flight {}: {}",
            self.flight_id,
            parsed.human_readable_commands()
        );

        Ok(WorkOrderSubmissionRequest {
            flight_id: self.flight_id.clone(),
            command: parsed.original_command,
        })
    }
}
