use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    commands::Command, errors::ServiceError, models::work_order_command::ParsedWorkOrder,
    services::work_order_parser::WorkOrderParser,
};

/// Parses a command string for preview. Malformed input is reported on the
/// returned [`ParsedWorkOrder`], never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWorkOrderCommand {
    pub command: String,
}

impl Command for ParseWorkOrderCommand {
    type Result = ParsedWorkOrder;

    #[instrument(skip(self), fields(command = %self.command))]
    fn execute(&self) -> Result<Self::Result, ServiceError> {
        let parsed = WorkOrderParser::parse_command(&self.command);
        info!(
            commands = parsed.commands.len(),
            is_valid = parsed.is_valid,
            "Parsed work order command"
        );
        Ok(parsed)
    }
}
