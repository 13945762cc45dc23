use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    commands::Command, errors::ServiceError, models::work_order_command::ValidationSummary,
    services::work_order_parser::WorkOrderParser,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateWorkOrderCommand {
    pub command: String,
}

impl Command for ValidateWorkOrderCommand {
    type Result = ValidationSummary;

    #[instrument(skip(self))]
    fn execute(&self) -> Result<Self::Result, ServiceError> {
        let summary = WorkOrderParser::validate_command_string(&self.command);
        debug!(
            is_valid = summary.is_valid,
            errors = summary.errors.len(),
            "Validated work order command"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_duplicate_error() {
        let summary = ValidateWorkOrderCommand {
            command: "CHK10|CHK20".into(),
        }
        .execute()
        .unwrap();

        assert!(!summary.is_valid);
        assert_eq!(summary.errors, vec!["Duplicate command types found: CHK".to_string()]);
    }
}
