// Work order command language
pub mod work_order_command;

// Submission payloads and history rows
pub mod work_order_submission;

pub use work_order_command::{
    CommandKind, CommandType, CommandUnit, ParsedWorkOrder, ValidationSummary, WorkOrderCommand,
};
pub use work_order_submission::{CommandSubmission, WorkOrderSubmissionRequest};
