//! Work Order Commands Module
//!
//! CQRS-style commands over the work order command language
//! (`CHK15|BAG25|CLEAN10|PBB90`). Parsing itself lives in
//! `WorkOrderParser` in `src/services/work_order_parser.rs`; these commands
//! wrap it for the three things callers do with a command string:
//!
//! 1. **Preview** - `ParseWorkOrderCommand` returns the full breakdown
//! 2. **Validate** - `ValidateWorkOrderCommand` returns validity and errors only
//! 3. **Submit** - `SubmitWorkOrderCommand` gates on validity and builds the
//!    backend payload carrying the raw string

pub mod parse_work_order_command;
pub mod submit_work_order_command;
pub mod validate_work_order_command;

pub use parse_work_order_command::ParseWorkOrderCommand;
pub use submit_work_order_command::SubmitWorkOrderCommand;
pub use validate_work_order_command::ValidateWorkOrderCommand;
