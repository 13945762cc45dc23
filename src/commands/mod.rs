use crate::errors::ServiceError;

/// Command trait for implementing the Command Pattern
///
/// This trait allows for encapsulating all the logic needed to execute a work order
/// operation into a single object that can be validated and executed.
/// Execution is synchronous: work order commands are parsed locally and never
/// touch I/O.
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    /// Execute the command
    ///
    /// # Returns
    /// * `Result<Self::Result, ServiceError>` - The result of command execution or an error
    fn execute(&self) -> Result<Self::Result, ServiceError>;
}

pub mod workorders;
