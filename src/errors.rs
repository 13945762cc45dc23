use serde::{Deserialize, Serialize};

/// Error body printed by the CLI when `--json` output is requested.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category (e.g., "Validation error", "Invalid input")
    pub error: String,
    /// Human-readable error description
    pub message: String,
    /// ISO 8601 timestamp when error occurred
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl From<crate::config::AppConfigError> for ServiceError {
    fn from(err: crate::config::AppConfigError) -> Self {
        ServiceError::ConfigError(err.to_string())
    }
}

impl ServiceError {
    /// Process exit code for the CLI.
    /// Rejected input exits with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) | Self::InvalidInput(_) => 2,
            Self::SerializationError(_) | Self::ConfigError(_) | Self::Other(_) => 1,
        }
    }

    /// Category label used in [`ErrorResponse::error`].
    pub fn category(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "Validation error",
            Self::InvalidInput(_) => "Invalid input",
            Self::SerializationError(_) => "Serialization error",
            Self::ConfigError(_) => "Configuration error",
            Self::Other(_) => "Internal error",
        }
    }

    /// Returns the message without the category prefix.
    pub fn response_message(&self) -> String {
        match self {
            Self::ValidationError(msg)
            | Self::InvalidInput(msg)
            | Self::SerializationError(msg)
            | Self::ConfigError(msg) => msg.clone(),
            Self::Other(err) => err.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.category().to_string(),
            message: self.response_message(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_input_uses_exit_code_two() {
        assert_eq!(ServiceError::ValidationError("x".into()).exit_code(), 2);
        assert_eq!(ServiceError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(ServiceError::ConfigError("x".into()).exit_code(), 1);
        assert_eq!(
            ServiceError::Other(anyhow::anyhow!("boom")).exit_code(),
            1
        );
    }

    #[test]
    fn response_strips_category_prefix() {
        let err = ServiceError::ValidationError("Duplicate command types found: CHK".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Duplicate command types found: CHK"
        );

        let response = err.to_response();
        assert_eq!(response.error, "Validation error");
        assert_eq!(response.message, "Duplicate command types found: CHK");
    }

    #[test]
    fn serde_errors_convert_to_serialization_error() {
        let err: ServiceError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ServiceError::SerializationError(_)));
    }
}
