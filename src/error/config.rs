//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading [`crate::config::HomepageConfig`] or
/// building a telemetry channel from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held something that is not a boolean.
    #[error("{var} must be a boolean (1/0, true/false, yes/no, on/off), got {value:?}")]
    InvalidBool { var: String, value: String },

    /// An environment variable held something that is not a number.
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: String, value: String },

    /// The telemetry channel needs room for at least one event.
    #[error("telemetry channel capacity must be greater than zero")]
    ZeroChannelCapacity,
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidBool { .. } => "CONFIG_INVALID_BOOL",
            ConfigError::InvalidNumber { .. } => "CONFIG_INVALID_NUMBER",
            ConfigError::ZeroChannelCapacity => "CONFIG_ZERO_CAPACITY",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidBool { var, .. } | ConfigError::InvalidNumber { var, .. } => {
                format!("The {} setting is invalid. {}", var, self)
            }
            ConfigError::ZeroChannelCapacity => {
                "The telemetry channel capacity must be at least one.".to_string()
            }
        }
    }
}
