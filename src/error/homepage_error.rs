//! Unified error type for the home-screen coordinator.
//!
//! `HomepageError` folds the domain-specific errors into one enum so that
//! callers can categorize and report them uniformly.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::registry::RegistryError;
use super::runtime::RuntimeError;

/// Unified error type for the crate.
#[derive(Debug)]
pub enum HomepageError {
    /// Invalid configuration.
    Config(ConfigError),

    /// Invalid section registry.
    Registry(RegistryError),

    /// Missing or unusable async runtime.
    Runtime(RuntimeError),
}

impl HomepageError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HomepageError::Config(_) => ErrorCategory::Configuration,
            HomepageError::Registry(_) => ErrorCategory::Client,
            HomepageError::Runtime(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            HomepageError::Config(err) => err.user_message(),
            HomepageError::Registry(err) => err.user_message(),
            HomepageError::Runtime(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            HomepageError::Config(err) => err.error_code(),
            HomepageError::Registry(err) => err.error_code(),
            HomepageError::Runtime(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for HomepageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomepageError::Config(err) => write!(f, "{}", err),
            HomepageError::Registry(err) => write!(f, "{}", err),
            HomepageError::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for HomepageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HomepageError::Config(err) => Some(err),
            HomepageError::Registry(err) => Some(err),
            HomepageError::Runtime(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ConfigError> for HomepageError {
    fn from(err: ConfigError) -> Self {
        HomepageError::Config(err)
    }
}

impl From<RegistryError> for HomepageError {
    fn from(err: RegistryError) -> Self {
        HomepageError::Registry(err)
    }
}

impl From<RuntimeError> for HomepageError {
    fn from(err: RuntimeError) -> Self {
        HomepageError::Runtime(err)
    }
}

impl From<tokio::runtime::TryCurrentError> for HomepageError {
    fn from(err: tokio::runtime::TryCurrentError) -> Self {
        HomepageError::Runtime(RuntimeError::Unavailable(err))
    }
}
