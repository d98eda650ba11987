//! Async runtime error types.

use thiserror::Error;

/// Errors about the tokio runtime refresh tasks are spawned on.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The coordinator was built outside a runtime and none was supplied.
    #[error("no tokio runtime available for section refresh tasks: {0}")]
    Unavailable(#[from] tokio::runtime::TryCurrentError),
}

impl RuntimeError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Unavailable(_) => "RUNTIME_UNAVAILABLE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RuntimeError::Unavailable(_) => {
                "Section refresh needs an async runtime, but none was running.".to_string()
            }
        }
    }
}
