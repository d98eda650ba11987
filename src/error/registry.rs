//! Section registry error types.

use thiserror::Error;

use crate::models::SectionKind;

/// Errors raised while building a [`crate::state::SectionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two sections reported the same kind.
    #[error("section kind {0} is registered more than once")]
    DuplicateSection(SectionKind),
}

impl RegistryError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateSection(_) => "REGISTRY_DUPLICATE_SECTION",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RegistryError::DuplicateSection(kind) => {
                format!("The home screen was configured with two {} sections.", kind)
            }
        }
    }
}
