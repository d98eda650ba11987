//! Error handling for the home-screen coordinator.
//!
//! The coordinator's day-to-day operations are total: out-of-range lookups
//! return `None` and redundant visibility changes are no-ops. Errors only
//! come from the edges:
//!
//! - **Configuration**: bad `HOMESCREEN_*` values ([`ConfigError`])
//! - **Registry**: duplicate section kinds ([`RegistryError`])
//! - **Runtime**: no tokio runtime to spawn refreshes on ([`RuntimeError`])
//!
//! All of them convert into [`HomepageError`], which carries an
//! [`ErrorCategory`], an error code and a user-facing message.

mod category;
mod config;
mod homepage_error;
mod registry;
mod result;
mod runtime;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use homepage_error::HomepageError;
pub use registry::RegistryError;
pub use result::HomepageResult;
pub use runtime::RuntimeError;
