//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use homescreen::prelude::*;
//! ```
//!
//! This will import:
//! - The coordinator and its builder
//! - Section kinds and the collaborator traits
//! - Configuration and error types
//! - Telemetry record types

pub use crate::config::HomepageConfig;
pub use crate::coordinator::{HomepageCoordinator, HomepageCoordinatorBuilder, VisibilityRequester};
pub use crate::error::{HomepageError, HomepageResult};
pub use crate::models::SectionKind;
pub use crate::telemetry::{ChannelTelemetry, TelemetryEvent, TelemetryEventKind, ViewOrigin};
pub use crate::traits::{HomepageListener, Section, TelemetrySink};
