//! Mock implementations for testing.
//!
//! These are used by the crate's own unit tests, by the integration tests
//! under `tests/`, and by the demo binary.
//!
//! # Available Mocks
//!
//! - [`MockSection`] - section with configurable enablement and completion
//! - [`RecordingListener`] - records `section_needs_reload` / `all_need_reload`
//! - [`RecordingTelemetry`] - in-memory telemetry sink

pub mod listener;
pub mod section;
pub mod telemetry;

pub use listener::{ListenerEvent, RecordingListener};
pub use section::{CallLog, Completion, MockSection, SectionCall};
pub use telemetry::RecordingTelemetry;
