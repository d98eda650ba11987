//! Concrete implementations of trait abstractions.
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every collaborator:
//! - [`mock::MockSection`] - section with scripted enablement and refresh
//! - [`mock::RecordingListener`] - listener that records reload requests
//! - [`mock::RecordingTelemetry`] - sink that keeps every event

pub mod mock;

pub use mock::{MockSection, RecordingListener, RecordingTelemetry};
