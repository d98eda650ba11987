//! Trait abstractions for the coordinator's collaborators.
//!
//! Sections, the rendering surface and the telemetry backend live outside
//! this crate. These traits are the seams they plug into, and the seams the
//! mocks in [`crate::adapters::mock`] implement for tests.
//!
//! # Traits
//!
//! - [`Section`] - section view-model capability contract
//! - [`HomepageListener`] - reload notifications to the rendering surface
//! - [`TelemetrySink`] - event recording backend

pub mod listener;
pub mod section;
pub mod telemetry;

pub use listener::HomepageListener;
pub use section::Section;
pub use telemetry::TelemetrySink;
