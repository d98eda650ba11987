//! Coordinator state containers
//!
//! - SectionRegistry: the fixed, priority-ordered catalog of sections
//! - VisibilitySet: the priority-ordered subset currently shown
//! - AppearanceGate: on-screen tracking that gates view telemetry

pub mod appearance;
pub mod registry;
pub mod visibility;

pub use appearance::AppearanceGate;
pub use registry::SectionRegistry;
pub use visibility::VisibilitySet;
