//! Homescreen - section composition and refresh coordination
//!
//! Decides which home-screen sections are shown and in what order, fans
//! out their data refreshes, and tells the rendering surface what to
//! redraw. Rendering, section content and the telemetry backend live
//! outside this crate behind the traits in [`traits`].

pub mod adapters;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod prelude;
pub mod state;
pub mod telemetry;
pub mod traits;
