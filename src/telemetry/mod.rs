//! Telemetry records emitted by the home screen.
//!
//! The coordinator decides *when* to record; where records go is up to the
//! [`TelemetrySink`](crate::traits::TelemetrySink) the host installs. Two
//! sinks ship with the crate: [`TracingTelemetry`] logs every record and
//! [`ChannelTelemetry`] broadcasts them over a tokio channel.

mod sinks;

pub use sinks::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature identifier used for exposure events.
pub const HOMESCREEN_FEATURE: &str = "homescreen";

/// Event category, fixed per event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Experiment and feature enrollment bookkeeping
    Enrollment,
    /// User-visible actions
    Action,
}

/// How the home screen was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrigin {
    /// Shown while the address bar is focused with no query
    ZeroSearch,
    /// Shown as the content of a new tab
    NewTab,
}

impl ViewOrigin {
    pub fn from_zero_search(is_zero_search: bool) -> Self {
        if is_zero_search {
            ViewOrigin::ZeroSearch
        } else {
            ViewOrigin::NewTab
        }
    }
}

/// The specific kind of telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEventKind {
    /// The user was exposed to a feature
    FeatureExposure { feature: String },
    /// The home screen was opened
    ViewOpened { origin: ViewOrigin },
}

impl TelemetryEventKind {
    /// Category this kind is always recorded under.
    pub fn category(&self) -> EventCategory {
        match self {
            TelemetryEventKind::FeatureExposure { .. } => EventCategory::Enrollment,
            TelemetryEventKind::ViewOpened { .. } => EventCategory::Action,
        }
    }
}

/// One telemetry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Fixed category for the kind
    pub category: EventCategory,
    /// Event payload
    pub kind: TelemetryEventKind,
}

impl TelemetryEvent {
    /// Create a new event with the current timestamp.
    pub fn new(kind: TelemetryEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            category: kind.category(),
            kind,
        }
    }

    /// Exposure record for the home-screen feature.
    pub fn feature_exposure() -> Self {
        Self::new(TelemetryEventKind::FeatureExposure {
            feature: HOMESCREEN_FEATURE.to_string(),
        })
    }

    /// View-opened record tagged with its origin.
    pub fn view_opened(origin: ViewOrigin) -> Self {
        Self::new(TelemetryEventKind::ViewOpened { origin })
    }
}
