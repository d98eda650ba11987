//! Telemetry sink abstraction.

use crate::telemetry::TelemetryEvent;

/// Destination for telemetry records.
///
/// Recording must not fail from the caller's point of view; sinks log and
/// drop anything they cannot deliver.
pub trait TelemetrySink: Send + Sync {
    /// Record one event.
    fn record(&self, event: TelemetryEvent);
}
