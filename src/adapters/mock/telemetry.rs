//! In-memory telemetry sink for testing.

use std::sync::Mutex;

use crate::telemetry::{TelemetryEvent, TelemetryEventKind};
use crate::traits::TelemetrySink;

/// Telemetry sink that keeps every recorded event.
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Event payloads without timestamps, for easy comparison.
    pub fn kinds(&self) -> Vec<TelemetryEventKind> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record(&self, event: TelemetryEvent) {
        self.events.lock().unwrap().push(event);
    }
}
