//! Built-in telemetry sinks.

use tokio::sync::broadcast;

use super::TelemetryEvent;
use crate::error::ConfigError;
use crate::traits::TelemetrySink;

/// Sink that writes every record to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&self, event: TelemetryEvent) {
        tracing::info!(
            category = ?event.category,
            kind = ?event.kind,
            "telemetry event recorded"
        );
    }
}

/// Sink that broadcasts records to any number of subscribers.
///
/// Records sent while nobody is subscribed are dropped.
#[derive(Debug, Clone)]
pub struct ChannelTelemetry {
    tx: broadcast::Sender<TelemetryEvent>,
}

impl ChannelTelemetry {
    /// Create a sink and its first receiver.
    ///
    /// Returns [`ConfigError::ZeroChannelCapacity`] if `capacity` is zero.
    pub fn new(
        capacity: usize,
    ) -> Result<(Self, broadcast::Receiver<TelemetryEvent>), ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }
        let (tx, rx) = broadcast::channel(capacity);
        Ok((Self { tx }, rx))
    }

    /// Attach another receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<TelemetryEvent> {
        self.tx.subscribe()
    }
}

impl TelemetrySink for ChannelTelemetry {
    fn record(&self, event: TelemetryEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::warn!("Dropping telemetry event, no subscribers: {:?}", err.0.kind);
        }
    }
}
