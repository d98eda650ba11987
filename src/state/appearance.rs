//! Appearance tracking for telemetry gating.

/// Tracks whether the home screen is on screen.
///
/// The coordinator emits its view events only on the transition from
/// hidden to appeared, so repeated appear calls inside one cycle are
/// harmless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppearanceGate {
    appeared: bool,
}

impl AppearanceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the view as appeared.
    ///
    /// Returns `true` only when this call started a new appearance cycle.
    pub fn appear(&mut self) -> bool {
        if self.appeared {
            return false;
        }
        self.appeared = true;
        true
    }

    /// Mark the view as gone. Always succeeds, never reports anything.
    pub fn disappear(&mut self) {
        self.appeared = false;
    }

    pub fn is_appeared(&self) -> bool {
        self.appeared
    }
}
