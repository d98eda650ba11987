//! Channel through which sections ask to be shown.

use tokio::sync::mpsc;

use crate::models::SectionKind;

/// Cloneable handle a section keeps to report that it wants to appear.
///
/// Requests queue up until the coordinator's owner calls
/// [`process_visibility_requests`](super::HomepageCoordinator::process_visibility_requests).
#[derive(Debug, Clone)]
pub struct VisibilityRequester {
    tx: mpsc::UnboundedSender<SectionKind>,
}

impl VisibilityRequester {
    pub(crate) fn new(tx: mpsc::UnboundedSender<SectionKind>) -> Self {
        Self { tx }
    }

    /// Ask for `kind` to be shown.
    ///
    /// Returns `false` if the coordinator is gone.
    pub fn request_show(&self, kind: SectionKind) -> bool {
        if self.tx.send(kind).is_err() {
            tracing::debug!(section = %kind, "Coordinator dropped, visibility request ignored");
            return false;
        }
        true
    }
}
