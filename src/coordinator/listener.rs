//! Weak, replaceable slot for the rendering-surface listener.

use std::sync::{Arc, RwLock, Weak};

use crate::models::SectionKind;
use crate::traits::HomepageListener;

/// Holds at most one listener, weakly.
///
/// Clones share the same slot, so refresh tasks observe listener changes
/// made after they were spawned. Once the listener is dropped by its owner,
/// notifications become silent no-ops.
#[derive(Clone, Default)]
pub struct ListenerSlot {
    inner: Arc<RwLock<Option<Weak<dyn HomepageListener>>>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `listener`, dropping any previous one.
    pub fn set(&self, listener: Arc<dyn HomepageListener>) {
        let weak = Arc::downgrade(&listener);
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = Some(weak);
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// The listener, if one is installed and still alive.
    pub fn get(&self) -> Option<Arc<dyn HomepageListener>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .and_then(Weak::upgrade)
    }

    pub fn section_needs_reload(&self, kind: SectionKind) {
        // Upgrade first so the lock is not held while the listener runs.
        match self.get() {
            Some(listener) => listener.section_needs_reload(kind),
            None => tracing::debug!(section = %kind, "No listener for section reload"),
        }
    }

    pub fn all_need_reload(&self) {
        match self.get() {
            Some(listener) => listener.all_need_reload(),
            None => tracing::debug!("No listener for full reload"),
        }
    }
}

impl std::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("alive", &self.get().is_some())
            .finish()
    }
}
