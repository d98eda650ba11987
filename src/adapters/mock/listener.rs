//! Recording listener for testing.

use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Notify;

use crate::models::SectionKind;
use crate::traits::HomepageListener;

/// A notification received by [`RecordingListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerEvent {
    SectionReload(SectionKind),
    AllReload,
}

/// Listener that records every notification.
///
/// Refresh completions arrive from spawned tasks, so tests wait for them
/// with [`wait_for_events`](Self::wait_for_events).
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ListenerEvent>>,
    notify: Notify,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Kinds of every section reload, in arrival order.
    pub fn section_reloads(&self) -> Vec<SectionKind> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::SectionReload(kind) => Some(*kind),
                ListenerEvent::AllReload => None,
            })
            .collect()
    }

    pub fn all_reload_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, ListenerEvent::AllReload))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Wait until at least `count` events were recorded. Returns `false`
    /// on timeout.
    pub async fn wait_for_events(&self, count: usize, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, async {
            loop {
                let notified = self.notify.notified();
                if self.events.lock().unwrap().len() >= count {
                    return;
                }
                notified.await;
            }
        })
        .await
        .is_ok()
    }

    fn push(&self, event: ListenerEvent) {
        self.events.lock().unwrap().push(event);
        self.notify.notify_waiters();
    }
}

impl HomepageListener for RecordingListener {
    fn section_needs_reload(&self, kind: SectionKind) {
        self.push(ListenerEvent::SectionReload(kind));
    }

    fn all_need_reload(&self) {
        self.push(ListenerEvent::AllReload);
    }
}
