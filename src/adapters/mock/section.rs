//! Mock section for testing.
//!
//! Enablement and visibility can be flipped at any time, and the refresh
//! can be told to finish immediately, never, or only when released.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};

use crate::models::SectionKind;
use crate::traits::Section;

/// How a mock section's `update_data` completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Resolve without yielding
    #[default]
    Immediate,
    /// Never resolve
    Never,
    /// Resolve once a permit is handed out with [`MockSection::release`]
    Gated,
}

/// A capability call received by a mock section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCall {
    Privacy(bool),
    ZeroSearch(bool),
    UpdateData,
}

/// Call log that several mock sections can share, to check ordering
/// across sections.
pub type CallLog = Arc<Mutex<Vec<(SectionKind, SectionCall)>>>;

/// Mock section for testing.
///
/// # Example
///
/// ```ignore
/// use homescreen::adapters::mock::{Completion, MockSection};
///
/// let pocket = Arc::new(
///     MockSection::new(SectionKind::Pocket)
///         .with_enabled(true)
///         .with_completion(Completion::Gated),
/// );
///
/// coordinator.refresh_one(SectionKind::Pocket);
/// pocket.release(1);
/// assert!(pocket.wait_for_finished(1, Duration::from_secs(1)).await);
/// ```
#[derive(Debug)]
pub struct MockSection {
    kind: SectionKind,
    enabled: AtomicBool,
    should_show: Mutex<Option<bool>>,
    is_private: AtomicBool,
    is_zero_search: AtomicBool,
    completion: Completion,
    gate: Semaphore,
    updates_started: AtomicUsize,
    updates_finished: AtomicUsize,
    finished: Notify,
    log: CallLog,
}

impl MockSection {
    /// Create an enabled section whose refresh completes immediately.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            enabled: AtomicBool::new(true),
            should_show: Mutex::new(None),
            is_private: AtomicBool::new(false),
            is_zero_search: AtomicBool::new(false),
            completion: Completion::Immediate,
            gate: Semaphore::new(0),
            updates_started: AtomicUsize::new(0),
            updates_finished: AtomicUsize::new(0),
            finished: Notify::new(),
            log: CallLog::default(),
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.store(enabled, Ordering::SeqCst);
        self
    }

    /// Make `should_show` answer independently of `is_enabled`.
    pub fn with_should_show(self, should_show: bool) -> Self {
        *self.should_show.lock().unwrap() = Some(should_show);
        self
    }

    pub fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Record calls into a shared log.
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn set_should_show(&self, should_show: Option<bool>) {
        *self.should_show.lock().unwrap() = should_show;
    }

    /// Let `count` gated refreshes finish.
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    /// Calls received by this section, oldest first.
    pub fn calls(&self) -> Vec<SectionCall> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == self.kind)
            .map(|(_, call)| *call)
            .collect()
    }

    /// Every call in the (possibly shared) log.
    pub fn log(&self) -> Vec<(SectionKind, SectionCall)> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.log.lock().unwrap().clear();
    }

    pub fn is_private(&self) -> bool {
        self.is_private.load(Ordering::SeqCst)
    }

    pub fn is_zero_search(&self) -> bool {
        self.is_zero_search.load(Ordering::SeqCst)
    }

    /// Number of refreshes started.
    pub fn update_count(&self) -> usize {
        self.updates_started.load(Ordering::SeqCst)
    }

    /// Number of refreshes that resolved.
    pub fn finished_count(&self) -> usize {
        self.updates_finished.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` refreshes resolved. Returns `false` on
    /// timeout.
    pub async fn wait_for_finished(&self, count: usize, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, async {
            loop {
                let notified = self.finished.notified();
                if self.finished_count() >= count {
                    return;
                }
                notified.await;
            }
        })
        .await
        .is_ok()
    }

    fn record(&self, call: SectionCall) {
        self.log.lock().unwrap().push((self.kind, call));
    }
}

#[async_trait]
impl Section for MockSection {
    fn kind(&self) -> SectionKind {
        self.kind
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn should_show(&self) -> bool {
        let forced = *self.should_show.lock().unwrap();
        forced.unwrap_or_else(|| self.is_enabled())
    }

    fn update_privacy_concerned_section(&self, is_private: bool) {
        self.is_private.store(is_private, Ordering::SeqCst);
        self.record(SectionCall::Privacy(is_private));
    }

    fn update_zero_search_state(&self, is_zero_search: bool) {
        self.is_zero_search.store(is_zero_search, Ordering::SeqCst);
        self.record(SectionCall::ZeroSearch(is_zero_search));
    }

    async fn update_data(&self) {
        self.record(SectionCall::UpdateData);
        self.updates_started.fetch_add(1, Ordering::SeqCst);

        match self.completion {
            Completion::Immediate => {}
            Completion::Never => std::future::pending::<()>().await,
            Completion::Gated => {
                if let Ok(permit) = self.gate.acquire().await {
                    permit.forget();
                }
            }
        }

        self.updates_finished.fetch_add(1, Ordering::SeqCst);
        self.finished.notify_waiters();
    }
}
