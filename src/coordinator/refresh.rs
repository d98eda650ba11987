//! Fan-out of per-section data refreshes.
//!
//! Each refresh runs as its own tokio task. Completion order across
//! sections is whatever the sections make it; the dispatcher only
//! guarantees dispatch order.
//!
//! Every task is stamped with two generations current at dispatch: the
//! dispatcher-wide one, bumped on cancel and drop, and the one of its
//! section, bumped when that section stops being shown. A completion whose
//! stamp is out of date on either is dropped instead of notifying the
//! listener.
//!
//! The check and the notification are not atomic. On a multi-threaded
//! runtime a completion that has already passed the check when the owner
//! cancels still delivers its `section_needs_reload`. That reload is
//! redundant but harmless, so cancellation only guarantees silence for
//! completions that happen after it returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinSet;

use super::listener::ListenerSlot;
use crate::models::SectionKind;
use crate::traits::Section;

type SectionGenerations = [AtomicU64; SectionKind::ALL.len()];

/// Spawns section refreshes and routes their completions to the listener.
pub struct RefreshDispatcher {
    runtime: Handle,
    generation: Arc<AtomicU64>,
    section_generations: Arc<SectionGenerations>,
    tasks: JoinSet<()>,
    listener: ListenerSlot,
}

impl RefreshDispatcher {
    pub fn new(runtime: Handle, listener: ListenerSlot) -> Self {
        Self {
            runtime,
            generation: Arc::new(AtomicU64::new(0)),
            section_generations: Arc::new(std::array::from_fn(|_| AtomicU64::new(0))),
            tasks: JoinSet::new(),
            listener,
        }
    }

    /// Start refreshing `section`. Returns immediately.
    ///
    /// When the section's `update_data` resolves and neither generation
    /// moved, the listener gets one `section_needs_reload`.
    pub fn dispatch(&mut self, section: Arc<dyn Section>) {
        self.reap();

        let kind = section.kind();
        let slot = kind.priority();
        let stamp = self.generation.load(Ordering::Acquire);
        let section_stamp = self.section_generations[slot].load(Ordering::Acquire);
        let generation = Arc::clone(&self.generation);
        let section_generations = Arc::clone(&self.section_generations);
        let listener = self.listener.clone();

        tracing::debug!(
            section = %kind,
            generation = stamp,
            section_generation = section_stamp,
            "Dispatching section refresh"
        );

        self.tasks.spawn_on(
            async move {
                section.update_data().await;

                let current = generation.load(Ordering::Acquire);
                let section_current = section_generations[slot].load(Ordering::Acquire);
                if current != stamp || section_current != section_stamp {
                    tracing::debug!(
                        section = %kind,
                        stamp,
                        current,
                        section_stamp,
                        section_current,
                        "Dropping stale section refresh"
                    );
                    return;
                }

                tracing::debug!(section = %kind, "Section refresh complete");
                listener.section_needs_reload(kind);
            },
            &self.runtime,
        );
    }

    /// Make every in-flight refresh stale. Returns the new generation.
    pub fn invalidate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Make the in-flight refreshes of one section stale, leaving the
    /// others alone. Returns the section's new generation.
    pub fn invalidate_section(&self, kind: SectionKind) -> u64 {
        self.section_generations[kind.priority()].fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Invalidate and abort every in-flight refresh.
    pub fn cancel_all(&mut self) {
        let generation = self.invalidate();
        tracing::debug!(generation, in_flight = self.tasks.len(), "Cancelling section refreshes");
        self.tasks.abort_all();
    }

    /// Number of refresh tasks that have not finished yet.
    pub fn in_flight(&mut self) -> usize {
        self.reap();
        self.tasks.len()
    }

    /// Collect finished tasks so the set does not grow without bound.
    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    tracing::warn!("Section refresh task panicked: {}", err);
                }
            }
        }
    }
}

impl Drop for RefreshDispatcher {
    fn drop(&mut self) {
        // Completions racing with the abort below must not reach the listener.
        self.invalidate();
        self.tasks.abort_all();
    }
}

impl std::fmt::Debug for RefreshDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshDispatcher")
            .field("generation", &self.generation())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}
