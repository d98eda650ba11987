//! Home-screen section coordinator.
//!
//! [`HomepageCoordinator`] is the view model the host drives: it owns the
//! section registry and the visibility set, fans out data refreshes,
//! mirrors the private and zero-search flags into every section, and gates
//! view telemetry on appearance.
//!
//! The coordinator has a single owner and takes `&mut self` for anything
//! that changes state. Only refresh completions run elsewhere; they reach
//! the listener through a shared [`ListenerSlot`] and are dropped once
//! their section stops being shown or the refreshes are cancelled.
//!
//! # Example
//!
//! ```ignore
//! use homescreen::coordinator::HomepageCoordinator;
//!
//! let mut coordinator = HomepageCoordinator::builder(sections)
//!     .with_telemetry(telemetry)
//!     .build()?;
//! coordinator.set_listener(surface.clone());
//! coordinator.on_appear();
//! coordinator.refresh_all();
//! ```

mod listener;
mod refresh;
mod requests;

pub use listener::ListenerSlot;
pub use refresh::RefreshDispatcher;
pub use requests::VisibilityRequester;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::HomepageConfig;
use crate::error::HomepageResult;
use crate::models::SectionKind;
use crate::state::{AppearanceGate, SectionRegistry, VisibilitySet};
use crate::telemetry::{TelemetryEvent, TracingTelemetry, ViewOrigin};
use crate::traits::{HomepageListener, Section, TelemetrySink};

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`HomepageCoordinator`].
pub struct HomepageCoordinatorBuilder {
    sections: Vec<Arc<dyn Section>>,
    config: HomepageConfig,
    telemetry: Option<Arc<dyn TelemetrySink>>,
    runtime: Option<Handle>,
}

impl HomepageCoordinatorBuilder {
    pub fn with_config(mut self, config: HomepageConfig) -> Self {
        self.config = config;
        self
    }

    /// Sink for view telemetry. Defaults to [`TracingTelemetry`].
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(sink);
        self
    }

    /// Runtime refresh tasks are spawned on. Defaults to the current one.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Validate the sections and build the coordinator.
    ///
    /// The initial flags are mirrored into every section before the
    /// initial visibility is computed, so `should_show` can depend on them.
    pub fn build(self) -> HomepageResult<HomepageCoordinator> {
        let registry = SectionRegistry::new(self.sections)?;
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current()?,
        };

        let telemetry = if self.config.telemetry_enabled {
            Some(
                self.telemetry
                    .unwrap_or_else(|| Arc::new(TracingTelemetry) as Arc<dyn TelemetrySink>),
            )
        } else {
            None
        };

        let listener = ListenerSlot::new();
        let (requests_tx, requests_rx) = mpsc::unbounded_channel();

        let mut coordinator = HomepageCoordinator {
            registry,
            visibility: VisibilitySet::new(),
            appearance: AppearanceGate::new(),
            is_private: self.config.is_private,
            is_zero_search: self.config.is_zero_search,
            telemetry,
            refresh: RefreshDispatcher::new(runtime, listener.clone()),
            listener,
            requests_tx,
            requests_rx,
        };

        coordinator.propagate_privacy();
        coordinator.propagate_zero_search();
        let initial = coordinator.compute_initial_visibility();
        coordinator.visibility.reset(initial);

        tracing::info!(
            registered = coordinator.registry.len(),
            shown = ?coordinator.visibility.as_slice(),
            "Home screen coordinator ready"
        );

        Ok(coordinator)
    }
}

// ============================================================================
// HomepageCoordinator
// ============================================================================

/// Decides which sections are shown, in what order, and when they reload.
pub struct HomepageCoordinator {
    registry: SectionRegistry,
    visibility: VisibilitySet,
    appearance: AppearanceGate,
    is_private: bool,
    is_zero_search: bool,
    telemetry: Option<Arc<dyn TelemetrySink>>,
    refresh: RefreshDispatcher,
    listener: ListenerSlot,
    requests_tx: mpsc::UnboundedSender<SectionKind>,
    requests_rx: mpsc::UnboundedReceiver<SectionKind>,
}

impl HomepageCoordinator {
    /// Start building a coordinator over `sections`, in any order.
    pub fn builder(sections: Vec<Arc<dyn Section>>) -> HomepageCoordinatorBuilder {
        HomepageCoordinatorBuilder {
            sections,
            config: HomepageConfig::default(),
            telemetry: None,
            runtime: None,
        }
    }

    // ------------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------------

    /// Kinds whose `should_show` is true right now, in registry order.
    ///
    /// Pure query; the shown set is not touched.
    pub fn compute_initial_visibility(&self) -> Vec<SectionKind> {
        self.registry.compute_initial_visibility()
    }

    /// Recompute the shown set from scratch and redraw everything.
    ///
    /// In-flight refreshes of sections that are no longer shown will not
    /// notify when they complete. Sections that stay shown keep theirs.
    pub fn update_enabled_sections(&mut self) {
        let previous = self.visibility.as_slice().to_vec();
        let shown = self.compute_initial_visibility();
        self.visibility.reset(shown);

        let hidden: Vec<SectionKind> = previous
            .into_iter()
            .filter(|kind| !self.visibility.contains(*kind))
            .collect();
        for kind in &hidden {
            self.refresh.invalidate_section(*kind);
        }

        tracing::info!(
            shown = ?self.visibility.as_slice(),
            ?hidden,
            "Recomputed shown sections"
        );
        self.listener.all_need_reload();
    }

    /// Insert `kind` at its priority position.
    ///
    /// Returns `false` if it was already shown or has no registered section.
    pub fn add_shown(&mut self, kind: SectionKind) -> bool {
        if !self.registry.contains(kind) {
            tracing::warn!(section = %kind, "Ignoring add for unregistered section");
            return false;
        }
        self.visibility.add(kind)
    }

    /// Remove `kind` from the shown set. Returns `false` if it was not shown.
    ///
    /// Its in-flight refreshes will not notify.
    pub fn remove_shown(&mut self, kind: SectionKind) -> bool {
        if !self.visibility.remove(kind) {
            return false;
        }
        self.refresh.invalidate_section(kind);
        true
    }

    pub fn shown_sections(&self) -> &[SectionKind] {
        self.visibility.as_slice()
    }

    pub fn shown_count(&self) -> usize {
        self.visibility.len()
    }

    /// Display position of a shown kind.
    pub fn display_index_of(&self, kind: SectionKind) -> Option<usize> {
        self.visibility.index_of(kind)
    }

    /// Section shown at `index`, or `None` when `index` is out of range.
    pub fn section_at(&self, index: usize) -> Option<Arc<dyn Section>> {
        let kind = self.visibility.get(index)?;
        self.registry.get(kind).cloned()
    }

    /// Registered section of this kind, shown or not.
    pub fn section(&self, kind: SectionKind) -> Option<Arc<dyn Section>> {
        self.registry.get(kind).cloned()
    }

    /// A section asked to appear.
    ///
    /// If it is not shown yet it is inserted and the whole view reloads,
    /// since an insertion shifts every later section. Returns whether the
    /// shown set changed.
    pub fn on_section_wants_visibility_change(&mut self, kind: SectionKind) -> bool {
        if !self.add_shown(kind) {
            return false;
        }

        tracing::info!(section = %kind, "Section became visible");
        self.listener.all_need_reload();
        true
    }

    /// Handle sections use to ask to appear from any task.
    pub fn visibility_requester(&self) -> VisibilityRequester {
        VisibilityRequester::new(self.requests_tx.clone())
    }

    /// Apply every queued visibility request in arrival order.
    ///
    /// Returns how many of them changed the shown set.
    pub fn process_visibility_requests(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(kind) = self.requests_rx.try_recv() {
            if self.on_section_wants_visibility_change(kind) {
                changed += 1;
            }
        }
        changed
    }

    // ------------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------------

    /// Refresh every enabled section, dispatching in registry order.
    ///
    /// Returns the number of refreshes started. Does not wait for any of
    /// them.
    pub fn refresh_all(&mut self) -> usize {
        let enabled: Vec<Arc<dyn Section>> = self
            .registry
            .iter()
            .filter(|section| section.is_enabled())
            .cloned()
            .collect();

        let count = enabled.len();
        for section in enabled {
            self.refresh.dispatch(section);
        }

        tracing::debug!(dispatched = count, "Refreshing enabled sections");
        count
    }

    /// Refresh one section regardless of whether it is enabled.
    ///
    /// Returns `false` if no section of this kind is registered.
    pub fn refresh_one(&mut self, kind: SectionKind) -> bool {
        match self.registry.get(kind).cloned() {
            Some(section) => {
                self.refresh.dispatch(section);
                true
            }
            None => {
                tracing::warn!(section = %kind, "Ignoring refresh for unregistered section");
                false
            }
        }
    }

    /// Abort all in-flight refreshes.
    ///
    /// None of them will notify, apart from a completion already past its
    /// staleness check on another worker thread.
    pub fn cancel_refreshes(&mut self) {
        self.refresh.cancel_all();
    }

    pub fn in_flight_refreshes(&mut self) -> usize {
        self.refresh.in_flight()
    }

    // ------------------------------------------------------------------------
    // Flags
    // ------------------------------------------------------------------------

    /// Set the private-browsing flag and mirror it into every section.
    pub fn set_private(&mut self, is_private: bool) {
        self.is_private = is_private;
        self.propagate_privacy();
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Set the zero-search flag and mirror it into every section.
    pub fn set_zero_search(&mut self, is_zero_search: bool) {
        self.is_zero_search = is_zero_search;
        self.propagate_zero_search();
    }

    pub fn is_zero_search(&self) -> bool {
        self.is_zero_search
    }

    fn propagate_privacy(&self) {
        for section in self.registry.iter() {
            section.update_privacy_concerned_section(self.is_private);
        }
    }

    fn propagate_zero_search(&self) {
        for section in self.registry.iter() {
            section.update_zero_search_state(self.is_zero_search);
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// The view came on screen.
    ///
    /// The first call of an appearance cycle records the exposure and
    /// view-opened events; later calls do nothing. Returns whether events
    /// were recorded.
    pub fn on_appear(&mut self) -> bool {
        if !self.appearance.appear() {
            return false;
        }

        let origin = ViewOrigin::from_zero_search(self.is_zero_search);
        tracing::info!(?origin, "Home screen appeared");

        if let Some(telemetry) = &self.telemetry {
            telemetry.record(TelemetryEvent::feature_exposure());
            telemetry.record(TelemetryEvent::view_opened(origin));
        }
        true
    }

    /// The view left the screen. Ends the appearance cycle.
    pub fn on_disappear(&mut self) {
        self.appearance.disappear();
    }

    pub fn is_appeared(&self) -> bool {
        self.appearance.is_appeared()
    }

    // ------------------------------------------------------------------------
    // Listener
    // ------------------------------------------------------------------------

    /// Install the rendering surface, replacing any previous listener.
    ///
    /// Only a weak reference is kept, so the caller must hold on to
    /// `listener` for as long as it should receive notifications.
    pub fn set_listener(&mut self, listener: Arc<dyn HomepageListener>) {
        self.listener.set(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener.clear();
    }
}

impl std::fmt::Debug for HomepageCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomepageCoordinator")
            .field("registry", &self.registry)
            .field("visibility", &self.visibility)
            .field("appearance", &self.appearance)
            .field("is_private", &self.is_private)
            .field("is_zero_search", &self.is_zero_search)
            .field("refresh", &self.refresh)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        CallLog, Completion, ListenerEvent, MockSection, RecordingListener, RecordingTelemetry,
        SectionCall,
    };
    use crate::error::{HomepageError, RegistryError};
    use std::time::Duration;

    fn mocks(specs: &[(SectionKind, bool)]) -> (Vec<Arc<MockSection>>, Vec<Arc<dyn Section>>) {
        let log = CallLog::default();
        let mocks: Vec<Arc<MockSection>> = specs
            .iter()
            .map(|(kind, enabled)| {
                Arc::new(
                    MockSection::new(*kind)
                        .with_enabled(*enabled)
                        .with_log(log.clone()),
                )
            })
            .collect();
        let sections = mocks
            .iter()
            .map(|mock| mock.clone() as Arc<dyn Section>)
            .collect();
        (mocks, sections)
    }

    #[tokio::test]
    async fn test_build_computes_initial_visibility() {
        let (_, sections) = mocks(&[
            (SectionKind::Pocket, true),
            (SectionKind::LogoHeader, true),
            (SectionKind::TopSites, false),
        ]);
        let coordinator = HomepageCoordinator::builder(sections).build().unwrap();

        assert_eq!(
            coordinator.shown_sections(),
            &[SectionKind::LogoHeader, SectionKind::Pocket]
        );
    }

    #[tokio::test]
    async fn test_build_rejects_duplicates() {
        let (_, sections) = mocks(&[(SectionKind::Pocket, true), (SectionKind::Pocket, false)]);
        let err = HomepageCoordinator::builder(sections).build().unwrap_err();

        assert!(matches!(
            err,
            HomepageError::Registry(RegistryError::DuplicateSection(SectionKind::Pocket))
        ));
    }

    #[tokio::test]
    async fn test_build_ignores_channel_capacity_with_custom_sink() {
        let telemetry = Arc::new(RecordingTelemetry::new());
        let mut coordinator = HomepageCoordinator::builder(Vec::new())
            .with_config(HomepageConfig::default().with_telemetry_channel_capacity(0))
            .with_telemetry(telemetry.clone())
            .build()
            .unwrap();

        assert!(coordinator.on_appear());
        assert_eq!(telemetry.events().len(), 2);
    }

    #[test]
    fn test_build_outside_runtime_fails() {
        let err = HomepageCoordinator::builder(Vec::new()).build().unwrap_err();
        assert!(matches!(err, HomepageError::Runtime(_)));
    }

    #[test]
    fn test_build_with_explicit_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let (_, sections) = mocks(&[(SectionKind::TopSites, true)]);

        let coordinator = HomepageCoordinator::builder(sections)
            .with_runtime(runtime.handle().clone())
            .build()
            .unwrap();
        assert_eq!(coordinator.shown_count(), 1);
    }

    #[tokio::test]
    async fn test_build_mirrors_initial_flags_before_visibility() {
        let (mocks, sections) = mocks(&[(SectionKind::JumpBackIn, true)]);
        let _coordinator = HomepageCoordinator::builder(sections)
            .with_config(HomepageConfig::default().with_private(true))
            .build()
            .unwrap();

        assert_eq!(
            mocks[0].calls(),
            vec![SectionCall::Privacy(true), SectionCall::ZeroSearch(false)]
        );
        assert!(mocks[0].is_private());
    }

    #[tokio::test]
    async fn test_add_shown_ignores_unregistered_kind() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, true)]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();

        assert!(!coordinator.add_shown(SectionKind::Pocket));
        assert_eq!(coordinator.shown_sections(), &[SectionKind::TopSites]);
    }

    #[tokio::test]
    async fn test_section_at_resolves_instances() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, true), (SectionKind::Pocket, true)]);
        let coordinator = HomepageCoordinator::builder(sections).build().unwrap();

        assert_eq!(
            coordinator.section_at(1).map(|s| s.kind()),
            Some(SectionKind::Pocket)
        );
        assert!(coordinator.section_at(2).is_none());
        assert!(coordinator.section_at(usize::MAX).is_none());
        assert_eq!(coordinator.display_index_of(SectionKind::TopSites), Some(0));
    }

    #[tokio::test]
    async fn test_self_report_inserts_and_reloads_all() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, true), (SectionKind::Pocket, false)]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let listener = Arc::new(RecordingListener::new());
        coordinator.set_listener(listener.clone());

        assert!(coordinator.on_section_wants_visibility_change(SectionKind::Pocket));
        assert!(!coordinator.on_section_wants_visibility_change(SectionKind::Pocket));

        assert_eq!(
            coordinator.shown_sections(),
            &[SectionKind::TopSites, SectionKind::Pocket]
        );
        assert_eq!(listener.events(), vec![ListenerEvent::AllReload]);
    }

    #[tokio::test]
    async fn test_visibility_requests_are_applied_in_order() {
        let (_, sections) = mocks(&[
            (SectionKind::LogoHeader, false),
            (SectionKind::TopSites, true),
            (SectionKind::Pocket, false),
        ]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let listener = Arc::new(RecordingListener::new());
        coordinator.set_listener(listener.clone());

        let requester = coordinator.visibility_requester();
        let remote = requester.clone();
        tokio::spawn(async move {
            remote.request_show(SectionKind::Pocket);
        })
        .await
        .unwrap();
        requester.request_show(SectionKind::LogoHeader);
        requester.request_show(SectionKind::TopSites);

        assert_eq!(coordinator.process_visibility_requests(), 2);
        assert_eq!(
            coordinator.shown_sections(),
            &[
                SectionKind::LogoHeader,
                SectionKind::TopSites,
                SectionKind::Pocket
            ]
        );
        assert_eq!(listener.all_reload_count(), 2);
        assert_eq!(coordinator.process_visibility_requests(), 0);
    }

    #[tokio::test]
    async fn test_requester_outlives_coordinator() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, true)]);
        let coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let requester = coordinator.visibility_requester();
        drop(coordinator);

        assert!(!requester.request_show(SectionKind::TopSites));
    }

    #[tokio::test]
    async fn test_update_enabled_sections_recomputes_and_reloads() {
        let (mocks, sections) = mocks(&[
            (SectionKind::LogoHeader, true),
            (SectionKind::TopSites, false),
        ]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let listener = Arc::new(RecordingListener::new());
        coordinator.set_listener(listener.clone());

        mocks[0].set_enabled(false);
        mocks[1].set_enabled(true);
        coordinator.update_enabled_sections();

        assert_eq!(coordinator.shown_sections(), &[SectionKind::TopSites]);
        assert_eq!(listener.events(), vec![ListenerEvent::AllReload]);
    }

    #[tokio::test]
    async fn test_set_listener_accepts_trait_object() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, false)]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let recording = Arc::new(RecordingListener::new());
        let listener: Arc<dyn HomepageListener> = recording.clone();

        coordinator.set_listener(listener);
        coordinator.update_enabled_sections();

        assert_eq!(recording.events(), vec![ListenerEvent::AllReload]);
    }

    #[tokio::test]
    async fn test_remove_shown_silences_its_pending_refresh() {
        let log = CallLog::default();
        let pocket = Arc::new(
            MockSection::new(SectionKind::Pocket)
                .with_completion(Completion::Gated)
                .with_log(log),
        );
        let mut coordinator = HomepageCoordinator::builder(vec![pocket.clone() as Arc<dyn Section>])
            .build()
            .unwrap();
        let listener = Arc::new(RecordingListener::new());
        coordinator.set_listener(listener.clone());

        coordinator.refresh_all();
        assert!(coordinator.remove_shown(SectionKind::Pocket));
        assert!(!coordinator.remove_shown(SectionKind::Pocket));
        pocket.release(1);

        assert!(pocket.wait_for_finished(1, Duration::from_secs(2)).await);
        assert!(!listener.wait_for_events(1, Duration::from_millis(50)).await);
    }

    #[tokio::test]
    async fn test_refresh_one_unregistered_kind() {
        let (_, sections) = mocks(&[(SectionKind::TopSites, true)]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();

        assert!(!coordinator.refresh_one(SectionKind::Pocket));
        assert_eq!(coordinator.in_flight_refreshes(), 0);
    }

    #[tokio::test]
    async fn test_refresh_one_ignores_enabled_flag() {
        let (mocks, sections) = mocks(&[(SectionKind::Pocket, false)]);
        let mut coordinator = HomepageCoordinator::builder(sections).build().unwrap();
        let listener = Arc::new(RecordingListener::new());
        coordinator.set_listener(listener.clone());

        assert!(coordinator.refresh_one(SectionKind::Pocket));
        assert!(listener.wait_for_events(1, Duration::from_secs(2)).await);
        assert_eq!(mocks[0].update_count(), 1);
    }

    #[tokio::test]
    async fn test_disabled_telemetry_records_nothing() {
        let telemetry = Arc::new(RecordingTelemetry::new());
        let mut coordinator = HomepageCoordinator::builder(Vec::new())
            .with_config(HomepageConfig::default().with_telemetry_enabled(false))
            .with_telemetry(telemetry.clone())
            .build()
            .unwrap();

        assert!(coordinator.on_appear());
        assert!(telemetry.events().is_empty());
    }
}
