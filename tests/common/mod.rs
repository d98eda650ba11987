//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::TestHomepage;
//!
//! let home = TestHomepage::builder()
//!     .section(SectionKind::TopSites, true)
//!     .build();
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use homescreen::config::HomepageConfig;
use homescreen::coordinator::HomepageCoordinator;
use homescreen::models::SectionKind;
use homescreen::traits::Section;

/// A coordinator wired to mock sections, a recording listener and a
/// recording telemetry sink.
#[allow(dead_code)]
pub struct TestHomepage {
    pub coordinator: HomepageCoordinator,
    pub sections: Vec<Arc<MockSection>>,
    pub listener: Arc<RecordingListener>,
    pub telemetry: Arc<RecordingTelemetry>,
    pub log: CallLog,
}

#[allow(dead_code)]
impl TestHomepage {
    pub fn builder() -> TestHomepageBuilder {
        TestHomepageBuilder::default()
    }

    /// The mock registered for `kind`.
    pub fn mock(&self, kind: SectionKind) -> &Arc<MockSection> {
        self.sections
            .iter()
            .find(|section| section.kind() == kind)
            .unwrap_or_else(|| panic!("no mock section for {}", kind))
    }

    /// Every call recorded so far, across all sections.
    pub fn log(&self) -> Vec<(SectionKind, SectionCall)> {
        self.log.lock().unwrap().clone()
    }

    /// Drop every call recorded so far (e.g. the initial flag mirroring).
    pub fn clear_calls(&self) {
        self.log.lock().unwrap().clear();
    }
}

/// Builder for [`TestHomepage`].
#[derive(Default)]
pub struct TestHomepageBuilder {
    sections: Vec<(SectionKind, bool, Completion)>,
    config: Option<HomepageConfig>,
}

#[allow(dead_code)]
impl TestHomepageBuilder {
    /// Register a section that completes immediately.
    pub fn section(self, kind: SectionKind, enabled: bool) -> Self {
        self.section_with(kind, enabled, Completion::Immediate)
    }

    pub fn section_with(mut self, kind: SectionKind, enabled: bool, completion: Completion) -> Self {
        self.sections.push((kind, enabled, completion));
        self
    }

    pub fn config(mut self, config: HomepageConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build inside the current tokio runtime.
    pub fn build(self) -> TestHomepage {
        let log = CallLog::default();
        let mocks: Vec<Arc<MockSection>> = self
            .sections
            .into_iter()
            .map(|(kind, enabled, completion)| {
                Arc::new(
                    MockSection::new(kind)
                        .with_enabled(enabled)
                        .with_completion(completion)
                        .with_log(log.clone()),
                )
            })
            .collect();

        let listener = Arc::new(RecordingListener::new());
        let telemetry = Arc::new(RecordingTelemetry::new());
        let sections: Vec<Arc<dyn Section>> = mocks
            .iter()
            .map(|mock| mock.clone() as Arc<dyn Section>)
            .collect();

        let mut coordinator = HomepageCoordinator::builder(sections)
            .with_config(self.config.unwrap_or_default())
            .with_telemetry(telemetry.clone())
            .build()
            .expect("test coordinator should build");
        coordinator.set_listener(listener.clone());

        TestHomepage {
            coordinator,
            sections: mocks,
            listener,
            telemetry,
            log,
        }
    }
}
