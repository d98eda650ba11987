//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `homescreen::adapters::mock` plus shared
//! timing constants.

#[allow(unused_imports)]
pub use homescreen::adapters::mock::{
    CallLog, Completion, ListenerEvent, MockSection, RecordingListener, RecordingTelemetry,
    SectionCall,
};

use std::time::Duration;

/// Upper bound for waiting on something that is expected to happen.
#[allow(dead_code)]
pub const EXPECT_WITHIN: Duration = Duration::from_secs(2);

/// How long to watch for something that is expected not to happen.
#[allow(dead_code)]
pub const QUIET_PERIOD: Duration = Duration::from_millis(50);
