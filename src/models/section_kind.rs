//! Section kinds and their registry priority.
//!
//! The set of sections a home screen can show is closed. Declaration order
//! is the priority order: it decides both display order and the sort key
//! used when the visibility set is mutated incrementally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a home-screen section.
///
/// `Ord` follows declaration order, so comparing two kinds compares their
/// registry priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Logo and wordmark header
    LogoHeader,
    /// Promotional or onboarding message card
    MessageCard,
    /// Pinned and frequently visited sites
    TopSites,
    /// Recently active tabs and synced tabs
    JumpBackIn,
    /// Bookmarks and reading list items saved recently
    RecentlySaved,
    /// Grouped browsing history highlights
    HistoryHighlights,
    /// Recommended stories
    Pocket,
    /// Footer button that opens home settings
    CustomizeHome,
}

impl SectionKind {
    /// Every kind, in priority order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::LogoHeader,
        SectionKind::MessageCard,
        SectionKind::TopSites,
        SectionKind::JumpBackIn,
        SectionKind::RecentlySaved,
        SectionKind::HistoryHighlights,
        SectionKind::Pocket,
        SectionKind::CustomizeHome,
    ];

    /// Zero-based registry priority. Lower values display first.
    pub fn priority(self) -> usize {
        self as usize
    }

    /// Stable identifier used in logs and telemetry.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::LogoHeader => "logo_header",
            SectionKind::MessageCard => "message_card",
            SectionKind::TopSites => "top_sites",
            SectionKind::JumpBackIn => "jump_back_in",
            SectionKind::RecentlySaved => "recently_saved",
            SectionKind::HistoryHighlights => "history_highlights",
            SectionKind::Pocket => "pocket",
            SectionKind::CustomizeHome => "customize_home",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
