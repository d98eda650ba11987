//! Outward notifications to the rendering surface.

use crate::models::SectionKind;

/// Receiver of reload requests, implemented by whatever draws the home
/// screen.
///
/// The coordinator holds its listener weakly and may call it from a
/// refresh task, hence `Send + Sync`.
pub trait HomepageListener: Send + Sync {
    /// One section finished refreshing and should be redrawn.
    fn section_needs_reload(&self, kind: SectionKind);

    /// The shown sections changed structurally; redraw everything.
    fn all_need_reload(&self);
}
