//! Section capability contract.
//!
//! Each home-screen section view-model implements [`Section`]. The
//! coordinator only ever talks to sections through this trait.

use async_trait::async_trait;

use crate::models::SectionKind;

/// A single independently refreshable, independently visible unit of
/// home-screen content.
///
/// Sections are shared between the coordinator and its refresh tasks as
/// `Arc<dyn Section>`, so state changes go through interior mutability.
/// None of these calls can fail; a section that has nothing to do simply
/// returns.
#[async_trait]
pub trait Section: Send + Sync {
    /// Identifier of this section. Must never change.
    fn kind(&self) -> SectionKind;

    /// Whether the section is enabled by app and feature state.
    ///
    /// May return a different answer on every call.
    fn is_enabled(&self) -> bool;

    /// Whether the section should be part of the visibility set when it is
    /// (re)computed.
    fn should_show(&self) -> bool {
        self.is_enabled()
    }

    /// Mirror the private-browsing flag into the section.
    fn update_privacy_concerned_section(&self, is_private: bool);

    /// Mirror the zero-search flag into the section.
    fn update_zero_search_state(&self, _is_zero_search: bool) {}

    /// Reload the section's data.
    ///
    /// Resolving the future is the completion signal. A future that never
    /// resolves is allowed.
    async fn update_data(&self);
}
