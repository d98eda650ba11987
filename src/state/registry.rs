//! Fixed, ordered catalog of the sections a home screen can show.

use std::sync::Arc;

use crate::error::RegistryError;
use crate::models::SectionKind;
use crate::traits::Section;

/// The registered sections, sorted by [`SectionKind`] priority.
///
/// A registry may hold any subset of the kinds, but each kind at most once,
/// so a kind always resolves to a single instance.
#[derive(Clone)]
pub struct SectionRegistry {
    sections: Vec<Arc<dyn Section>>,
}

impl SectionRegistry {
    /// Build a registry from sections in any order.
    ///
    /// Returns [`RegistryError::DuplicateSection`] if two sections share a
    /// kind.
    pub fn new(sections: Vec<Arc<dyn Section>>) -> Result<Self, RegistryError> {
        let mut sections = sections;
        sections.sort_by_key(|section| section.kind());

        if let Some(pair) = sections
            .windows(2)
            .find(|pair| pair[0].kind() == pair[1].kind())
        {
            return Err(RegistryError::DuplicateSection(pair[0].kind()));
        }

        Ok(Self { sections })
    }

    /// Sections in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Section>> {
        self.sections.iter()
    }

    /// Resolve a kind to its section instance.
    pub fn get(&self, kind: SectionKind) -> Option<&Arc<dyn Section>> {
        self.sections
            .binary_search_by_key(&kind, |section| section.kind())
            .ok()
            .map(|index| &self.sections[index])
    }

    /// Whether a section of this kind is registered.
    pub fn contains(&self, kind: SectionKind) -> bool {
        self.get(kind).is_some()
    }

    /// Registered kinds in registry order.
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Kinds whose `should_show` is currently true, in registry order.
    pub fn compute_initial_visibility(&self) -> Vec<SectionKind> {
        self.sections
            .iter()
            .filter(|section| section.should_show())
            .map(|section| section.kind())
            .collect()
    }
}

impl std::fmt::Debug for SectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
