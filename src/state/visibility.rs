//! The priority-ordered subset of sections currently shown.

use crate::models::SectionKind;

/// Ordered sequence of shown section kinds.
///
/// Invariants, held after every call:
/// - no kind appears twice
/// - kinds are sorted by ascending [`SectionKind::priority`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    shown: Vec<SectionKind>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary kinds, dropping duplicates.
    pub fn from_kinds(kinds: impl IntoIterator<Item = SectionKind>) -> Self {
        let mut set = Self::new();
        set.reset(kinds);
        set
    }

    /// Replace the whole set.
    pub fn reset(&mut self, kinds: impl IntoIterator<Item = SectionKind>) {
        self.shown = kinds.into_iter().collect();
        self.shown.sort();
        self.shown.dedup();
    }

    /// Insert `kind` at its priority position.
    ///
    /// Returns `false` (and leaves the set alone) if it was already shown.
    pub fn add(&mut self, kind: SectionKind) -> bool {
        if self.contains(kind) {
            return false;
        }

        let index = self
            .shown
            .iter()
            .filter(|shown| shown.priority() < kind.priority())
            .count();

        if index == self.shown.len() {
            self.shown.push(kind);
        } else {
            self.shown.insert(index, kind);
        }
        true
    }

    /// Remove `kind`. Returns `false` if it was not shown.
    pub fn remove(&mut self, kind: SectionKind) -> bool {
        match self.shown.iter().position(|shown| *shown == kind) {
            Some(index) => {
                self.shown.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.shown.contains(&kind)
    }

    /// Kind at a display position, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<SectionKind> {
        self.shown.get(index).copied()
    }

    /// Display position of a shown kind.
    pub fn index_of(&self, kind: SectionKind) -> Option<usize> {
        self.shown.iter().position(|shown| *shown == kind)
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn as_slice(&self) -> &[SectionKind] {
        &self.shown
    }
}
