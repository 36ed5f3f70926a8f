//! Selection and hover tracking over the fetched question list.
//!
//! Both axes are transient UI state, independent of the list itself: a new
//! fetch result does NOT clear them. A selection or hover referencing an id
//! that is no longer in the list simply stops mattering — the derived
//! current question falls back to the first item of whatever list is live.

use std::collections::BTreeSet;

use qbs_model::Question;

/// Multi-selection plus at-most-one hovered question.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    selected_ids: BTreeSet<u64>,
    hovered: Option<Question>,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection.
    pub fn select(&mut self, ids: BTreeSet<u64>) {
        self.selected_ids = ids;
    }

    /// Replace the hovered question (or clear it with `None`).
    ///
    /// The full item is kept, not just its id: the hovered question is
    /// displayable even while a newer list no longer contains it.
    pub fn hover(&mut self, question: Option<Question>) {
        self.hovered = question;
    }

    pub fn selected_ids(&self) -> &BTreeSet<u64> {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn hovered(&self) -> Option<&Question> {
        self.hovered.as_ref()
    }

    /// The selection with `id`'s membership flipped, as a fresh set.
    ///
    /// Callers pass the result back through [`BrowseState::select`]; the
    /// tracker itself only ever replaces the selection wholesale.
    pub fn toggled(&self, id: u64) -> BTreeSet<u64> {
        let mut ids = self.selected_ids.clone();
        if !ids.insert(id) {
            ids.remove(&id);
        }
        ids
    }

    /// Resolve the single question currently on display.
    ///
    /// Hover wins; otherwise the first item of the live list; otherwise
    /// nothing. Derived on every call, never stored.
    pub fn current<'a>(&'a self, items: &'a [Question]) -> Option<&'a Question> {
        self.hovered.as_ref().or_else(|| items.first())
    }
}
