//! Question list loading state with stale-response suppression.
//!
//! Fetches are keyed by a monotonically increasing generation. Each
//! committed filter set bumps the generation and the spawned fetch carries
//! its generation along; a completion whose generation no longer matches is
//! discarded without touching state. This keeps completions effectively
//! ordered even when responses arrive out of order, and makes "the last
//! submitted filter set wins" an invariant rather than a race.

use qbs_model::Question;

use crate::error::GuiError;

/// Lifecycle of the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No filter set committed yet; nothing fetched.
    #[default]
    Idle,
    /// A fetch for the latest generation is in flight.
    Loading,
    /// The latest fetch completed with a list (possibly empty).
    Ready,
    /// The latest fetch failed; no question content may render.
    Failed,
}

/// The fetched question list and its loading lifecycle.
#[derive(Debug, Clone, Default)]
pub struct QuestionListState {
    phase: LoadPhase,
    items: Vec<Question>,
    error: Option<GuiError>,
    generation: u64,
}

impl QuestionListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a fetch for a freshly committed filter set is starting.
    ///
    /// Returns the generation the fetch must carry into its completion
    /// message. Any earlier in-flight fetch is superseded from this moment:
    /// its completion will no longer match and will be discarded.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.generation
    }

    /// Apply a fetch completion.
    ///
    /// Returns `false` when the completion was stale (superseded by a newer
    /// fetch) and state was left untouched.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<Question>, GuiError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding superseded question fetch result"
            );
            return false;
        }
        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "Question list loaded");
                self.items = items;
                self.phase = LoadPhase::Ready;
                self.error = None;
            }
            Err(error) => {
                tracing::warn!("Question fetch failed: {}", error);
                self.phase = LoadPhase::Failed;
                self.error = Some(error);
            }
        }
        true
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Items of the most recent successful fetch.
    ///
    /// Only meaningful for display while `phase` is `Ready`; a failed fetch
    /// keeps the previous items in memory but the UI must not render them.
    pub fn items(&self) -> &[Question] {
        &self.items
    }

    pub fn error(&self) -> Option<&GuiError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64) -> Question {
        Question {
            id,
            content: String::new(),
            solution_html: None,
        }
    }

    #[test]
    fn last_issued_fetch_wins_regardless_of_arrival_order() {
        let mut list = QuestionListState::new();
        let first = list.begin_fetch();
        let second = list.begin_fetch();

        // Newer response lands first.
        assert!(list.complete(second, Ok(vec![question(2)])));
        // The older response arrives late and must not overwrite it.
        assert!(!list.complete(first, Ok(vec![question(1)])));

        assert_eq!(list.phase(), LoadPhase::Ready);
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, 2);
    }

    #[test]
    fn superseded_fetch_does_not_end_the_newer_loading_phase() {
        let mut list = QuestionListState::new();
        let first = list.begin_fetch();
        let _second = list.begin_fetch();

        assert!(!list.complete(first, Ok(vec![question(1)])));
        assert_eq!(list.phase(), LoadPhase::Loading);
        assert!(list.items().is_empty());
    }

    #[test]
    fn failure_is_kept_distinct_from_items() {
        let mut list = QuestionListState::new();
        let generation = list.begin_fetch();
        assert!(list.complete(generation, Ok(vec![question(1)])));

        let generation = list.begin_fetch();
        assert!(list.complete(
            generation,
            Err(GuiError::question_load("boom")),
        ));
        assert_eq!(list.phase(), LoadPhase::Failed);
        assert!(list.error().is_some());
    }

    #[test]
    fn empty_list_is_a_valid_result() {
        let mut list = QuestionListState::new();
        let generation = list.begin_fetch();
        assert!(list.complete(generation, Ok(vec![])));
        assert_eq!(list.phase(), LoadPhase::Ready);
        assert!(list.items().is_empty());
        assert!(list.error().is_none());
    }
}
