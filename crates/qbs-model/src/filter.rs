use serde::{Deserialize, Serialize};

use crate::taxonomy::{Chapter, Class, Metadata, Subject};

/// The fully-specified query parameters sent to the question-list endpoint.
///
/// A filter set is a value object: it is created whole (from taxonomy
/// defaults or a user submission) and replaced whole — never mutated field
/// by field. Replacing the current filter set is the one and only trigger
/// for re-fetching the question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    pub class_id: u64,
    pub subject_id: u64,
    pub chapter_id: u64,
    /// Optional: chapters may have no topics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<u64>,
    pub question_level_id: u64,
    pub question_type_id: u64,
    pub remove_used_questions: bool,
}

impl FilterSet {
    /// Derive the default filter set from a taxonomy snapshot.
    ///
    /// Walks the class sequence in order and picks the first class whose
    /// chain is complete (a subject that has a chapter); sparse classes are
    /// skipped rather than producing a partially-defined filter set. From
    /// that chain: first subject, first chapter, first topic if the chapter
    /// has any. Difficulty and type come from the snapshot's first level and
    /// first type. `remove_used_questions` defaults to on.
    ///
    /// Returns `None` when no complete chain exists, or when the snapshot
    /// has no question levels or no question types.
    pub fn defaults_from(metadata: &Metadata) -> Option<Self> {
        let (class, subject, chapter) = first_complete_chain(metadata)?;
        let level = metadata.question_levels.first()?;
        let kind = metadata.question_types.first()?;

        Some(Self {
            class_id: class.id,
            subject_id: subject.id,
            chapter_id: chapter.id,
            topic_id: chapter.topics.first().map(|t| t.id),
            question_level_id: level.id,
            question_type_id: kind.id,
            remove_used_questions: true,
        })
    }
}

/// First class → subject → chapter chain where every link exists.
fn first_complete_chain(metadata: &Metadata) -> Option<(&Class, &Subject, &Chapter)> {
    metadata.classes.iter().find_map(|class| {
        class.subjects.iter().find_map(|subject| {
            subject
                .chapters
                .first()
                .map(|chapter| (class, subject, chapter))
        })
    })
}
