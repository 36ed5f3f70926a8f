//! Draft filter selections behind the filters bar.
//!
//! The draft is UI state only: the user edits it freely without triggering
//! any fetch. Committing happens on Apply, which builds a fresh
//! [`FilterSet`] and replaces the current one wholesale. Picks cascade down
//! the hierarchy so the draft always points at nodes that exist under the
//! picked ancestors.

use qbs_model::{FilterSet, Metadata};

/// In-progress filter selections, one per facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub class_id: Option<u64>,
    pub subject_id: Option<u64>,
    pub chapter_id: Option<u64>,
    pub topic_id: Option<u64>,
    pub question_level_id: Option<u64>,
    pub question_type_id: Option<u64>,
    pub remove_used_questions: bool,
}

impl FilterDraft {
    /// Draft mirroring an already-committed filter set.
    pub fn from_filters(filters: &FilterSet) -> Self {
        Self {
            class_id: Some(filters.class_id),
            subject_id: Some(filters.subject_id),
            chapter_id: Some(filters.chapter_id),
            topic_id: filters.topic_id,
            question_level_id: Some(filters.question_level_id),
            question_type_id: Some(filters.question_type_id),
            remove_used_questions: filters.remove_used_questions,
        }
    }

    /// Empty draft for a taxonomy too sparse to produce defaults.
    pub fn empty() -> Self {
        Self {
            remove_used_questions: true,
            ..Self::default()
        }
    }

    /// Pick a class; dependent facets reset to the class's first options.
    pub fn pick_class(&mut self, metadata: &Metadata, class_id: u64) {
        self.class_id = Some(class_id);
        let first_subject = metadata
            .class(class_id)
            .and_then(|class| class.subjects.first())
            .map(|subject| subject.id);
        match first_subject {
            Some(subject_id) => self.pick_subject(metadata, subject_id),
            None => {
                self.subject_id = None;
                self.chapter_id = None;
                self.topic_id = None;
            }
        }
    }

    /// Pick a subject under the current class; chapter and topic cascade.
    pub fn pick_subject(&mut self, metadata: &Metadata, subject_id: u64) {
        self.subject_id = Some(subject_id);
        let first_chapter = self
            .class_id
            .and_then(|id| metadata.class(id))
            .and_then(|class| class.subject(subject_id))
            .and_then(|subject| subject.chapters.first())
            .map(|chapter| chapter.id);
        match first_chapter {
            Some(chapter_id) => self.pick_chapter(metadata, chapter_id),
            None => {
                self.chapter_id = None;
                self.topic_id = None;
            }
        }
    }

    /// Pick a chapter under the current subject; topic resets to its first.
    pub fn pick_chapter(&mut self, metadata: &Metadata, chapter_id: u64) {
        self.chapter_id = Some(chapter_id);
        self.topic_id = self
            .class_id
            .and_then(|id| metadata.class(id))
            .zip(self.subject_id)
            .and_then(|(class, subject_id)| class.subject(subject_id))
            .and_then(|subject| subject.chapter(chapter_id))
            .and_then(|chapter| chapter.topics.first())
            .map(|topic| topic.id);
    }

    /// Pick a topic, or `None` to search the whole chapter.
    pub fn pick_topic(&mut self, topic_id: Option<u64>) {
        self.topic_id = topic_id;
    }

    /// True when every required facet has a pick.
    pub fn is_complete(&self) -> bool {
        self.class_id.is_some()
            && self.subject_id.is_some()
            && self.chapter_id.is_some()
            && self.question_level_id.is_some()
            && self.question_type_id.is_some()
    }

    /// Build the filter set this draft describes, if complete.
    pub fn to_filter_set(&self) -> Option<FilterSet> {
        Some(FilterSet {
            class_id: self.class_id?,
            subject_id: self.subject_id?,
            chapter_id: self.chapter_id?,
            topic_id: self.topic_id,
            question_level_id: self.question_level_id?,
            question_type_id: self.question_type_id?,
            remove_used_questions: self.remove_used_questions,
        })
    }
}
