//! Filters bar: taxonomy pick lists, facet pick lists, and Apply.
//!
//! The bar edits the draft only; nothing fetches until Apply commits it.
//! While metadata is loading or failed the bar degrades to a status line —
//! a metadata failure gates this region, not the question panels.

use std::fmt;

use iced::widget::{button, checkbox, pick_list, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use qbs_model::Metadata;

use crate::message::{FilterMessage, Message};
use crate::state::{AppState, MetadataState};
use crate::theme::{DANGER, GRAY_500, SPACING_SM, button_primary};

/// One selectable entry in a required-facet pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    id: u64,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Topic entry; `None` widens the search to the whole chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TopicChoice {
    id: Option<u64>,
    label: String,
}

impl fmt::Display for TopicChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Render the filters bar for the current metadata state.
pub fn view_filters(state: &AppState) -> Element<'_, Message> {
    match &state.metadata {
        MetadataState::Loading => text("Loading filters…").size(14).color(GRAY_500).into(),
        MetadataState::Failed(error) => row![
            lucide::circle_alert().size(14).color(DANGER),
            text(error.to_string()).size(14).color(DANGER),
            text(error.suggestion()).size(13).color(GRAY_500),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into(),
        MetadataState::Ready(metadata) => view_filter_pickers(state, metadata),
    }
}

fn view_filter_pickers<'a>(state: &'a AppState, metadata: &'a Metadata) -> Element<'a, Message> {
    let draft = &state.draft;

    let class_options: Vec<Choice> = metadata
        .classes
        .iter()
        .map(|c| Choice {
            id: c.id,
            label: c.display_name(),
        })
        .collect();

    let picked_class = draft.class_id.and_then(|id| metadata.class(id));

    let subject_options: Vec<Choice> = picked_class
        .map(|class| {
            class
                .subjects
                .iter()
                .map(|s| Choice {
                    id: s.id,
                    label: s.display_name(),
                })
                .collect()
        })
        .unwrap_or_default();

    let picked_subject = picked_class
        .zip(draft.subject_id)
        .and_then(|(class, id)| class.subject(id));

    let chapter_options: Vec<Choice> = picked_subject
        .map(|subject| {
            subject
                .chapters
                .iter()
                .map(|c| Choice {
                    id: c.id,
                    label: c.display_name(),
                })
                .collect()
        })
        .unwrap_or_default();

    let picked_chapter = picked_subject
        .zip(draft.chapter_id)
        .and_then(|(subject, id)| subject.chapter(id));

    let mut topic_options = vec![TopicChoice {
        id: None,
        label: "Whole chapter".to_string(),
    }];
    if let Some(chapter) = picked_chapter {
        topic_options.extend(chapter.topics.iter().map(|t| TopicChoice {
            id: Some(t.id),
            label: t.display_name(),
        }));
    }

    let level_options: Vec<Choice> = metadata
        .question_levels
        .iter()
        .map(|l| Choice {
            id: l.id,
            label: l.display_name(),
        })
        .collect();

    let type_options: Vec<Choice> = metadata
        .question_types
        .iter()
        .map(|t| Choice {
            id: t.id,
            label: t.display_name(),
        })
        .collect();

    let selected = |options: &[Choice], id: Option<u64>| -> Option<Choice> {
        id.and_then(|id| options.iter().find(|c| c.id == id).cloned())
    };

    let selected_class = selected(&class_options, draft.class_id);
    let selected_subject = selected(&subject_options, draft.subject_id);
    let selected_chapter = selected(&chapter_options, draft.chapter_id);
    let selected_topic = topic_options
        .iter()
        .find(|c| c.id == draft.topic_id)
        .cloned();
    let selected_level = selected(&level_options, draft.question_level_id);
    let selected_type = selected(&type_options, draft.question_type_id);

    let apply = button(
        row![lucide::check().size(14), text("Apply").size(14)]
            .spacing(SPACING_SM / 2.0)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(
        draft
            .is_complete()
            .then_some(Message::Filters(FilterMessage::ApplyPressed)),
    )
    .padding([6.0, 16.0])
    .style(button_primary);

    row![
        pick_list(class_options, selected_class, |c: Choice| {
            Message::Filters(FilterMessage::ClassPicked(c.id))
        })
        .placeholder("Class")
        .text_size(13),
        pick_list(subject_options, selected_subject, |c: Choice| {
            Message::Filters(FilterMessage::SubjectPicked(c.id))
        })
        .placeholder("Subject")
        .text_size(13),
        pick_list(chapter_options, selected_chapter, |c: Choice| {
            Message::Filters(FilterMessage::ChapterPicked(c.id))
        })
        .placeholder("Chapter")
        .text_size(13),
        pick_list(topic_options, selected_topic, |c: TopicChoice| {
            Message::Filters(FilterMessage::TopicPicked(c.id))
        })
        .placeholder("Topic")
        .text_size(13),
        pick_list(level_options, selected_level, |c: Choice| {
            Message::Filters(FilterMessage::LevelPicked(c.id))
        })
        .placeholder("Level")
        .text_size(13),
        pick_list(type_options, selected_type, |c: Choice| {
            Message::Filters(FilterMessage::TypePicked(c.id))
        })
        .placeholder("Type")
        .text_size(13),
        checkbox("Hide used", draft.remove_used_questions)
            .on_toggle(|enabled| Message::Filters(FilterMessage::RemoveUsedToggled(enabled)))
            .text_size(13),
        apply,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .wrap()
    .into()
}
