//! Filters bar message handler.
//!
//! Draft edits cascade through the taxonomy but never touch the committed
//! filter set. Only `ApplyPressed` commits: it builds a fresh filter set
//! from the draft and replaces the current one wholesale, which is the one
//! and only site that starts a question fetch besides the automatic
//! defaults adoption in [`super::loaders`].

use iced::Task;

use qbs_model::FilterSet;

use super::MessageHandler;
use crate::error::GuiError;
use crate::message::{FilterMessage, Message};
use crate::service;
use crate::state::AppState;

/// Handler for filters bar messages.
pub struct FiltersHandler;

impl MessageHandler<FilterMessage> for FiltersHandler {
    fn handle(&self, state: &mut AppState, msg: FilterMessage) -> Task<Message> {
        match msg {
            FilterMessage::ClassPicked(id) => {
                if let Some(metadata) = state.metadata.metadata() {
                    state.draft.pick_class(metadata, id);
                }
                Task::none()
            }

            FilterMessage::SubjectPicked(id) => {
                if let Some(metadata) = state.metadata.metadata() {
                    state.draft.pick_subject(metadata, id);
                }
                Task::none()
            }

            FilterMessage::ChapterPicked(id) => {
                if let Some(metadata) = state.metadata.metadata() {
                    state.draft.pick_chapter(metadata, id);
                }
                Task::none()
            }

            FilterMessage::TopicPicked(id) => {
                state.draft.pick_topic(id);
                Task::none()
            }

            FilterMessage::LevelPicked(id) => {
                state.draft.question_level_id = Some(id);
                Task::none()
            }

            FilterMessage::TypePicked(id) => {
                state.draft.question_type_id = Some(id);
                Task::none()
            }

            FilterMessage::RemoveUsedToggled(enabled) => {
                state.draft.remove_used_questions = enabled;
                Task::none()
            }

            FilterMessage::ApplyPressed => match state.draft.to_filter_set() {
                Some(filters) => submit_filters(state, filters),
                None => {
                    // The Apply button is disabled for incomplete drafts;
                    // reaching this is a stray message, not an error state.
                    tracing::warn!("Apply pressed with an incomplete filter draft");
                    Task::none()
                }
            },
        }
    }
}

/// Commit a filter set and start the fetch for it.
///
/// Every submission counts as an identity change, even one equal in value
/// to the current filter set: re-applying is how users retry a failed list.
pub fn submit_filters(state: &mut AppState, filters: FilterSet) -> Task<Message> {
    let generation = state.questions.begin_fetch();
    tracing::info!(?filters, generation, "Filter set committed");
    state.filters = Some(filters.clone());

    match &state.client {
        Some(client) => service::fetch_questions(client.clone(), filters, generation),
        None => {
            state.questions.complete(
                generation,
                Err(GuiError::question_load("no API client configured")),
            );
            Task::none()
        }
    }
}
