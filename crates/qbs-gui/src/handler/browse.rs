//! Question list interaction handler.
//!
//! Selection and hover are wholesale replacements on the tracker; no
//! validation against the live item list happens here. A hover or selection
//! that outlives its list is resolved by the derived current question, not
//! by cleanup.

use std::collections::BTreeSet;

use iced::Task;

use super::MessageHandler;
use crate::message::{BrowseMessage, Message};
use crate::state::AppState;

/// Handler for question list interactions.
pub struct BrowseHandler;

impl MessageHandler<BrowseMessage> for BrowseHandler {
    fn handle(&self, state: &mut AppState, msg: BrowseMessage) -> Task<Message> {
        match msg {
            BrowseMessage::QuestionHovered(question) => {
                state.browse.hover(Some(question));
            }

            BrowseMessage::QuestionUnhovered => {
                state.browse.hover(None);
            }

            BrowseMessage::SelectionToggled(id) => {
                let ids = state.browse.toggled(id);
                state.browse.select(ids);
            }

            BrowseMessage::SelectionCleared => {
                state.browse.select(BTreeSet::new());
            }
        }
        Task::none()
    }
}
