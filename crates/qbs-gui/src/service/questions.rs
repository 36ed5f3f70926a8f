//! Question list fetch service.

use iced::Task;

use qbs_api::ApiClient;
use qbs_model::FilterSet;

use crate::error::GuiError;
use crate::message::Message;

/// Fetch the question list for a committed filter set.
///
/// The task carries the fetch generation into its completion message so the
/// update loop can discard it if a newer filter set was committed while the
/// request was in flight.
pub fn fetch_questions(client: ApiClient, filters: FilterSet, generation: u64) -> Task<Message> {
    Task::perform(
        async move {
            client
                .fetch_questions(&filters)
                .await
                .map_err(|e| GuiError::question_load(e.user_message()))
        },
        move |result| Message::QuestionsLoaded { generation, result },
    )
}
