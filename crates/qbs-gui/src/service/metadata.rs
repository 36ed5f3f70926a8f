//! Taxonomy metadata fetch service.

use iced::Task;

use qbs_api::ApiClient;

use crate::error::GuiError;
use crate::message::Message;

/// Fetch the taxonomy snapshot.
///
/// Returns a Task that will produce a `MetadataLoaded` message. Issued once
/// per application run, from the startup task.
pub fn fetch_metadata(client: ApiClient) -> Task<Message> {
    Task::perform(
        async move {
            client
                .fetch_metadata()
                .await
                .map_err(|e| GuiError::metadata_load(e.user_message()))
        },
        Message::MetadataLoaded,
    )
}
