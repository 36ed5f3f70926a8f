//! Loader completion and layout geometry handlers.
//!
//! Completions are the only messages that can arrive late: both loaders
//! apply stale-response suppression before touching state. Metadata is
//! guarded by its lifecycle (a completion after the loader stopped caring
//! is dropped), the question list by its fetch generation.

use iced::widget::container;
use iced::{Size, Task};

use qbs_model::{FilterSet, Metadata, Question};

use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, FilterDraft, MetadataState};
use crate::view::filters_region_id;

use super::filters::submit_filters;

/// Handle the taxonomy metadata completion.
///
/// On success, defaults are derived and adopted only if no filter set
/// exists yet — first write wins, a user submission that raced ahead is
/// never overwritten. Adoption commits the defaults, which starts the
/// initial question fetch.
pub fn handle_metadata_loaded(
    state: &mut AppState,
    result: Result<Metadata, GuiError>,
) -> Task<Message> {
    if !state.metadata.is_loading() {
        tracing::debug!("Discarding metadata response delivered after the loader settled");
        return Task::none();
    }

    match result {
        Ok(metadata) => {
            tracing::info!(classes = metadata.classes.len(), "Taxonomy metadata loaded");
            let defaults = FilterSet::defaults_from(&metadata);
            state.metadata = MetadataState::Ready(metadata);

            if state.filters.is_some() {
                return Task::none();
            }
            match defaults {
                Some(defaults) => {
                    state.draft = FilterDraft::from_filters(&defaults);
                    submit_filters(state, defaults)
                }
                None => {
                    tracing::warn!("Taxonomy too sparse to derive default filters");
                    state.draft = FilterDraft::empty();
                    Task::none()
                }
            }
        }
        Err(error) => {
            tracing::error!("Metadata fetch failed: {}", error);
            state.metadata = MetadataState::Failed(error);
            Task::none()
        }
    }
}

/// Handle a question list completion; stale generations mutate nothing.
pub fn handle_questions_loaded(
    state: &mut AppState,
    generation: u64,
    result: Result<Vec<Question>, GuiError>,
) -> Task<Message> {
    state.questions.complete(generation, result);
    Task::none()
}

/// Handle a window resize: record the size and re-measure the filters
/// region, since reflowing at the new width can change its height.
pub fn handle_viewport_resized(state: &mut AppState, size: Size) -> Task<Message> {
    state.layout.window = size;
    measure_filters_region()
}

/// Handle a filters region measurement result.
pub fn handle_filters_region_measured(
    state: &mut AppState,
    bounds: Option<iced::Rectangle>,
) -> Task<Message> {
    state.layout.record_filters_bounds(bounds);
    Task::none()
}

/// Query the rendered bounds of the filters region.
pub fn measure_filters_region() -> Task<Message> {
    container::visible_bounds(filters_region_id()).map(Message::FiltersRegionMeasured)
}
