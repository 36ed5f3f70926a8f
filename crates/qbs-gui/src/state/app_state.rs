//! Application-level state.
//!
//! `AppState` is the root of all state. The browsing screen is driven by
//! three loosely-coupled axes: the taxonomy metadata, the committed filter
//! set (whose replacement is the only trigger for question fetches), and
//! the question list itself. Selection/hover and layout geometry ride
//! alongside without influencing the loaders.

use iced::Size;

use qbs_api::ApiClient;
use qbs_model::{FilterSet, Metadata};

use super::browse::BrowseState;
use super::filter_draft::FilterDraft;
use super::question_list::QuestionListState;
use super::settings::Settings;
use crate::error::GuiError;

/// Lifecycle of the taxonomy snapshot.
///
/// Loaded once per application run. A completion that arrives when the
/// state is no longer `Loading` is discarded: the loader's interest ended.
#[derive(Debug, Clone)]
pub enum MetadataState {
    Loading,
    Ready(Metadata),
    Failed(GuiError),
}

impl MetadataState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Ready(metadata) => Some(metadata),
            _ => None,
        }
    }
}

/// Geometry the browsing layout depends on.
///
/// `filters_height` is the measured height of the filters region; the list
/// and detail panels fill the rest of the window below it.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Last known window size.
    pub window: Size,
    /// Measured filters region height, whole pixels, rounded up.
    pub filters_height: u32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            window: Size::new(1280.0, 800.0),
            filters_height: 0,
        }
    }
}

impl LayoutState {
    /// Record a bounds measurement of the filters region.
    ///
    /// `None` means the region was not measurable (not laid out yet); the
    /// previous height stays in effect.
    pub fn record_filters_bounds(&mut self, bounds: Option<iced::Rectangle>) {
        if let Some(bounds) = bounds {
            self.filters_height = bounds.height.ceil() as u32;
        }
    }

    /// Height left for the list/detail row under the filters region.
    pub fn content_height(&self) -> f32 {
        (self.window.height - self.filters_height as f32).max(0.0)
    }
}

/// Top-level application state.
pub struct AppState {
    /// API client; `None` when the configured base URL was unusable.
    pub client: Option<ApiClient>,
    /// Persisted settings.
    pub settings: Settings,
    /// Taxonomy snapshot lifecycle.
    pub metadata: MetadataState,
    /// The committed filter set. `None` until defaults are adopted or the
    /// user applies the filters bar; replaced wholesale, never mutated.
    pub filters: Option<FilterSet>,
    /// Draft selections behind the filters bar.
    pub draft: FilterDraft,
    /// Question list lifecycle, keyed by fetch generation.
    pub questions: QuestionListState,
    /// Multi-selection and hover over the fetched list.
    pub browse: BrowseState,
    /// Window size and measured filters region height.
    pub layout: LayoutState,
}

impl AppState {
    /// Build state from loaded settings.
    ///
    /// An unusable base URL degrades to a metadata failure instead of a
    /// startup panic; everything else starts in its idle/loading state.
    pub fn with_settings(settings: Settings) -> Self {
        let client = match ApiClient::new(&settings.api_base_url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Cannot construct API client: {}", e);
                None
            }
        };
        let metadata = if client.is_some() {
            MetadataState::Loading
        } else {
            MetadataState::Failed(GuiError::metadata_load(
                "the configured API address is invalid",
            ))
        };
        Self {
            client,
            settings,
            metadata,
            filters: None,
            draft: FilterDraft::empty(),
            questions: QuestionListState::new(),
            browse: BrowseState::new(),
            layout: LayoutState::default(),
        }
    }
}
