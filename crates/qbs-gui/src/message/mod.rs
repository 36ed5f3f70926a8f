//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and loader completions flow through these types.
//! Loader completions carry displayable [`GuiError`] values (messages must
//! be `Clone`, so transport errors are converted at the service boundary).

use iced::{Rectangle, Size};

use qbs_model::{Metadata, Question};

use crate::error::GuiError;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Loader completions
    // =========================================================================
    /// Taxonomy metadata fetch completed.
    MetadataLoaded(Result<Metadata, GuiError>),

    /// Question list fetch completed for the fetch of `generation`.
    QuestionsLoaded {
        generation: u64,
        result: Result<Vec<Question>, GuiError>,
    },

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Filters bar messages (draft edits and submission).
    Filters(FilterMessage),

    /// Question list interactions (selection, hover).
    Browse(BrowseMessage),

    // =========================================================================
    // Layout geometry
    // =========================================================================
    /// The window was resized.
    ViewportResized(Size),

    /// The filters region was measured (`None`: not laid out yet).
    FiltersRegionMeasured(Option<Rectangle>),
}

/// Filters bar messages.
///
/// Draft edits never fetch anything; only `ApplyPressed` commits the draft
/// as a new filter set.
#[derive(Debug, Clone)]
pub enum FilterMessage {
    ClassPicked(u64),
    SubjectPicked(u64),
    ChapterPicked(u64),
    /// `None` widens the search to the whole chapter.
    TopicPicked(Option<u64>),
    LevelPicked(u64),
    TypePicked(u64),
    RemoveUsedToggled(bool),
    ApplyPressed,
}

/// Question list interactions.
#[derive(Debug, Clone)]
pub enum BrowseMessage {
    /// The pointer entered a question row; the full item rides along.
    QuestionHovered(Question),
    /// The pointer left the hovered row.
    QuestionUnhovered,
    /// A row's selection checkbox was toggled.
    SelectionToggled(u64),
    /// The clear-selection action was pressed.
    SelectionCleared,
}
