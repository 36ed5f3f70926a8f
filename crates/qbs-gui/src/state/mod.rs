//! Application state management.
//!
//! The architecture separates concerns into:
//!
//! - **AppState**: Root state wiring the axes together
//! - **MetadataState / QuestionListState**: Loader lifecycles with
//!   stale-response suppression
//! - **FilterDraft**: Uncommitted filters-bar selections
//! - **BrowseState**: Selection and hover over the fetched list
//! - **Settings**: Persisted configuration

mod app_state;
mod browse;
mod filter_draft;
mod question_list;
mod settings;

pub use app_state::{AppState, LayoutState, MetadataState};
pub use browse::BrowseState;
pub use filter_draft::FilterDraft;
pub use question_list::{LoadPhase, QuestionListState};
pub use settings::Settings;
