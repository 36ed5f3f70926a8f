//! Main application module for Question Bank Studio.
//!
//! Implements the Iced application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//! - **Loader completions are suppressible** - every async result is
//!   checked against the loader's current interest before it may mutate
//!   state

pub mod subscription;

use iced::{Element, Subscription, Task, Theme};

use crate::handler::{BrowseHandler, FiltersHandler, MessageHandler, loaders};
use crate::message::Message;
use crate::service;
use crate::state::{AppState, Settings};
use crate::theme::studio_theme;
use crate::view::view_browse;

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. The startup task fires the one metadata
    /// fetch of this run and the first filters region measurement.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let state = AppState::with_settings(settings);

        let startup = match &state.client {
            Some(client) => Task::batch([
                service::fetch_metadata(client.clone()),
                loaders::measure_filters_region(),
            ]),
            None => loaders::measure_filters_region(),
        };

        (Self { state }, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen
    /// here, by dispatch into `handler/`.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Loader completions
            // =================================================================
            Message::MetadataLoaded(result) => {
                loaders::handle_metadata_loaded(&mut self.state, result)
            }

            Message::QuestionsLoaded { generation, result } => {
                loaders::handle_questions_loaded(&mut self.state, generation, result)
            }

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Filters(msg) => FiltersHandler.handle(&mut self.state, msg),

            Message::Browse(msg) => BrowseHandler.handle(&mut self.state, msg),

            // =================================================================
            // Layout geometry
            // =================================================================
            Message::ViewportResized(size) => {
                loaders::handle_viewport_resized(&mut self.state, size)
            }

            Message::FiltersRegionMeasured(bounds) => {
                loaders::handle_filters_region_measured(&mut self.state, bounds)
            }
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_browse(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Question Bank Studio".to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }

    /// Event subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
