//! Message handler architecture for the Iced-based GUI.
//!
//! Each handler implements [`MessageHandler`] for one message type; loader
//! completions and layout geometry are handled by the free functions in
//! [`loaders`]. The main `App::update()` dispatches here and owns no logic
//! of its own.

mod browse;
mod filters;
pub mod loaders;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use browse::BrowseHandler;
pub use filters::{FiltersHandler, submit_filters};

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Process a message, mutating state and optionally producing a task.
    fn handle(&self, state: &mut AppState, message: M) -> Task<Message>;
}
