//! GUI-specific error types.
//!
//! A unified error type for loader failures, designed to integrate with
//! Iced's message-based architecture: messages must be `Clone`, so errors
//! are captured as displayable values at the loader boundary instead of
//! being propagated as raw transport errors.

use thiserror::Error;

/// Errors surfaced to the user by the browsing screen.
///
/// Metadata failures and question-list failures are kept distinct because
/// they gate different parts of the UI: the first disables the filters bar,
/// the second blanks the question panels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The taxonomy snapshot could not be loaded.
    #[error("Failed to load the course catalog: {reason}")]
    MetadataLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// The question list for the current filter set could not be loaded.
    #[error("Failed to load questions: {reason}")]
    QuestionLoad {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a metadata load error from any error source.
    pub fn metadata_load(err: impl std::fmt::Display) -> Self {
        Self::MetadataLoad {
            reason: err.to_string(),
        }
    }

    /// Create a question load error from any error source.
    pub fn question_load(err: impl std::fmt::Display) -> Self {
        Self::QuestionLoad {
            reason: err.to_string(),
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::MetadataLoad { .. } => {
                "Check the API address in your settings file, then restart the application."
            }
            Self::QuestionLoad { .. } => "Adjust the filters and apply them again.",
        }
    }
}
