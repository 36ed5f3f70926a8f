//! HTTP client for the question bank API.
//!
//! This crate wraps the two read endpoints the studio consumes:
//!
//! - `GET /courses/metadata` — the full taxonomy snapshot (classes with
//!   subjects, chapters and topics, plus the flat question-level and
//!   question-type facets)
//! - `GET /questions` — the question list for a fully-specified filter set
//!
//! Both operations are one-shot async functions designed to sit behind
//! Iced's `Task::perform`: the GUI fires them and receives the outcome as a
//! message. Failures are captured as [`ApiError`] values with a
//! [`ApiError::user_message`] suitable for direct display; nothing in this
//! crate panics on a bad response.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
