//! Question Bank Studio - GUI Library
//!
//! This module provides the core application types and modules for the
//! Question Bank Studio desktop application.
//!
//! Built with Iced using the Elm architecture: a browsing screen over an
//! educational question bank, where a committed filter set drives question
//! fetches and selection/hover drive the previewed question.

pub mod app;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
