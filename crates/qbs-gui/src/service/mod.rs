//! Services for background tasks.
//!
//! These services provide async functions for use with Iced's `Task::perform`
//! pattern. Each wraps one `qbs-api` call and converts its outcome into a
//! completion message; errors become displayable values here so they never
//! cross the update loop as raw transport failures.

pub mod metadata;
pub mod questions;

pub use metadata::fetch_metadata;
pub use questions::fetch_questions;
