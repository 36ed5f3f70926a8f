//! View module for Question Bank Studio.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `browse.rs` - Screen composition (filters bar over sidebar/preview)
//! - `filters.rs` - Filters bar with taxonomy and facet pick lists
//! - `sidebar.rs` - Question list with selection and hover
//! - `preview.rs` - Question preview and solution panels

pub mod browse;
pub mod filters;
pub mod preview;
pub mod sidebar;

pub use browse::{filters_region_id, view_browse};
