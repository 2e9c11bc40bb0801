//! View and UI layer
//!
//! Reusable controls, the theme, and the search engine manager modal.

pub mod controls;
pub mod search_engines;
pub mod theme;
