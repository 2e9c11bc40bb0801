//! Core data model
//!
//! Search engine records and the string rules that apply to them.

pub mod engine;

pub use engine::{normalize_url, EngineIcon, SearchEngine, GLOBE_ICON};
