//! Services used by the search engine manager
//!
//! Favicon URL construction, id generation, logging setup and terminal modes.

pub mod favicon;
pub mod id_source;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
