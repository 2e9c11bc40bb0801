// Search engine manager library - exposes all modules for the host binary and tests

pub mod app;
pub mod config;
#[cfg(feature = "runtime")]
pub mod config_io;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;
