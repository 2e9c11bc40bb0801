//! Low-level primitives and utilities
//!
//! Text measurement helpers shared by the controls.

pub mod display_width;
