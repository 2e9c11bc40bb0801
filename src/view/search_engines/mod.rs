//! Search engine manager modal
//!
//! The modal lists the configured search engines, marks the active one, and
//! offers a small form to add new entries. It never owns the list: the owner
//! passes it in through [`ManagerProps`] and receives every change back as
//! ordered [`ManagerEvent`]s.
//!
//! ## Module structure
//!
//! - `state`: draft form state and the add/delete/select/fetch operations
//! - `input`: keyboard, mouse and paste handling
//! - `layout`: hit testing for mouse input
//! - `render`: drawing the modal and the delete confirmation dialog

mod input;
mod layout;
mod render;
mod state;

pub use layout::{ManagerHit, ManagerLayout};
pub use render::{render_manager, GLOBE_GLYPH, IMAGE_GLYPH};
pub use state::{ConfirmDialogState, FocusTarget, SearchEngineManager, DELETE_PROMPT};

use crate::model::SearchEngine;

/// Inputs supplied by the owner for one render/input pass
#[derive(Debug, Clone, Copy)]
pub struct ManagerProps<'a> {
    /// Nothing is rendered and input is ignored while false
    pub is_open: bool,
    /// The owner's engine list, in display order
    pub engines: &'a [SearchEngine],
    /// Id of the active engine; may match no entry
    pub active_engine_id: &'a str,
}

/// Changes requested by the manager, in the order they must be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerEvent {
    /// The user dismissed the modal
    Close,
    /// Replace the engine list
    UpdateEngines(Vec<SearchEngine>),
    /// Make the engine with this id active
    SelectEngine(String),
}

/// Receiver of manager events; the single source of truth for the list
pub trait EngineOwner {
    fn on_close(&mut self);
    fn on_update_engines(&mut self, engines: Vec<SearchEngine>);
    fn on_select_engine(&mut self, id: String);

    /// Dispatch events in order
    fn apply(&mut self, events: Vec<ManagerEvent>) {
        for event in events {
            match event {
                ManagerEvent::Close => self.on_close(),
                ManagerEvent::UpdateEngines(engines) => self.on_update_engines(engines),
                ManagerEvent::SelectEngine(id) => self.on_select_engine(id),
            }
        }
    }
}

/// Yes/no confirmation supplied by the host
pub trait ConfirmPrompt {
    /// Ask `message`; `true` means proceed
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Answer already collected by the in-modal confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAnswer(pub bool);

impl ConfirmPrompt for DialogAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}
