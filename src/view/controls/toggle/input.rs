//! Toggle input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{FocusState, ToggleLayout, ToggleState};

/// Events that can be returned from toggle input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Toggle was toggled; carries the new value
    Toggled(bool),
    /// Mouse is hovering over the toggle
    Hovered,
    /// Mouse left the toggle area
    Left,
}

impl ToggleState {
    /// Handle a mouse event for this toggle
    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &ToggleLayout) -> Option<ToggleEvent> {
        if !self.is_enabled() {
            return None;
        }

        let inside = layout.contains(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.toggle();
                Some(ToggleEvent::Toggled(self.checked))
            }
            MouseEventKind::Moved => {
                if inside {
                    if self.focus != FocusState::Focused {
                        self.focus = FocusState::Hovered;
                    }
                    Some(ToggleEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(ToggleEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this toggle (when focused)
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ToggleEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle();
                Some(ToggleEvent::Toggled(self.checked))
            }
            _ => None,
        }
    }
}
