//! Button input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{ButtonLayout, ButtonState, FocusState};

/// Events that can be returned from button input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Mouse released over the button after pressing it, or Enter/Space while focused
    Clicked,
    /// Mouse is hovering over the button
    Hovered,
    /// Mouse left the button area
    Left,
}

impl ButtonState {
    /// Handle a mouse event for this button
    ///
    /// Returns `None` when the event is not relevant to this button.
    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &ButtonLayout) -> Option<ButtonEvent> {
        if !self.is_enabled() {
            return None;
        }

        let inside = layout.contains(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.pressed = true;
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_pressed = self.pressed;
                self.pressed = false;

                if inside && was_pressed {
                    Some(ButtonEvent::Clicked)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                if inside {
                    if self.focus != FocusState::Focused {
                        self.focus = FocusState::Hovered;
                    }
                    Some(ButtonEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(ButtonEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this button (when focused)
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ButtonEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(ButtonEvent::Clicked),
            _ => None,
        }
    }
}
