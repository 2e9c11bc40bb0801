//! Text input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{FocusState, TextInputLayout, TextInputState};

/// Events that can be returned from text input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// Text was changed
    Changed(String),
    /// Enter pressed
    Submitted(String),
    /// Escape pressed
    Cancelled,
    /// Input gained focus from a click
    Focused,
    /// Mouse is hovering
    Hovered,
    /// Mouse left the area
    Left,
}

impl TextInputState {
    /// Handle a mouse event for this text input
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        layout: &TextInputLayout,
    ) -> Option<TextInputEvent> {
        if !self.is_enabled() {
            return None;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if layout.contains(event.column, event.row) => {
                if self.focus != FocusState::Focused {
                    self.focus = FocusState::Focused;
                    Some(TextInputEvent::Focused)
                } else {
                    None
                }
            }
            MouseEventKind::Moved => {
                if layout.contains(event.column, event.row) {
                    if self.focus != FocusState::Focused {
                        self.focus = FocusState::Hovered;
                    }
                    Some(TextInputEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(TextInputEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this text input (when focused)
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<TextInputEvent> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => Some(TextInputEvent::Submitted(self.value.clone())),
            KeyCode::Esc => Some(TextInputEvent::Cancelled),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.backspace();
                    Some(TextInputEvent::Changed(self.value.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.delete();
                    Some(TextInputEvent::Changed(self.value.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left if ctrl => {
                self.move_home();
                None
            }
            KeyCode::Left => {
                self.move_left();
                None
            }
            KeyCode::Right if ctrl => {
                self.move_end();
                None
            }
            KeyCode::Right => {
                self.move_right();
                None
            }
            KeyCode::Home => {
                self.move_home();
                None
            }
            KeyCode::End => {
                self.move_end();
                None
            }
            KeyCode::Char('u') if ctrl => {
                if self.value.is_empty() {
                    None
                } else {
                    self.clear();
                    Some(TextInputEvent::Changed(String::new()))
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert(c);
                Some(TextInputEvent::Changed(self.value.clone()))
            }
            _ => None,
        }
    }
}
