//! Single-line text input control
//!
//! Renders as: `Label: [value      ]`
//!
//! The cursor is a byte offset into `value` and always sits on a char boundary.

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::TextInputEvent;
pub use render::render_text_input;

use super::{rect_contains, FocusState};
use crate::primitives::display_width::{next_char_boundary, prev_char_boundary};
use crate::view::theme::Theme;

/// State for a text input control
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// Current text
    pub value: String,
    /// Cursor byte offset
    pub cursor: usize,
    /// Label displayed before the field
    pub label: String,
    /// Hint shown while the value is empty
    pub placeholder: String,
    /// Focus state
    pub focus: FocusState,
}

impl TextInputState {
    /// Create an empty text input
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            label: label.into(),
            placeholder: String::new(),
            focus: FocusState::Normal,
        }
    }

    /// Set the initial value (cursor goes to the end)
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value, moving the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor (paste)
    pub fn insert_str(&mut self, s: &str) {
        let s: String = s.chars().filter(|c| !c.is_control()).collect();
        self.value.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_char_boundary(&self.value, self.cursor);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = next_char_boundary(&self.value, self.cursor);
        self.value.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.value, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.value, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

/// Colors for the text input control
#[derive(Debug, Clone, Copy)]
pub struct TextInputColors {
    pub label: Color,
    pub text: Color,
    pub border: Color,
    pub placeholder: Color,
    pub cursor: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl Default for TextInputColors {
    fn default() -> Self {
        Self {
            label: Color::White,
            text: Color::White,
            border: Color::Gray,
            placeholder: Color::DarkGray,
            cursor: Color::Yellow,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl TextInputColors {
    /// Create colors from theme
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label: theme.muted_fg,
            text: theme.input_fg,
            border: theme.popup_border_fg,
            placeholder: theme.placeholder_fg,
            cursor: theme.cursor,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInputLayout {
    /// The bracketed input field
    pub input_area: Rect,
    /// Label plus field
    pub full_area: Rect,
    /// Screen position of the cursor when focused
    pub cursor_pos: Option<(u16, u16)>,
}

impl TextInputLayout {
    /// Check if a point is within the full control area
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }

    /// Check if a point is within the input field itself
    pub fn is_input(&self, x: u16, y: u16) -> bool {
        rect_contains(self.input_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut state = TextInputState::new("Name");
        state.insert('B');
        state.insert('i');
        state.insert('n');
        state.insert('g');
        assert_eq!(state.value, "Bing");
        assert_eq!(state.cursor, 4);

        state.backspace();
        assert_eq!(state.value, "Bin");
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TextInputState::new("Name").with_value("百度");
        assert_eq!(state.cursor, 6);

        state.move_left();
        assert_eq!(state.cursor, 3);
        state.insert('x');
        assert_eq!(state.value, "百x度");

        state.backspace();
        state.backspace();
        assert_eq!(state.value, "度");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut state = TextInputState::new("Url").with_value("abc");
        state.move_home();
        state.delete();
        assert_eq!(state.value, "bc");
        state.move_end();
        state.delete();
        assert_eq!(state.value, "bc");
    }

    #[test]
    fn test_insert_str_drops_control_chars() {
        let mut state = TextInputState::new("Url");
        state.insert_str("https://example.com/\n");
        assert_eq!(state.value, "https://example.com/");
        assert_eq!(state.cursor, state.value.len());
    }

    #[test]
    fn test_clear() {
        let mut state = TextInputState::new("Icon").with_value("https://x/icon.png");
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.cursor, 0);
    }
}
