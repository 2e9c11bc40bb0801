//! Form controls used by the search engine manager
//!
//! Each control follows the same shape:
//! - a `*State` struct holding value and focus
//! - `render_*` functions that draw it and return a `*Layout`
//! - `handle_mouse` / `handle_key` returning an optional `*Event`
//! - the `*Layout` for hit testing

pub mod button;
pub mod text_input;
pub mod toggle;

pub use button::{render_button, ButtonColors, ButtonEvent, ButtonLayout, ButtonState};
pub use text_input::{
    render_text_input, TextInputColors, TextInputEvent, TextInputLayout, TextInputState,
};
pub use toggle::{render_toggle, ToggleColors, ToggleEvent, ToggleLayout, ToggleState};

use ratatui::layout::Rect;

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Hovered,
    Disabled,
}

/// Whether `(x, y)` lies inside `area`
pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let area = Rect::new(2, 3, 4, 1);
        assert!(rect_contains(area, 2, 3));
        assert!(rect_contains(area, 5, 3));
        assert!(!rect_contains(area, 6, 3));
        assert!(!rect_contains(area, 2, 4));
        assert!(!rect_contains(Rect::default(), 0, 0));
    }
}
