//! Toggle (checkbox) control for boolean values
//!
//! Renders as: `[x] Label` or `[ ] Label`

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::ToggleEvent;
pub use render::render_toggle;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// State for a toggle control
#[derive(Debug, Clone)]
pub struct ToggleState {
    /// Current value
    pub checked: bool,
    /// Label displayed after the checkbox
    pub label: String,
    /// Focus state
    pub focus: FocusState,
}

impl ToggleState {
    /// Create a new toggle state
    pub fn new(checked: bool, label: impl Into<String>) -> Self {
        Self {
            checked,
            label: label.into(),
            focus: FocusState::Normal,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the toggle is enabled
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Toggle the value
    pub fn toggle(&mut self) {
        if self.is_enabled() {
            self.checked = !self.checked;
        }
    }
}

/// Colors for the toggle control
#[derive(Debug, Clone, Copy)]
pub struct ToggleColors {
    pub bracket: Color,
    pub checkmark: Color,
    pub label: Color,
    pub focused: Color,
    pub disabled: Color,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            bracket: Color::Gray,
            checkmark: Color::Green,
            label: Color::White,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

impl ToggleColors {
    /// Create colors from theme
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            bracket: theme.muted_fg,
            checkmark: theme.accent_fg,
            label: theme.muted_fg,
            focused: theme.accent_fg,
            disabled: theme.disabled_fg,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleLayout {
    /// The checkbox area
    pub checkbox_area: Rect,
    /// Checkbox plus label; clicking the label toggles too
    pub full_area: Rect,
}

impl ToggleLayout {
    /// Check if a point is within the clickable area
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_frame<F>(width: u16, height: u16, f: F)
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, height);
                f(frame, area);
            })
            .unwrap();
    }

    #[test]
    fn test_toggle_layout() {
        test_frame(30, 1, |frame, area| {
            let state = ToggleState::new(true, "Auto fetch");
            let layout = render_toggle(frame, area, &state, &ToggleColors::default());

            assert_eq!(layout.checkbox_area, Rect::new(0, 0, 3, 1));
            assert_eq!(layout.full_area.width, 14); // "[x] Auto fetch"
        });
    }

    #[test]
    fn test_toggle_click_detection() {
        test_frame(30, 1, |frame, area| {
            let state = ToggleState::new(false, "Auto fetch");
            let layout = render_toggle(frame, area, &state, &ToggleColors::default());

            assert!(layout.contains(1, 0));
            assert!(layout.contains(8, 0));
            assert!(!layout.contains(20, 0));
        });
    }

    #[test]
    fn test_toggle_state_toggle() {
        let mut state = ToggleState::new(false, "Test");
        state.toggle();
        assert!(state.checked);
        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn test_toggle_disabled_no_toggle() {
        let mut state = ToggleState::new(false, "Test").with_focus(FocusState::Disabled);
        state.toggle();
        assert!(!state.checked);
    }

    #[test]
    fn test_toggle_narrow_area() {
        test_frame(2, 1, |frame, area| {
            let state = ToggleState::new(true, "Enable");
            let layout = render_toggle(frame, area, &state, &ToggleColors::default());
            assert!(layout.full_area.width <= area.width);
        });
    }
}
