//! Button control for triggering actions
//!
//! Renders as: `[ Label ]`

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::ButtonEvent;
pub use render::render_button;

use super::{rect_contains, FocusState};
use crate::view::theme::Theme;

/// State for a button control
#[derive(Debug, Clone)]
pub struct ButtonState {
    /// Button label text
    pub label: String,
    /// Focus state
    pub focus: FocusState,
    /// Whether the mouse went down on the button (click fires on release)
    pub pressed: bool,
}

impl ButtonState {
    /// Create a new button state
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focus: FocusState::Normal,
            pressed: false,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the button can be activated
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Enable or disable the button, keeping focus when it stays enabled
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.focus = FocusState::Disabled;
            self.pressed = false;
        } else if self.focus == FocusState::Disabled {
            self.focus = FocusState::Normal;
        }
    }

    /// Rendered width: "[ " + label + " ]"
    pub fn width(&self) -> u16 {
        (crate::primitives::display_width::str_width(&self.label) + 4) as u16
    }
}

/// Colors for the button control
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    pub text: Color,
    pub border: Color,
    pub pressed_bg: Color,
    pub focused: Color,
    pub hovered: Color,
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            text: Color::White,
            border: Color::Gray,
            pressed_bg: Color::DarkGray,
            focused: Color::Cyan,
            hovered: Color::Blue,
            disabled: Color::DarkGray,
        }
    }
}

impl ButtonColors {
    /// Create colors from theme
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text: theme.popup_text_fg,
            border: theme.popup_border_fg,
            pressed_bg: theme.selection_bg,
            focused: theme.accent_fg,
            hovered: theme.hover_fg,
            disabled: theme.disabled_fg,
        }
    }

    /// Accent style for the primary action
    pub fn primary(theme: &Theme) -> Self {
        Self {
            text: theme.accent_fg,
            border: theme.accent_fg,
            ..Self::from_theme(theme)
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonLayout {
    /// The clickable button area
    pub button_area: Rect,
}

impl ButtonLayout {
    /// Check if a point is within the button
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.button_area, x, y)
    }
}
