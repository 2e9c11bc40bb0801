//! Button rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{ButtonColors, ButtonLayout, ButtonState, FocusState};
use crate::primitives::display_width::truncate_to_width;

/// Render a button at the left edge of `area`
///
/// The label is truncated when the area is too narrow.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &ButtonState,
    colors: &ButtonColors,
) -> ButtonLayout {
    if area.height == 0 || area.width < 4 {
        return ButtonLayout::default();
    }

    let (text_color, border_color, bg_color) = match state.focus {
        FocusState::Normal if state.pressed => (colors.text, colors.border, Some(colors.pressed_bg)),
        FocusState::Normal => (colors.text, colors.border, None),
        FocusState::Focused if state.pressed => {
            (colors.text, colors.focused, Some(colors.pressed_bg))
        }
        FocusState::Focused => (colors.focused, colors.focused, None),
        FocusState::Hovered => (colors.hovered, colors.hovered, None),
        FocusState::Disabled => (colors.disabled, colors.disabled, None),
    };

    let actual_width = state.width().min(area.width);
    let display_label = truncate_to_width(&state.label, actual_width.saturating_sub(4) as usize);

    let mut style = Style::default().fg(text_color);
    if let Some(bg) = bg_color {
        style = style.bg(bg);
    }
    if state.focus == FocusState::Focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::raw(" "),
        Span::styled(display_label, style),
        Span::raw(" "),
        Span::styled("]", Style::default().fg(border_color)),
    ]);

    let button_area = Rect::new(area.x, area.y, actual_width, 1);
    frame.render_widget(Paragraph::new(line), button_area);

    ButtonLayout { button_area }
}
