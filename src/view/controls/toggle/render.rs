//! Toggle rendering

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{FocusState, ToggleColors, ToggleLayout, ToggleState};
use crate::primitives::display_width::str_width;

/// Render a toggle control at the left edge of `area`
pub fn render_toggle(
    frame: &mut Frame,
    area: Rect,
    state: &ToggleState,
    colors: &ToggleColors,
) -> ToggleLayout {
    if area.height == 0 || area.width < 3 {
        return ToggleLayout {
            checkbox_area: Rect::default(),
            full_area: Rect::new(area.x, area.y, area.width, area.height.min(1)),
        };
    }

    let (bracket_color, check_color, label_color) = match state.focus {
        FocusState::Normal => (colors.bracket, colors.checkmark, colors.label),
        FocusState::Focused | FocusState::Hovered => {
            (colors.focused, colors.checkmark, colors.focused)
        }
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let mark = if state.checked { "x" } else { " " };

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(mark, Style::default().fg(check_color)),
        Span::styled("]", Style::default().fg(bracket_color)),
        Span::raw(" "),
        Span::styled(state.label.as_str(), Style::default().fg(label_color)),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    let checkbox_area = Rect::new(area.x, area.y, 3, 1);
    let full_width = (4 + str_width(&state.label) as u16).min(area.width);
    let full_area = Rect::new(area.x, area.y, full_width, 1);

    ToggleLayout {
        checkbox_area,
        full_area,
    }
}
