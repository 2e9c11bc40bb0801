//! Text input rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{FocusState, TextInputColors, TextInputLayout, TextInputState};
use crate::primitives::display_width::{char_width, str_width};

/// Render a text input filling the width of `area`
///
/// # Arguments
/// * `label_width` - Optional label column width so several inputs line up
///
/// # Returns
/// Layout information for hit testing
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    state: &TextInputState,
    colors: &TextInputColors,
    label_width: Option<u16>,
) -> TextInputLayout {
    let label_cols = label_width.unwrap_or(str_width(&state.label) as u16);
    // label + ": " + "[" + at least one column + "]"
    if area.height == 0 || area.width < label_cols + 5 {
        return TextInputLayout::default();
    }

    let (label_color, text_color, border_color) = match state.focus {
        FocusState::Normal => (colors.label, colors.text, colors.border),
        FocusState::Focused | FocusState::Hovered => (colors.focused, colors.text, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let (display_text, is_placeholder) = if state.value.is_empty() {
        (state.placeholder.as_str(), true)
    } else {
        (state.value.as_str(), false)
    };

    let field_start = area.x + label_cols + 2;
    let inner_width = area.width.saturating_sub(label_cols + 4) as usize;

    // Scroll so the cursor stays visible; the cursor cell itself needs a column
    let cursor_visual_pos = str_width(&state.value[..state.cursor.min(state.value.len())]);
    let scroll = if is_placeholder {
        0
    } else {
        (cursor_visual_pos + 1).saturating_sub(inner_width)
    };

    let mut visible = String::new();
    let mut col = 0;
    for ch in display_text.chars() {
        let w = char_width(ch);
        if col < scroll {
            col += w;
            continue;
        }
        if col + w - scroll > inner_width {
            break;
        }
        visible.push(ch);
        col += w;
    }
    let padding = " ".repeat(inner_width.saturating_sub(str_width(&visible)));

    let text_style = if is_placeholder {
        Style::default().fg(colors.placeholder)
    } else {
        Style::default().fg(text_color)
    };

    let padded_label = format!(
        "{}{}",
        state.label,
        " ".repeat((label_cols as usize).saturating_sub(str_width(&state.label)))
    );

    let line = Line::from(vec![
        Span::styled(padded_label, Style::default().fg(label_color)),
        Span::styled(": ", Style::default().fg(label_color)),
        Span::styled("[", Style::default().fg(border_color)),
        Span::styled(visible, text_style),
        Span::raw(padding),
        Span::styled("]", Style::default().fg(border_color)),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));

    let input_area = Rect::new(field_start, area.y, inner_width as u16 + 2, 1);

    let cursor_pos = if state.focus == FocusState::Focused {
        let cursor_x = field_start + 1 + cursor_visual_pos.saturating_sub(scroll) as u16;
        let cursor_char = state.value[state.cursor.min(state.value.len())..]
            .chars()
            .next()
            .unwrap_or(' ');
        frame.render_widget(
            Paragraph::new(Span::styled(
                cursor_char.to_string(),
                Style::default()
                    .fg(colors.cursor)
                    .add_modifier(Modifier::REVERSED),
            )),
            Rect::new(cursor_x, area.y, char_width(cursor_char).max(1) as u16, 1),
        );
        Some((cursor_x, area.y))
    } else {
        None
    };

    TextInputLayout {
        input_area,
        full_area: Rect::new(area.x, area.y, area.width, 1),
        cursor_pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(width: u16, state: &TextInputState) -> (TextInputLayout, String) {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut layout = TextInputLayout::default();
        terminal
            .draw(|frame| {
                layout = render_text_input(
                    frame,
                    Rect::new(0, 0, width, 1),
                    state,
                    &TextInputColors::default(),
                    None,
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        (layout, text)
    }

    #[test]
    fn test_renders_label_and_value() {
        let state = TextInputState::new("Name").with_value("Bing");
        let (layout, text) = render(20, &state);
        assert!(text.starts_with("Name: [Bing"));
        assert!(text.trim_end().ends_with(']'));
        assert_eq!(layout.input_area.x, 6);
        assert_eq!(layout.input_area.width, 14);
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let state = TextInputState::new("Url").with_placeholder("https://");
        let (_, text) = render(20, &state);
        assert!(text.starts_with("Url: [https://"));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let state = TextInputState::new("Url")
            .with_value("abcdefghijklmnopqrstuvwxyz")
            .with_focus(FocusState::Focused);
        let (layout, text) = render(16, &state);
        // 16 - "Url: " (5) - brackets (2) = 9 columns, 8 of text plus the cursor
        assert!(text.contains("stuvwxyz"));
        assert!(!text.contains("abc"));
        assert_eq!(layout.cursor_pos, Some((14, 0)));
    }

    #[test]
    fn test_too_narrow_returns_empty_layout() {
        let state = TextInputState::new("Name");
        let (layout, _) = render(6, &state);
        assert_eq!(layout.full_area, Rect::default());
    }
}
