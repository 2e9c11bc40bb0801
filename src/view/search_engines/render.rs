//! Search engine manager rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{
    ConfirmDialogState, FocusTarget, ManagerHit, ManagerLayout, ManagerProps,
    SearchEngineManager, DELETE_PROMPT,
};
use crate::model::EngineIcon;
use crate::primitives::display_width::{str_width, truncate_to_width};
use crate::view::controls::{
    render_button, render_text_input, render_toggle, ButtonColors, TextInputColors,
    ToggleColors,
};
use crate::view::theme::Theme;

/// Stand-in for the generic globe icon
pub const GLOBE_GLYPH: &str = "⊕";
/// Stand-in for a remote image icon
pub const IMAGE_GLYPH: &str = "▣";

const CHECK_GLYPH: &str = "✓";
const DELETE_GLYPH: &str = "✕";

const MAX_MODAL_WIDTH: u16 = 72;
const MIN_MODAL_WIDTH: u16 = 40;
/// Modal rows besides the engine list, borders included
const CHROME_HEIGHT: u16 = 12;
/// Widest label among the draft inputs
const LABEL_WIDTH: u16 = 10;
const NAME_COLUMN_MAX: usize = 18;

/// Hands out consecutive rows of an area, top to bottom
struct LineCursor {
    area: Rect,
    y: u16,
}

impl LineCursor {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn take(&mut self, height: u16) -> Rect {
        let bottom = self.area.y + self.area.height;
        let height = height.min(bottom.saturating_sub(self.y));
        let rect = Rect::new(self.area.x, self.y, self.area.width, height);
        self.y += height;
        rect
    }

    fn skip(&mut self, height: u16) {
        self.take(height);
    }
}

/// Render the manager modal centered in `area`
///
/// Returns `None` while the modal is closed. Also records the visible list
/// height in `manager` so keyboard navigation can keep the highlight on screen.
pub fn render_manager(
    frame: &mut Frame,
    area: Rect,
    manager: &mut SearchEngineManager,
    props: &ManagerProps,
    theme: &Theme,
) -> Option<ManagerLayout> {
    if !props.is_open {
        return None;
    }

    let modal_width = area.width.saturating_sub(4).min(MAX_MODAL_WIDTH);
    let wanted_height = CHROME_HEIGHT + props.engines.len().max(1) as u16;
    let modal_height = wanted_height.min(area.height.saturating_sub(2));
    let modal_area = Rect::new(
        area.x + area.width.saturating_sub(modal_width) / 2,
        area.y + area.height.saturating_sub(modal_height) / 2,
        modal_width,
        modal_height,
    );

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .title(" Search Engines ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border_fg))
        .style(Style::default().bg(theme.popup_bg).fg(theme.popup_text_fg));
    frame.render_widget(block, modal_area);

    let mut layout = ManagerLayout {
        modal_area,
        ..Default::default()
    };

    // Close button sits on the top border
    let close_width = manager.close_button.width();
    if modal_width > close_width + 2 {
        let close_area = Rect::new(
            modal_area.x + modal_width - close_width - 1,
            modal_area.y,
            close_width,
            1,
        );
        layout.close = render_button(
            frame,
            close_area,
            &manager.close_button,
            &ButtonColors::from_theme(theme),
        );
    }

    let inner = Rect::new(
        modal_area.x + 2,
        modal_area.y + 1,
        modal_width.saturating_sub(4),
        modal_height.saturating_sub(2),
    );

    if modal_width < MIN_MODAL_WIDTH || modal_height <= CHROME_HEIGHT {
        frame.render_widget(
            Paragraph::new("Terminal too small").style(Style::default().fg(theme.muted_fg)),
            Rect::new(inner.x, inner.y, inner.width, inner.height.min(1)),
        );
    } else {
        render_body(frame, inner, manager, props, theme, &mut layout);
    }

    if let Some(dialog) = &manager.confirm_dialog {
        render_confirm_dialog(frame, area, dialog, theme, &mut layout);
    }

    Some(layout)
}

fn render_body(
    frame: &mut Frame,
    inner: Rect,
    manager: &mut SearchEngineManager,
    props: &ManagerProps,
    theme: &Theme,
    layout: &mut ManagerLayout,
) {
    let section_style = Style::default()
        .fg(theme.muted_fg)
        .add_modifier(Modifier::BOLD);
    let mut lines = LineCursor::new(inner);

    frame.render_widget(
        Paragraph::new("DEFAULT SEARCH ENGINE").style(section_style),
        lines.take(1),
    );
    let list_height = inner.height.saturating_sub(CHROME_HEIGHT - 2);
    render_engine_list(frame, lines.take(list_height), manager, props, theme, layout);
    lines.skip(1);

    frame.render_widget(
        Paragraph::new("ADD NEW ENGINE").style(section_style),
        lines.take(1),
    );

    let input_colors = TextInputColors::from_theme(theme);
    layout.name = render_text_input(
        frame,
        lines.take(1),
        &manager.name,
        &input_colors,
        Some(LABEL_WIDTH),
    );
    layout.url = render_text_input(
        frame,
        lines.take(1),
        &manager.url,
        &input_colors,
        Some(LABEL_WIDTH),
    );

    let hint_row = lines.take(1);
    let hint_indent = LABEL_WIDTH + 3;
    frame.render_widget(
        Paragraph::new("The search term is appended to the end of the URL")
            .style(Style::default().fg(theme.muted_fg)),
        Rect::new(
            hint_row.x + hint_indent,
            hint_row.y,
            hint_row.width.saturating_sub(hint_indent),
            hint_row.height,
        ),
    );

    render_icon_row(frame, lines.take(1), manager, theme, &input_colors, layout);

    layout.auto_fetch = render_toggle(
        frame,
        lines.take(1),
        &manager.auto_fetch,
        &ToggleColors::from_theme(theme),
    );
    lines.skip(1);

    layout.add = render_button(
        frame,
        lines.take(1),
        &manager.add_button,
        &ButtonColors::primary(theme),
    );
}

fn render_engine_list(
    frame: &mut Frame,
    area: Rect,
    manager: &mut SearchEngineManager,
    props: &ManagerProps,
    theme: &Theme,
    layout: &mut ManagerLayout,
) {
    layout.list_area = area;
    let visible = area.height as usize;
    let len = props.engines.len();
    manager.list_viewport = visible;
    if std::mem::take(&mut manager.scroll_to_highlight) {
        manager.ensure_highlight_visible(len);
    }
    manager.scroll_offset = manager.scroll_offset.min(len.saturating_sub(visible));

    if len == 0 {
        frame.render_widget(
            Paragraph::new("No search engines").style(Style::default().fg(theme.muted_fg)),
            Rect::new(area.x, area.y, area.width, area.height.min(1)),
        );
        return;
    }

    let can_delete = len > 1;
    // marker + glyph + gap, and check + delete on the right
    let prefix_width = 4;
    let suffix_width = 5;
    let text_width = (area.width as usize).saturating_sub(suffix_width);
    let name_width = props
        .engines
        .iter()
        .map(|e| str_width(&e.name))
        .max()
        .unwrap_or(0)
        .min(NAME_COLUMN_MAX);
    let url_width = text_width.saturating_sub(prefix_width + name_width + 2);
    let list_focused = manager.focus == FocusTarget::List;

    for (row_idx, (idx, engine)) in props
        .engines
        .iter()
        .enumerate()
        .skip(manager.scroll_offset)
        .take(visible)
        .enumerate()
    {
        let row = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        let is_active = engine.id == props.active_engine_id;
        let highlighted = list_focused && idx == manager.highlighted;
        let hovered = manager.hover_hit == Some(ManagerHit::Row(idx));

        let mut row_style = if is_active {
            Style::default()
                .fg(theme.active_row_fg)
                .bg(theme.active_row_bg)
        } else if hovered {
            Style::default().fg(theme.hover_fg).bg(theme.hover_bg)
        } else {
            Style::default().fg(theme.popup_text_fg)
        };
        if highlighted {
            row_style = row_style.add_modifier(Modifier::BOLD);
        }

        let glyph = match engine.icon_kind() {
            EngineIcon::Image(_) => IMAGE_GLYPH,
            EngineIcon::Globe => GLOBE_GLYPH,
        };
        let marker = if highlighted { "▶" } else { " " };
        let name = truncate_to_width(&engine.name, name_width);
        let name_padding = " ".repeat(name_width.saturating_sub(str_width(&name)) + 2);
        let url = truncate_to_width(&engine.url, url_width);
        let url_padding = " ".repeat(url_width.saturating_sub(str_width(&url)));
        let check = if is_active { CHECK_GLYPH } else { " " };

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_fg)),
            Span::raw(glyph),
            Span::raw("  "),
            Span::raw(name),
            Span::raw(name_padding),
            Span::styled(url, Style::default().fg(theme.muted_fg)),
            Span::raw(url_padding),
            Span::styled(check, Style::default().fg(theme.accent_fg)),
        ]);
        frame.render_widget(Paragraph::new(line).style(row_style), row);
        layout.rows.push((idx, row));

        if can_delete && row.width >= 3 {
            let delete_area = Rect::new(row.x + row.width - 3, row.y, 3, 1);
            let mut delete_style = Style::default().fg(theme.danger_fg);
            if manager.hover_hit == Some(ManagerHit::DeleteButton(idx)) {
                delete_style = delete_style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(format!(" {} ", DELETE_GLYPH)).style(delete_style),
                delete_area,
            );
            layout.delete_buttons.push((idx, delete_area));
        }
    }
}

/// Glyph previewing the draft icon; blank once the host reports a load failure
fn icon_preview_glyph(manager: &SearchEngineManager) -> &'static str {
    if manager.icon.is_empty() {
        return GLOBE_GLYPH;
    }
    if manager.icon_preview_failed {
        return " ";
    }
    match EngineIcon::from_field(&manager.icon.value) {
        EngineIcon::Image(_) => IMAGE_GLYPH,
        EngineIcon::Globe => GLOBE_GLYPH,
    }
}

fn render_icon_row(
    frame: &mut Frame,
    row: Rect,
    manager: &SearchEngineManager,
    theme: &Theme,
    input_colors: &TextInputColors,
    layout: &mut ManagerLayout,
) {
    if row.height == 0 {
        return;
    }
    let fetch_width = manager.fetch_button.width();
    let input_area = Rect::new(row.x, row.y, row.width.saturating_sub(fetch_width + 3), 1);
    layout.icon = render_text_input(
        frame,
        input_area,
        &manager.icon,
        input_colors,
        Some(LABEL_WIDTH),
    );

    let preview_x = input_area.x + input_area.width + 1;
    frame.render_widget(
        Paragraph::new(icon_preview_glyph(manager)).style(Style::default().fg(theme.accent_fg)),
        Rect::new(preview_x, row.y, 1, 1),
    );

    layout.fetch = render_button(
        frame,
        Rect::new(preview_x + 2, row.y, fetch_width, 1),
        &manager.fetch_button,
        &ButtonColors::from_theme(theme),
    );
}

/// Render the delete confirmation dialog centered over `parent_area`
fn render_confirm_dialog(
    frame: &mut Frame,
    parent_area: Rect,
    dialog: &ConfirmDialogState,
    theme: &Theme,
    layout: &mut ManagerLayout,
) {
    // 2 borders + prompt + name + gap + buttons
    let dialog_width = 44.min(parent_area.width.saturating_sub(4));
    let dialog_height = 6.min(parent_area.height.saturating_sub(2));
    let dialog_area = Rect::new(
        parent_area.x + parent_area.width.saturating_sub(dialog_width) / 2,
        parent_area.y + parent_area.height.saturating_sub(dialog_height) / 2,
        dialog_width,
        dialog_height,
    );

    frame.render_widget(Clear, dialog_area);
    layout.confirm_area = Some(dialog_area);
    let block = Block::default()
        .title(" Delete Search Engine ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.warning_fg))
        .style(Style::default().bg(theme.popup_bg));
    frame.render_widget(block, dialog_area);

    if dialog_height < 6 {
        return;
    }

    let inner = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(2),
    );

    frame.render_widget(
        Paragraph::new(DELETE_PROMPT).style(Style::default().fg(theme.popup_text_fg)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    frame.render_widget(
        Paragraph::new(truncate_to_width(&dialog.engine_name, inner.width as usize)).style(
            Style::default()
                .fg(theme.popup_text_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    let button_y = dialog_area.y + dialog_area.height - 2;
    let options = ["Delete", "Cancel"];
    let total_width: u16 = options.iter().map(|o| o.len() as u16 + 5).sum::<u16>() + 2;
    let mut x = inner.x + inner.width.saturating_sub(total_width) / 2;

    for (idx, label) in options.iter().enumerate() {
        let is_selected = idx == dialog.selection;
        let button_width = label.len() as u16 + 5;

        let style = if is_selected {
            let fg = if idx == 0 {
                theme.danger_fg
            } else {
                theme.accent_fg
            };
            Style::default()
                .fg(fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.popup_text_fg)
        };
        let text = if is_selected {
            format!("▶[ {} ]", label)
        } else {
            format!(" [ {} ]", label)
        };

        let button_area = Rect::new(x, button_y, button_width, 1);
        frame.render_widget(Paragraph::new(text).style(style), button_area);
        if idx == 0 {
            layout.confirm_delete = Some(button_area);
        } else {
            layout.confirm_cancel = Some(button_area);
        }

        x += button_width + 2;
    }
}
