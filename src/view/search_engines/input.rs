//! Keyboard, mouse and paste handling for the search engine manager

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{
    FocusTarget, ManagerEvent, ManagerHit, ManagerLayout, ManagerProps, SearchEngineManager,
};
use crate::view::controls::{ButtonEvent, TextInputEvent};

impl SearchEngineManager {
    /// Handle a key press while the modal is open
    pub fn handle_key(&mut self, key: KeyEvent, props: &ManagerProps) -> Vec<ManagerEvent> {
        if !props.is_open {
            return Vec::new();
        }
        if self.confirm_dialog.is_some() {
            return self.handle_confirm_key(key, props);
        }

        match key.code {
            KeyCode::Esc => return self.close(),
            KeyCode::Tab => {
                self.focus_next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return Vec::new();
            }
            _ => {}
        }

        let events = match self.focus {
            FocusTarget::List => self.handle_list_key(key, props),
            FocusTarget::Name | FocusTarget::Url | FocusTarget::Icon => {
                self.handle_input_key(key);
                Vec::new()
            }
            FocusTarget::FetchButton => {
                if self.fetch_button.handle_key(key) == Some(ButtonEvent::Clicked) {
                    let target = self.url.value.clone();
                    self.fetch_icon_from_url(&target);
                }
                Vec::new()
            }
            FocusTarget::AutoFetch => {
                self.auto_fetch.handle_key(key);
                Vec::new()
            }
            FocusTarget::AddButton => {
                if self.add_button.handle_key(key) == Some(ButtonEvent::Clicked) {
                    self.handle_add(props)
                } else {
                    Vec::new()
                }
            }
        };
        self.update_focus_states();
        events
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, props: &ManagerProps) -> Vec<ManagerEvent> {
        let Some(dialog) = self.confirm_dialog.as_mut() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer_confirm(true, props),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.answer_confirm(false, props)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                dialog.selection = 1 - dialog.selection.min(1);
                Vec::new()
            }
            KeyCode::Enter => {
                let yes = dialog.selection == 0;
                self.answer_confirm(yes, props)
            }
            _ => Vec::new(),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, props: &ManagerProps) -> Vec<ManagerEvent> {
        let len = props.engines.len();
        // The owner may have shortened the list since the last key
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
        match key.code {
            KeyCode::Up => self.move_highlight(-1, len),
            KeyCode::Down => self.move_highlight(1, len),
            KeyCode::PageUp => self.move_highlight(-(self.list_viewport.max(1) as isize), len),
            KeyCode::PageDown => self.move_highlight(self.list_viewport.max(1) as isize, len),
            KeyCode::Home => self.move_highlight(-(len as isize), len),
            KeyCode::End => self.move_highlight(len as isize, len),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(engine) = props.engines.get(self.highlighted) {
                    return self.select(&engine.id);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(engine) = props.engines.get(self.highlighted) {
                    let id = engine.id.clone();
                    self.request_delete(&id, props);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let editing_icon = self.focus == FocusTarget::Icon;
        let Some(input) = self.focused_input_mut() else {
            return;
        };
        match input.handle_key(key) {
            Some(TextInputEvent::Submitted(_)) => self.focus_next(),
            Some(TextInputEvent::Changed(_)) if editing_icon => self.icon_preview_failed = false,
            _ => {}
        }
    }

    /// Insert pasted text into the focused input
    pub fn handle_paste(&mut self, text: &str, props: &ManagerProps) {
        if !props.is_open || self.confirm_dialog.is_some() {
            return;
        }
        let editing_icon = self.focus == FocusTarget::Icon;
        if let Some(input) = self.focused_input_mut() {
            input.insert_str(text);
            if editing_icon {
                self.icon_preview_failed = false;
            }
            self.update_focus_states();
        }
    }

    /// Handle a mouse event against the layout from the last render
    ///
    /// Clicking outside the modal does nothing; only the close button and Esc
    /// dismiss it.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        props: &ManagerProps,
        layout: &ManagerLayout,
    ) -> Vec<ManagerEvent> {
        if !props.is_open {
            return Vec::new();
        }
        let hit = layout.hit_test(event.column, event.row);

        match event.kind {
            MouseEventKind::Moved => {
                self.update_hover(event, hit, layout);
                Vec::new()
            }
            MouseEventKind::ScrollUp if layout.is_in_list(event.column, event.row) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Vec::new()
            }
            MouseEventKind::ScrollDown if layout.is_in_list(event.column, event.row) => {
                let max = props.engines.len().saturating_sub(self.list_viewport.max(1));
                self.scroll_offset = (self.scroll_offset + 1).min(max);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_mouse_down(event, hit, props, layout),
            MouseEventKind::Up(MouseButton::Left) => self.handle_mouse_up(event, props, layout),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_down(
        &mut self,
        event: MouseEvent,
        hit: Option<ManagerHit>,
        props: &ManagerProps,
        layout: &ManagerLayout,
    ) -> Vec<ManagerEvent> {
        let Some(hit) = hit else {
            return Vec::new();
        };

        let events = match hit {
            ManagerHit::ConfirmDelete => self.answer_confirm(true, props),
            ManagerHit::ConfirmCancel => self.answer_confirm(false, props),
            ManagerHit::Row(idx) => {
                self.highlighted = idx;
                self.set_focus(FocusTarget::List);
                match props.engines.get(idx) {
                    Some(engine) => self.select(&engine.id),
                    None => Vec::new(),
                }
            }
            ManagerHit::DeleteButton(idx) => {
                self.highlighted = idx;
                self.set_focus(FocusTarget::List);
                if let Some(engine) = props.engines.get(idx) {
                    let id = engine.id.clone();
                    self.request_delete(&id, props);
                }
                Vec::new()
            }
            ManagerHit::NameInput => self.focus_input_at(FocusTarget::Name, event, layout),
            ManagerHit::UrlInput => self.focus_input_at(FocusTarget::Url, event, layout),
            ManagerHit::IconInput => self.focus_input_at(FocusTarget::Icon, event, layout),
            ManagerHit::AutoFetch => {
                self.set_focus(FocusTarget::AutoFetch);
                self.auto_fetch.handle_mouse(event, &layout.auto_fetch);
                Vec::new()
            }
            ManagerHit::FetchButton => {
                self.set_focus(FocusTarget::FetchButton);
                self.fetch_button.handle_mouse(event, &layout.fetch);
                Vec::new()
            }
            ManagerHit::AddButton => {
                self.set_focus(FocusTarget::AddButton);
                self.add_button.handle_mouse(event, &layout.add);
                Vec::new()
            }
            ManagerHit::CloseButton => {
                self.close_button.handle_mouse(event, &layout.close);
                Vec::new()
            }
            ManagerHit::Background => Vec::new(),
        };
        self.update_focus_states();
        events
    }

    fn focus_input_at(
        &mut self,
        target: FocusTarget,
        event: MouseEvent,
        layout: &ManagerLayout,
    ) -> Vec<ManagerEvent> {
        self.set_focus(target);
        let input_layout = match target {
            FocusTarget::Name => layout.name,
            FocusTarget::Url => layout.url,
            _ => layout.icon,
        };
        // Clicking at or past the text end puts the cursor at the end
        if input_layout.is_input(event.column, event.row) {
            if let Some(input) = self.focused_input_mut() {
                input.move_end();
            }
        }
        Vec::new()
    }

    fn handle_mouse_up(
        &mut self,
        event: MouseEvent,
        props: &ManagerProps,
        layout: &ManagerLayout,
    ) -> Vec<ManagerEvent> {
        if self.close_button.handle_mouse(event, &layout.close) == Some(ButtonEvent::Clicked) {
            return self.close();
        }
        if self.fetch_button.handle_mouse(event, &layout.fetch) == Some(ButtonEvent::Clicked) {
            let target = self.url.value.clone();
            self.fetch_icon_from_url(&target);
            return Vec::new();
        }
        if self.add_button.handle_mouse(event, &layout.add) == Some(ButtonEvent::Clicked) {
            let events = self.handle_add(props);
            self.update_focus_states();
            return events;
        }
        Vec::new()
    }

    fn update_hover(&mut self, event: MouseEvent, hit: Option<ManagerHit>, layout: &ManagerLayout) {
        self.hover_hit = match hit {
            Some(ManagerHit::Background) => None,
            other => other,
        };
        if self.confirm_dialog.is_some() {
            return;
        }
        self.close_button.handle_mouse(event, &layout.close);
        self.fetch_button.handle_mouse(event, &layout.fetch);
        self.add_button.handle_mouse(event, &layout.add);
        self.auto_fetch.handle_mouse(event, &layout.auto_fetch);
        self.name.handle_mouse(event, &layout.name);
        self.url.handle_mouse(event, &layout.url);
        self.icon.handle_mouse(event, &layout.icon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SearchEngine, GLOBE_ICON};
    use crate::services::id_source::SequentialIdSource;
    use crate::view::controls::FocusState;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn engines() -> Vec<SearchEngine> {
        vec![
            SearchEngine::new("g", "Google", "https://www.google.com/search?q=", GLOBE_ICON),
            SearchEngine::new("b", "Bing", "https://www.bing.com/search?q=", GLOBE_ICON),
        ]
    }

    fn props(engines: &[SearchEngine]) -> ManagerProps<'_> {
        ManagerProps {
            is_open: true,
            engines,
            active_engine_id: "g",
        }
    }

    fn manager() -> SearchEngineManager {
        SearchEngineManager::new(SequentialIdSource::shared(100))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn type_text(m: &mut SearchEngineManager, text: &str, props: &ManagerProps) {
        for c in text.chars() {
            m.handle_key(key(KeyCode::Char(c)), props);
        }
    }

    #[test]
    fn test_enter_after_list_shrinks_selects_last_row() {
        let list = engines();
        let mut m = manager();
        m.highlighted = 5;

        let events = m.handle_key(key(KeyCode::Enter), &props(&list));
        assert_eq!(events, vec![ManagerEvent::SelectEngine("b".to_string())]);
        assert_eq!(m.highlighted, 1);
    }

    fn sample_layout() -> ManagerLayout {
        ManagerLayout {
            modal_area: Rect::new(0, 0, 60, 20),
            list_area: Rect::new(2, 2, 56, 2),
            rows: vec![(0, Rect::new(2, 2, 56, 1)), (1, Rect::new(2, 3, 56, 1))],
            delete_buttons: vec![(0, Rect::new(55, 2, 3, 1)), (1, Rect::new(55, 3, 3, 1))],
            close: crate::view::controls::ButtonLayout {
                button_area: Rect::new(54, 0, 5, 1),
            },
            add: crate::view::controls::ButtonLayout {
                button_area: Rect::new(2, 17, 21, 1),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_closed_modal_ignores_input() {
        let list = engines();
        let closed = ManagerProps {
            is_open: false,
            ..props(&list)
        };
        let mut m = manager();
        assert!(m.handle_key(key(KeyCode::Esc), &closed).is_empty());
        m.handle_paste("text", &closed);
        assert!(m
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), &closed, &sample_layout())
            .is_empty());
    }

    #[test]
    fn test_escape_closes() {
        let list = engines();
        let mut m = manager();
        assert_eq!(m.handle_key(key(KeyCode::Esc), &props(&list)), vec![ManagerEvent::Close]);
    }

    #[test]
    fn test_keyboard_add_flow() {
        let list = engines();
        let p = props(&list);
        let mut m = manager().with_auto_fetch(false);

        m.handle_key(key(KeyCode::Tab), &p);
        assert_eq!(m.focus, FocusTarget::Name);
        type_text(&mut m, "Brave", &p);
        m.handle_key(key(KeyCode::Enter), &p);
        assert_eq!(m.focus, FocusTarget::Url);
        type_text(&mut m, "search.brave.com/search?q=", &p);

        m.set_focus(FocusTarget::AddButton);
        assert!(m.add_button.is_enabled());
        let events = m.handle_key(key(KeyCode::Enter), &p);

        match events.as_slice() {
            [ManagerEvent::UpdateEngines(updated)] => {
                assert_eq!(updated.len(), 3);
                assert_eq!(updated[2].name, "Brave");
                assert_eq!(updated[2].url, "https://search.brave.com/search?q=");
                assert_eq!(updated[2].icon, GLOBE_ICON);
            }
            other => panic!("unexpected events {:?}", other),
        }
        assert!(!m.add_button.is_enabled());
    }

    #[test]
    fn test_tab_out_of_url_fetches_icon() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        m.set_focus(FocusTarget::Url);
        type_text(&mut m, "www.ecosia.org/search?q=", &p);
        m.handle_key(key(KeyCode::Tab), &p);

        assert_eq!(m.focus, FocusTarget::Icon);
        assert!(m.icon.value.contains("www.ecosia.org"));
    }

    #[test]
    fn test_editing_icon_clears_preview_error() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        m.set_focus(FocusTarget::Icon);
        m.report_icon_preview_error();
        type_text(&mut m, "h", &p);
        assert!(!m.icon_preview_failed);
    }

    #[test]
    fn test_list_navigation_and_select() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();

        m.handle_key(key(KeyCode::Down), &p);
        assert_eq!(m.highlighted, 1);
        m.handle_key(key(KeyCode::Down), &p);
        assert_eq!(m.highlighted, 1);

        let events = m.handle_key(key(KeyCode::Enter), &p);
        assert_eq!(events, vec![ManagerEvent::SelectEngine("b".to_string())]);
    }

    #[test]
    fn test_delete_key_opens_dialog_and_y_confirms() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();

        assert!(m.handle_key(key(KeyCode::Char('d')), &p).is_empty());
        assert!(m.confirm_dialog.is_some());

        // Other keys are swallowed while the dialog shows
        assert!(m.handle_key(key(KeyCode::Down), &p).is_empty());
        assert_eq!(m.highlighted, 0);

        let events = m.handle_key(key(KeyCode::Char('y')), &p);
        assert_eq!(
            events,
            vec![
                ManagerEvent::UpdateEngines(vec![list[1].clone()]),
                ManagerEvent::SelectEngine("b".to_string()),
            ]
        );
        assert!(m.confirm_dialog.is_none());
    }

    #[test]
    fn test_dialog_escape_cancels() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        m.request_delete("b", &p);

        assert!(m.handle_key(key(KeyCode::Esc), &p).is_empty());
        assert!(m.confirm_dialog.is_none());
    }

    #[test]
    fn test_dialog_enter_uses_selection() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        m.request_delete("b", &p);

        m.handle_key(key(KeyCode::Right), &p);
        assert_eq!(m.confirm_dialog.as_ref().map(|d| d.selection), Some(1));
        assert!(m.handle_key(key(KeyCode::Enter), &p).is_empty());
    }

    #[test]
    fn test_paste_into_focused_input() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();

        m.handle_paste("ignored", &p);
        assert!(m.name.is_empty());

        m.set_focus(FocusTarget::Url);
        m.handle_paste("https://kagi.com/search?q=\n", &p);
        assert_eq!(m.url.value, "https://kagi.com/search?q=");
    }

    #[test]
    fn test_click_row_selects() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        let events = m.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 10, 3),
            &p,
            &sample_layout(),
        );
        assert_eq!(events, vec![ManagerEvent::SelectEngine("b".to_string())]);
        assert_eq!(m.highlighted, 1);
    }

    #[test]
    fn test_click_delete_does_not_select() {
        let list = engines();
        let p = props(&list);
        let mut m = manager();
        let events = m.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 56, 3),
            &p,
            &sample_layout(),
        );
        assert!(events.is_empty());
        assert_eq!(m.confirm_dialog.as_ref().map(|d| d.engine_id.as_str()), Some("b"));
    }

    #[test]
    fn test_close_button_fires_on_release() {
        let list = engines();
        let p = props(&list);
        let layout = sample_layout();
        let mut m = manager();

        let down = m.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 55, 0), &p, &layout);
        assert!(down.is_empty());
        let up = m.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 55, 0), &p, &layout);
        assert_eq!(up, vec![ManagerEvent::Close]);
    }

    #[test]
    fn test_click_outside_does_not_close() {
        let list = engines();
        let p = props(&list);
        let layout = sample_layout();
        let mut m = manager();

        for kind in [
            MouseEventKind::Down(MouseButton::Left),
            MouseEventKind::Up(MouseButton::Left),
        ] {
            assert!(m.handle_mouse(mouse(kind, 70, 25), &p, &layout).is_empty());
        }
    }

    #[test]
    fn test_disabled_add_button_click_does_nothing() {
        let list = engines();
        let p = props(&list);
        let layout = sample_layout();
        let mut m = manager();

        m.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 17), &p, &layout);
        let up = m.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 17), &p, &layout);
        assert!(up.is_empty());
    }

    #[test]
    fn test_hover_tracks_rows() {
        let list = engines();
        let p = props(&list);
        let layout = sample_layout();
        let mut m = manager();

        m.handle_mouse(mouse(MouseEventKind::Moved, 10, 2), &p, &layout);
        assert_eq!(m.hover_hit, Some(ManagerHit::Row(0)));
        m.handle_mouse(mouse(MouseEventKind::Moved, 10, 10), &p, &layout);
        assert_eq!(m.hover_hit, None);
        m.handle_mouse(mouse(MouseEventKind::Moved, 55, 0), &p, &layout);
        assert_eq!(m.close_button.focus, FocusState::Hovered);
    }

    #[test]
    fn test_scroll_wheel_in_list() {
        let engines: Vec<SearchEngine> = (0..5)
            .map(|i| SearchEngine::new(i.to_string(), "E", "e.com", GLOBE_ICON))
            .collect();
        let p = props(&engines);
        let layout = sample_layout();
        let mut m = manager();
        m.list_viewport = 2;

        for _ in 0..5 {
            m.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 2), &p, &layout);
        }
        assert_eq!(m.scroll_offset, 3);
        m.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 2), &p, &layout);
        assert_eq!(m.scroll_offset, 2);
    }
}
