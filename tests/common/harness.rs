//! Test harness driving the search engine manager against a virtual terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use search_engines::app::EngineStore;
use search_engines::config::Config;
use search_engines::services::id_source::SequentialIdSource;
use search_engines::view::search_engines::{
    render_manager, EngineOwner, ManagerLayout, SearchEngineManager,
};
use search_engines::view::theme::Theme;
use std::io;
use std::path::PathBuf;

/// First id handed out to engines added during a test
pub const FIRST_TEST_ID: i64 = 1_000;

/// Host store, manager and a TestBackend terminal wired together
pub struct ManagerTestHarness {
    terminal: Terminal<TestBackend>,
    pub store: EngineStore,
    pub manager: SearchEngineManager,
    layout: Option<ManagerLayout>,
    theme: Theme,
}

impl ManagerTestHarness {
    /// Harness with the default engines, kept in memory
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(width, height, Config::default(), None)
    }

    pub fn with_config(
        width: u16,
        height: u16,
        config: Config,
        save_path: Option<PathBuf>,
    ) -> io::Result<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let auto_fetch = config.manager.auto_fetch_icon;
        Ok(Self {
            terminal,
            store: EngineStore::new(config, save_path),
            manager: SearchEngineManager::new(SequentialIdSource::shared(FIRST_TEST_ID))
                .with_auto_fetch(auto_fetch),
            layout: None,
            theme: Theme::default(),
        })
    }

    pub fn open_manager(&mut self) {
        self.store.manager_open = true;
        self.manager.open(&self.store.props());
    }

    pub fn render(&mut self) -> io::Result<()> {
        let store = &self.store;
        let manager = &mut self.manager;
        let theme = &self.theme;
        let mut layout = None;
        self.terminal.draw(|frame| {
            layout = render_manager(frame, frame.area(), manager, &store.props(), theme);
        })?;
        self.layout = layout;
        Ok(())
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let events = self
            .manager
            .handle_key(KeyEvent::new(code, modifiers), &self.store.props());
        self.store.apply(events);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.manager.handle_paste(text, &self.store.props());
    }

    fn send_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        let Some(layout) = self.layout.clone() else {
            return;
        };
        let event = MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        let events = self.manager.handle_mouse(event, &self.store.props(), &layout);
        self.store.apply(events);
    }

    /// Press and release the left button at `(x, y)`
    pub fn mouse_click(&mut self, x: u16, y: u16) {
        self.send_mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        self.send_mouse(MouseEventKind::Up(MouseButton::Left), x, y);
    }

    /// Click the first column of `area`
    pub fn click_area(&mut self, area: Rect) {
        self.mouse_click(area.x, area.y);
    }

    pub fn mouse_move(&mut self, x: u16, y: u16) {
        self.send_mouse(MouseEventKind::Moved, x, y);
    }

    /// Layout from the last render; panics when the modal was closed
    pub fn layout(&self) -> &ManagerLayout {
        self.layout
            .as_ref()
            .expect("manager was not rendered open")
    }

    pub fn is_rendered(&self) -> bool {
        self.layout.is_some()
    }

    pub fn screen_to_string(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Text of screen row `y`
    pub fn screen_row(&self, y: u16) -> String {
        self.screen_to_string()
            .lines()
            .nth(y as usize)
            .unwrap_or_default()
            .to_string()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }
}
