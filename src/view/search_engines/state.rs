//! Search engine manager state
//!
//! Holds the transient draft form and the list cursor. The engine list itself
//! always comes from [`ManagerProps`]; every change leaves as a [`ManagerEvent`].

use super::{ConfirmPrompt, DialogAnswer, ManagerEvent, ManagerHit, ManagerProps};
use crate::model::{normalize_url, SearchEngine, GLOBE_ICON};
use crate::services::favicon::favicon_url_for;
use crate::services::id_source::SharedIdSource;
use crate::view::controls::{ButtonState, FocusState, TextInputState, ToggleState};

/// Question asked before deleting an engine
pub const DELETE_PROMPT: &str = "Delete this search engine?";

/// Focusable parts of the modal, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    List,
    Name,
    Url,
    Icon,
    FetchButton,
    AutoFetch,
    AddButton,
}

const FOCUS_ORDER: [FocusTarget; 7] = [
    FocusTarget::List,
    FocusTarget::Name,
    FocusTarget::Url,
    FocusTarget::Icon,
    FocusTarget::FetchButton,
    FocusTarget::AutoFetch,
    FocusTarget::AddButton,
];

impl FocusTarget {
    fn index(self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default()
    }
}

/// Pending delete waiting for the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub engine_id: String,
    pub engine_name: String,
    /// 0 = Delete, 1 = Cancel
    pub selection: usize,
}

/// State of the search engine manager modal
#[derive(Debug)]
pub struct SearchEngineManager {
    /// Draft name of the engine being added
    pub name: TextInputState,
    /// Draft query-template URL
    pub url: TextInputState,
    /// Draft icon URL; empty means the globe glyph
    pub icon: TextInputState,
    /// Fetch the icon when focus leaves the URL field
    pub auto_fetch: ToggleState,
    pub fetch_button: ButtonState,
    pub add_button: ButtonState,
    pub close_button: ButtonState,
    /// Focused part of the modal
    pub focus: FocusTarget,
    /// Highlighted row in the engine list
    pub highlighted: usize,
    /// First visible row in the engine list
    pub scroll_offset: usize,
    /// Number of rows the list showed on the last render
    pub list_viewport: usize,
    /// Delete confirmation dialog, when showing
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// The host failed to load the draft icon preview
    pub icon_preview_failed: bool,
    /// Element under the mouse
    pub hover_hit: Option<ManagerHit>,
    /// Scroll the highlight into view once the list height is known
    pub(super) scroll_to_highlight: bool,
    auto_fetch_default: bool,
    ids: SharedIdSource,
}

impl SearchEngineManager {
    /// Create a manager with an empty draft form
    pub fn new(ids: SharedIdSource) -> Self {
        let mut manager = Self {
            name: TextInputState::new("Name").with_placeholder("e.g. Google"),
            url: TextInputState::new("Search URL")
                .with_placeholder("e.g. https://www.google.com/search?q="),
            icon: TextInputState::new("Icon URL").with_placeholder("https://..."),
            auto_fetch: ToggleState::new(true, "Fetch icon automatically from the search URL"),
            fetch_button: ButtonState::new("Fetch"),
            add_button: ButtonState::new("Add search engine"),
            close_button: ButtonState::new("x"),
            focus: FocusTarget::List,
            highlighted: 0,
            scroll_offset: 0,
            list_viewport: 0,
            confirm_dialog: None,
            icon_preview_failed: false,
            hover_hit: None,
            scroll_to_highlight: false,
            auto_fetch_default: true,
            ids,
        };
        manager.update_focus_states();
        manager
    }

    /// Set the initial state of the auto-fetch checkbox
    pub fn with_auto_fetch(mut self, enabled: bool) -> Self {
        self.auto_fetch_default = enabled;
        self.auto_fetch.checked = enabled;
        self
    }

    /// Both name and URL are filled in
    pub fn can_add(&self) -> bool {
        !self.name.is_empty() && !self.url.is_empty()
    }

    /// Prepare for a fresh open: highlight the active engine
    pub fn open(&mut self, props: &ManagerProps) {
        self.highlighted = props
            .engines
            .iter()
            .position(|e| e.id == props.active_engine_id)
            .unwrap_or(0);
        self.scroll_offset = 0;
        self.scroll_to_highlight = true;
        self.set_focus(FocusTarget::List);
    }

    /// Dismiss the modal, discarding the draft form
    pub fn close(&mut self) -> Vec<ManagerEvent> {
        tracing::debug!("Closing search engine manager");
        self.reset_draft();
        vec![ManagerEvent::Close]
    }

    fn reset_draft(&mut self) {
        self.name.clear();
        self.url.clear();
        self.icon.clear();
        self.auto_fetch.checked = self.auto_fetch_default;
        self.icon_preview_failed = false;
        self.confirm_dialog = None;
        self.focus = FocusTarget::List;
        self.update_focus_states();
    }

    /// Make the engine with `id` active
    pub fn select(&self, id: &str) -> Vec<ManagerEvent> {
        tracing::debug!("Selecting search engine {}", id);
        vec![ManagerEvent::SelectEngine(id.to_string())]
    }

    /// Append the draft as a new engine
    ///
    /// A no-op unless both name and URL are filled in. On success the draft
    /// name, URL and icon are cleared.
    pub fn handle_add(&mut self, props: &ManagerProps) -> Vec<ManagerEvent> {
        if !self.can_add() {
            return Vec::new();
        }

        let icon = if self.icon.is_empty() {
            GLOBE_ICON.to_string()
        } else {
            self.icon.value.clone()
        };
        let engine = SearchEngine {
            id: self.ids.next_id(),
            name: self.name.value.clone(),
            url: normalize_url(&self.url.value),
            icon,
        };
        tracing::debug!("Adding search engine {:?} ({})", engine.name, engine.id);

        let mut engines = props.engines.to_vec();
        engines.push(engine);

        self.name.clear();
        self.url.clear();
        self.icon.clear();
        self.icon_preview_failed = false;
        self.update_focus_states();

        vec![ManagerEvent::UpdateEngines(engines)]
    }

    /// Remove the engine with `id` after asking `prompt`
    ///
    /// When the removed engine was active, the first remaining engine becomes
    /// active. Nothing here prevents emptying the list; the UI only offers
    /// deletion while more than one engine exists.
    pub fn handle_delete(
        &self,
        id: &str,
        props: &ManagerProps,
        prompt: &mut dyn ConfirmPrompt,
    ) -> Vec<ManagerEvent> {
        if !prompt.confirm(DELETE_PROMPT) {
            tracing::debug!("Delete of search engine {} declined", id);
            return Vec::new();
        }

        let updated: Vec<SearchEngine> = props
            .engines
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        tracing::debug!(
            "Deleting search engine {} ({} remaining)",
            id,
            updated.len()
        );

        let repair = if id == props.active_engine_id {
            updated.first().map(|e| e.id.clone())
        } else {
            None
        };

        let mut events = vec![ManagerEvent::UpdateEngines(updated)];
        if let Some(first_id) = repair {
            events.push(ManagerEvent::SelectEngine(first_id));
        }
        events
    }

    /// Open the delete confirmation dialog for `id`
    ///
    /// Refused while only one engine remains. Returns whether the dialog opened.
    pub fn request_delete(&mut self, id: &str, props: &ManagerProps) -> bool {
        if props.engines.len() <= 1 {
            tracing::debug!("Refusing to delete the last search engine");
            return false;
        }
        let Some(engine) = props.engines.iter().find(|e| e.id == id) else {
            return false;
        };
        self.confirm_dialog = Some(ConfirmDialogState {
            engine_id: engine.id.clone(),
            engine_name: engine.name.clone(),
            selection: 0,
        });
        true
    }

    /// Close the confirmation dialog with the user's answer
    ///
    /// The highlight is kept within the shortened list.
    pub fn answer_confirm(&mut self, yes: bool, props: &ManagerProps) -> Vec<ManagerEvent> {
        let Some(dialog) = self.confirm_dialog.take() else {
            return Vec::new();
        };
        let events = self.handle_delete(&dialog.engine_id, props, &mut DialogAnswer(yes));
        if let Some(ManagerEvent::UpdateEngines(remaining)) = events.first() {
            self.ensure_highlight_visible(remaining.len());
        }
        events
    }

    /// Fill the draft icon with the favicon service URL for `target_url`
    ///
    /// Empty or unparseable input leaves the icon untouched.
    pub fn fetch_icon_from_url(&mut self, target_url: &str) {
        if let Some(icon_url) = favicon_url_for(target_url) {
            tracing::debug!("Resolved icon URL {}", icon_url);
            self.icon.set_value(icon_url);
            self.icon_preview_failed = false;
        }
    }

    /// Focus left the URL field
    ///
    /// Fetches the icon only when auto-fetch is on, a URL was typed, and the
    /// icon field is still empty, so manual icons are never overwritten.
    pub fn handle_url_blur(&mut self) {
        if self.auto_fetch.checked && !self.url.is_empty() && self.icon.is_empty() {
            let target = self.url.value.clone();
            self.fetch_icon_from_url(&target);
        }
    }

    /// The host could not load the draft icon preview; hide it
    pub fn report_icon_preview_error(&mut self) {
        if !self.icon_preview_failed {
            tracing::debug!("Icon preview failed to load: {}", self.icon.value);
        }
        self.icon_preview_failed = true;
    }

    /// Move focus, running the URL blur policy when leaving the URL field
    pub fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == FocusTarget::Url && target != FocusTarget::Url {
            self.handle_url_blur();
        }
        self.focus = target;
        self.update_focus_states();
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FOCUS_ORDER.len();
        self.set_focus(FOCUS_ORDER[next]);
    }

    pub fn focus_prev(&mut self) {
        let idx = self.focus.index();
        let prev = if idx == 0 { FOCUS_ORDER.len() - 1 } else { idx - 1 };
        self.set_focus(FOCUS_ORDER[prev]);
    }

    /// The draft text input that has focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInputState> {
        match self.focus {
            FocusTarget::Name => Some(&mut self.name),
            FocusTarget::Url => Some(&mut self.url),
            FocusTarget::Icon => Some(&mut self.icon),
            _ => None,
        }
    }

    /// Move the list highlight by `delta` rows
    pub fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        let current = self.highlighted.min(len - 1) as isize;
        self.highlighted = (current + delta).clamp(0, len as isize - 1) as usize;
        self.ensure_highlight_visible(len);
    }

    /// Adjust the scroll offset so the highlighted row is on screen
    pub fn ensure_highlight_visible(&mut self, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            self.scroll_offset = 0;
            return;
        }
        self.highlighted = self.highlighted.min(len - 1);
        let viewport = self.list_viewport.max(1);
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + viewport {
            self.scroll_offset = self.highlighted + 1 - viewport;
        }
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(viewport));
    }

    /// Sync control focus states with `focus` and the add precondition
    ///
    /// Hover highlights on unfocused controls are kept.
    pub fn update_focus_states(&mut self) {
        let focus = self.focus;
        let state_for = |target: FocusTarget, current: FocusState| {
            if focus == target {
                FocusState::Focused
            } else if current == FocusState::Hovered {
                FocusState::Hovered
            } else {
                FocusState::Normal
            }
        };

        self.name.focus = state_for(FocusTarget::Name, self.name.focus);
        self.url.focus = state_for(FocusTarget::Url, self.url.focus);
        self.icon.focus = state_for(FocusTarget::Icon, self.icon.focus);
        self.fetch_button.focus = state_for(FocusTarget::FetchButton, self.fetch_button.focus);
        self.auto_fetch.focus = state_for(FocusTarget::AutoFetch, self.auto_fetch.focus);
        self.add_button.focus = state_for(FocusTarget::AddButton, self.add_button.focus);
        self.add_button.set_enabled(self.can_add());
    }
}
