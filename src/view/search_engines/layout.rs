//! Hit testing for the search engine manager

use ratatui::layout::Rect;

use crate::view::controls::{rect_contains as contains, ButtonLayout, TextInputLayout, ToggleLayout};

/// Layout of the manager modal from the last render
#[derive(Debug, Clone, Default)]
pub struct ManagerLayout {
    /// Whole modal including the border
    pub modal_area: Rect,
    /// Area the engine rows scroll inside
    pub list_area: Rect,
    /// Visible rows: (engine index, row area)
    pub rows: Vec<(usize, Rect)>,
    /// Delete affordances: (engine index, button area)
    pub delete_buttons: Vec<(usize, Rect)>,
    pub close: ButtonLayout,
    pub name: TextInputLayout,
    pub url: TextInputLayout,
    pub icon: TextInputLayout,
    pub fetch: ButtonLayout,
    pub auto_fetch: ToggleLayout,
    pub add: ButtonLayout,
    /// Confirmation dialog, when showing; blocks everything beneath it
    pub confirm_area: Option<Rect>,
    /// Delete button of the confirmation dialog, when showing
    pub confirm_delete: Option<Rect>,
    /// Cancel button of the confirmation dialog, when showing
    pub confirm_cancel: Option<Rect>,
}

/// What a screen position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerHit {
    Row(usize),
    DeleteButton(usize),
    CloseButton,
    NameInput,
    UrlInput,
    IconInput,
    FetchButton,
    AutoFetch,
    AddButton,
    ConfirmDelete,
    ConfirmCancel,
    /// Inside the modal but on nothing interactive
    Background,
}

impl ManagerLayout {
    /// Find what is at `(x, y)`; `None` means outside the modal
    ///
    /// While the confirmation dialog shows only its buttons are reachable.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ManagerHit> {
        if self.confirm_area.is_some() {
            if self.confirm_delete.is_some_and(|r| contains(r, x, y)) {
                return Some(ManagerHit::ConfirmDelete);
            }
            if self.confirm_cancel.is_some_and(|r| contains(r, x, y)) {
                return Some(ManagerHit::ConfirmCancel);
            }
            let inside = contains(self.modal_area, x, y)
                || self.confirm_area.is_some_and(|r| contains(r, x, y));
            return inside.then_some(ManagerHit::Background);
        }

        if !contains(self.modal_area, x, y) {
            return None;
        }
        if self.close.contains(x, y) {
            return Some(ManagerHit::CloseButton);
        }

        // Delete buttons sit inside their rows
        if let Some((idx, _)) = self.delete_buttons.iter().find(|(_, r)| contains(*r, x, y)) {
            return Some(ManagerHit::DeleteButton(*idx));
        }
        if let Some((idx, _)) = self.rows.iter().find(|(_, r)| contains(*r, x, y)) {
            return Some(ManagerHit::Row(*idx));
        }

        let hit = if self.name.contains(x, y) {
            ManagerHit::NameInput
        } else if self.url.contains(x, y) {
            ManagerHit::UrlInput
        } else if self.icon.contains(x, y) {
            ManagerHit::IconInput
        } else if self.fetch.contains(x, y) {
            ManagerHit::FetchButton
        } else if self.auto_fetch.contains(x, y) {
            ManagerHit::AutoFetch
        } else if self.add.contains(x, y) {
            ManagerHit::AddButton
        } else {
            ManagerHit::Background
        };
        Some(hit)
    }

    /// Whether `(x, y)` is over the scrollable engine list
    pub fn is_in_list(&self, x: u16, y: u16) -> bool {
        contains(self.list_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> ManagerLayout {
        ManagerLayout {
            modal_area: Rect::new(0, 0, 40, 20),
            list_area: Rect::new(1, 2, 38, 3),
            rows: vec![
                (0, Rect::new(1, 2, 38, 1)),
                (1, Rect::new(1, 3, 38, 1)),
                (2, Rect::new(1, 4, 38, 1)),
            ],
            delete_buttons: vec![(1, Rect::new(35, 3, 3, 1)), (2, Rect::new(35, 4, 3, 1))],
            close: ButtonLayout {
                button_area: Rect::new(34, 0, 5, 1),
            },
            add: ButtonLayout {
                button_area: Rect::new(2, 15, 21, 1),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_delete_button_wins_over_row() {
        let layout = sample_layout();
        assert_eq!(layout.hit_test(36, 3), Some(ManagerHit::DeleteButton(1)));
        assert_eq!(layout.hit_test(10, 3), Some(ManagerHit::Row(1)));
    }

    #[test]
    fn test_outside_and_background() {
        let layout = sample_layout();
        assert_eq!(layout.hit_test(50, 3), None);
        assert_eq!(layout.hit_test(5, 10), Some(ManagerHit::Background));
        assert_eq!(layout.hit_test(35, 0), Some(ManagerHit::CloseButton));
        assert_eq!(layout.hit_test(5, 15), Some(ManagerHit::AddButton));
    }

    #[test]
    fn test_confirm_dialog_blocks_other_hits() {
        let mut layout = sample_layout();
        layout.confirm_area = Some(Rect::new(8, 5, 26, 6));
        layout.confirm_delete = Some(Rect::new(10, 8, 10, 1));
        layout.confirm_cancel = Some(Rect::new(22, 8, 10, 1));

        assert_eq!(layout.hit_test(12, 8), Some(ManagerHit::ConfirmDelete));
        assert_eq!(layout.hit_test(25, 8), Some(ManagerHit::ConfirmCancel));
        assert_eq!(layout.hit_test(36, 3), Some(ManagerHit::Background));
        assert_eq!(layout.hit_test(60, 8), None);
    }

    #[test]
    fn test_dialog_without_buttons_still_blocks() {
        let mut layout = sample_layout();
        layout.confirm_area = Some(Rect::new(0, 0, 40, 4));

        assert_eq!(layout.hit_test(35, 0), Some(ManagerHit::Background));
        assert_eq!(layout.hit_test(36, 3), Some(ManagerHit::Background));
        assert_eq!(layout.hit_test(50, 3), None);
    }

    #[test]
    fn test_is_in_list() {
        let layout = sample_layout();
        assert!(layout.is_in_list(5, 2));
        assert!(!layout.is_in_list(5, 5));
    }
}
