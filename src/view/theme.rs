use ratatui::style::Color;

/// Colors used by the modal and its controls
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    /// Background of the screen behind the modal
    pub screen_bg: Color,
    pub screen_fg: Color,

    // Modal chrome
    pub popup_bg: Color,
    pub popup_border_fg: Color,
    pub popup_text_fg: Color,
    /// Secondary text: URLs, section labels, hints
    pub muted_fg: Color,

    // Rows
    pub selection_bg: Color,
    pub active_row_bg: Color,
    pub active_row_fg: Color,
    pub hover_bg: Color,
    pub hover_fg: Color,

    /// Checkmark, info highlights, focused controls
    pub accent_fg: Color,
    /// Delete affordance and destructive buttons
    pub danger_fg: Color,
    pub warning_fg: Color,

    // Inputs
    pub input_fg: Color,
    pub placeholder_fg: Color,
    pub cursor: Color,
    pub disabled_fg: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            screen_bg: Color::Rgb(30, 30, 30),
            screen_fg: Color::Rgb(212, 212, 212),

            popup_bg: Color::Rgb(30, 41, 59),
            popup_border_fg: Color::Rgb(71, 85, 105),
            popup_text_fg: Color::Rgb(226, 232, 240),
            muted_fg: Color::Rgb(148, 163, 184),

            selection_bg: Color::Rgb(51, 65, 85),
            active_row_bg: Color::Rgb(30, 58, 138),
            active_row_fg: Color::White,
            hover_bg: Color::Rgb(51, 65, 85),
            hover_fg: Color::White,

            accent_fg: Color::Rgb(96, 165, 250),
            danger_fg: Color::Rgb(248, 113, 113),
            warning_fg: Color::Rgb(251, 191, 36),

            input_fg: Color::White,
            placeholder_fg: Color::Rgb(100, 116, 139),
            cursor: Color::Rgb(82, 139, 255),
            disabled_fg: Color::Rgb(100, 100, 100),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            screen_bg: Color::Rgb(255, 255, 255),
            screen_fg: Color::Rgb(30, 30, 30),

            popup_bg: Color::Rgb(255, 255, 255),
            popup_border_fg: Color::Rgb(226, 232, 240),
            popup_text_fg: Color::Rgb(30, 41, 59),
            muted_fg: Color::Rgb(100, 116, 139),

            selection_bg: Color::Rgb(241, 245, 249),
            active_row_bg: Color::Rgb(239, 246, 255),
            active_row_fg: Color::Rgb(30, 64, 175),
            hover_bg: Color::Rgb(241, 245, 249),
            hover_fg: Color::Rgb(15, 23, 42),

            accent_fg: Color::Rgb(37, 99, 235),
            danger_fg: Color::Rgb(220, 38, 38),
            warning_fg: Color::Rgb(180, 83, 9),

            input_fg: Color::Rgb(15, 23, 42),
            placeholder_fg: Color::Rgb(148, 163, 184),
            cursor: Color::Rgb(37, 99, 235),
            disabled_fg: Color::Rgb(160, 160, 160),
        }
    }

    /// Look up a builtin theme by name
    pub fn load_builtin(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
