// Theme system for the TUI
//
// A theme defines colors for all UI elements. Selected by name from config;
// unknown names fall back to the dark palette.

use ratatui::style::Color;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Active tab
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Placeholder and hint text
    pub dim: Color,

    // Status-bar log highlight
    pub warn: Color,
}

impl Theme {
    /// Look up a theme by config name
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "terminal" => Self::terminal(),
            _ => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),
            foreground: Color::Rgb(205, 214, 244),
            border: Color::Rgb(88, 91, 112),
            border_focused: Color::Rgb(137, 180, 250),
            title: Color::Rgb(137, 180, 250),
            status_bar: Color::Rgb(147, 153, 178),
            selected_bg: Color::Rgb(137, 180, 250),
            selected_fg: Color::Rgb(30, 30, 46),
            dim: Color::Rgb(108, 112, 134),
            warn: Color::Rgb(249, 226, 175),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(239, 241, 245),
            foreground: Color::Rgb(76, 79, 105),
            border: Color::Rgb(156, 160, 176),
            border_focused: Color::Rgb(30, 102, 245),
            title: Color::Rgb(30, 102, 245),
            status_bar: Color::Rgb(108, 111, 133),
            selected_bg: Color::Rgb(30, 102, 245),
            selected_fg: Color::Rgb(239, 241, 245),
            dim: Color::Rgb(140, 143, 161),
            warn: Color::Rgb(223, 142, 29),
        }
    }

    /// Inherits the terminal's own palette
    fn terminal() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Gray,
            selected_bg: Color::Cyan,
            selected_fg: Color::Black,
            dim: Color::DarkGray,
            warn: Color::Yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        let theme = Theme::by_name("does-not-exist");
        let dark = Theme::by_name("dark");
        assert_eq!(theme.background, dark.background);
    }

    #[test]
    fn test_terminal_theme_uses_reset_background() {
        assert_eq!(Theme::by_name("terminal").background, Color::Reset);
    }
}
