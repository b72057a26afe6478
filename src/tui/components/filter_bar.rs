// Filter input bar component
//
// Renders the filter text the widget owns, with a block cursor at the end.
// Long filters are truncated from the left so the edit point stays in view.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render the filter input bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let filter = app.tab_filter.filter();

    // Inner width minus borders and the cursor cell
    let budget = (area.width.saturating_sub(2) as usize).saturating_sub(1);
    let shown = tail_fit(filter, budget);

    let mut spans = Vec::new();
    if filter.is_empty() {
        spans.push(Span::styled(
            "type to filter tabs (regex terms, space-separated)",
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::styled(shown, Style::default().fg(theme.foreground)));
        spans.push(Span::styled(
            "█",
            Style::default().fg(theme.border_focused),
        ));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                " Filter ",
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(input, area);
}

/// Keep the widest tail of `s` that fits in `max_width` columns
fn tail_fit(s: &str, max_width: usize) -> &str {
    let mut width = s.width();
    let mut start = 0;
    let mut chars = s.char_indices();

    while width > max_width {
        let Some((idx, ch)) = chars.next() else {
            break;
        };
        start = idx + ch.len_utf8();
        width -= ch.width().unwrap_or(0);
    }

    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fit_short_string_unchanged() {
        assert_eq!(tail_fit("abc", 10), "abc");
    }

    #[test]
    fn test_tail_fit_keeps_the_end() {
        assert_eq!(tail_fit("abcdef", 3), "def");
    }

    #[test]
    fn test_tail_fit_wide_characters() {
        // Each character is two columns wide
        assert_eq!(tail_fit("日本語", 4), "本語");
        assert_eq!(tail_fit("日本語", 3), "語");
    }

    #[test]
    fn test_tail_fit_zero_budget() {
        assert_eq!(tail_fit("abc", 0), "");
    }
}
