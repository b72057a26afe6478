// Tab bar component
//
// One button per visible tab group, in registry order. Hidden groups are not
// rendered at all. The active tab is highlighted.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the tab bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let visible: Vec<_> = app
        .tab_filter
        .groups()
        .iter()
        .filter(|g| g.visible)
        .collect();

    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " no tabs match the filter",
            Style::default().fg(theme.dim),
        ));
        f.render_widget(empty, area);
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    for group in visible {
        let style = if group.active {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };

        spans.push(Span::styled(format!(" {} ", group.title), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
