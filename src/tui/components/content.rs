// Content pane component
//
// Renders the active tab's body. The button and its pane form one group:
// a hidden group renders neither.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the active tab's content pane
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let active = app
        .tab_filter
        .groups()
        .iter()
        .find(|g| g.active && g.visible);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let pane = match active {
        Some(group) => Paragraph::new(group.body.as_str())
            .style(Style::default().fg(theme.foreground))
            .wrap(Wrap { trim: false })
            .block(block.title(format!(" {} ", group.title))),
        None => Paragraph::new("no tab selected")
            .style(Style::default().fg(theme.dim))
            .block(block),
    };

    f.render_widget(pane, area);
}
