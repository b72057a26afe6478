// Status bar component
//
// Renders uptime, visible/total tab counts, the persisted filter, and the
// most recent warning or error captured by the log buffer.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let registry = app.tab_filter.registry();

    let filter = app.tab_filter.filter().trim().to_string();
    let filter_info = if filter.is_empty() {
        "filter -".to_string()
    } else {
        format!("filter {:?}", filter)
    };

    let mut spans = vec![Span::styled(
        format!(
            " {} │ tabs {}/{} │ {}",
            app.uptime(),
            registry.visible_count(),
            registry.len(),
            filter_info,
        ),
        Style::default().fg(theme.status_bar),
    )];

    // Surface the latest warning/error without leaving the TUI
    if let Some(entry) = app.log_buffer.latest() {
        if matches!(entry.level, LogLevel::Warn | LogLevel::Error) {
            spans.push(Span::styled(
                format!(" │ {} {}", entry.level.as_str(), entry.message),
                Style::default().fg(theme.warn),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
