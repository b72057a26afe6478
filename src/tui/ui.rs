// Screen layout - called on every frame
//
// Vertical shell: filter bar, tab bar, content pane, status bar.

use super::app::App;
use super::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function
pub fn draw(f: &mut Frame, app: &App) {
    // Apply theme background to the entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input bar
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Active tab content
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    components::render_filter_bar(f, chunks[0], app);
    components::render_tab_bar(f, chunks[1], app);
    components::render_content(f, chunks[2], app);
    components::render_status(f, chunks[3], app);
}
