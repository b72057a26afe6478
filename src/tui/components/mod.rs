// Components module - reusable UI building blocks
//
// - Filter bar: the text input driving the tab filter
// - Tab bar: buttons of the currently visible tab groups
// - Content: the active tab's pane
// - Status bar: counts, persisted filter, uptime, last log line
//
// Each component is a focused, single-responsibility module.

pub mod content;
pub mod filter_bar;
pub mod status_bar;
pub mod tab_bar;

// Re-export render functions for convenient access
// Usage: components::filter_bar::render(f, area, app)
//    or: components::render_filter_bar(f, area, app)

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the filter input bar (convenience wrapper)
pub fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    filter_bar::render(f, area, app);
}

/// Render the tab bar (convenience wrapper)
pub fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    tab_bar::render(f, area, app);
}

/// Render the active tab content (convenience wrapper)
pub fn render_content(f: &mut Frame, area: Rect, app: &App) {
    content::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
