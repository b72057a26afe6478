// TUI application state
//
// Holds the tab filter widget plus the shell state the views render from.
// Key routing lives in the tui module; this struct is state only.

use super::theme::Theme;
use crate::filter::TabFilter;
use crate::logging::LogBuffer;
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// The tab filter widget (registry, filter text, persistence)
    pub tab_filter: TabFilter,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Log buffer for the status-bar log display
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,
}

impl App {
    pub fn new(tab_filter: TabFilter, log_buffer: LogBuffer, theme: Theme) -> Self {
        Self {
            tab_filter,
            should_quit: false,
            start_time: Instant::now(),
            log_buffer,
            theme,
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
