//! Application state and logic.

use chrono::NaiveTime;

use crate::status::{StatusState, TimeRange};
use crate::theme::ThemeContext;
use crate::ui::{RenderedLine, StatusBar};

/// Message shown while a refresh is in flight.
pub const REFRESHING_MESSAGE: &str = "Refreshing…";

/// Owner of the status bar inputs.
///
/// All mutation goes through the setters below; rendering reads the current
/// snapshot. Nothing here expires the transient message, callers clear it
/// with [`App::clear_status_message`] when their own policy says so.
#[derive(Debug)]
pub struct App {
    /// Theme registry and derived styles.
    pub theme: ThemeContext,
    /// Status bar composer.
    pub status_bar: StatusBar,
    /// Current status snapshot.
    pub status: StatusState,
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

impl App {
    /// Create a new application instance.
    pub fn new(provider: impl Into<String>, theme: ThemeContext) -> Self {
        Self {
            theme,
            status_bar: StatusBar::new(provider),
            status: StatusState::new(),
            width: 0,
            height: 0,
        }
    }

    /// Record the terminal size. Only the width affects the status bar.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Replace the connectivity snapshot.
    pub fn set_status(&mut self, last_update: NaiveTime, connected: bool, error: Option<String>) {
        self.status.last_update = last_update;
        self.status.connected = connected;
        self.status.last_error = error;
    }

    /// Select the highlighted time range.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.status.time_range = range;
    }

    /// Show a transient message in place of the timestamp.
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status.message = message.into();
    }

    /// Remove the transient message.
    pub fn clear_status_message(&mut self) {
        self.status.message.clear();
    }

    /// Switch theme by name. Returns false for unknown names.
    pub fn set_theme(&mut self, name: &str) -> bool {
        self.theme.set_theme(name)
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        let name = self.theme.cycle_theme().to_string();
        self.set_status_message(format!("Theme: {}", name));
    }

    /// Flip the transport state, keeping the rest of the snapshot.
    pub fn toggle_connected(&mut self) {
        self.status.connected = !self.status.connected;
    }

    /// Set or clear a simulated data error.
    pub fn toggle_error(&mut self) {
        self.status.last_error = match self.status.last_error {
            Some(_) => None,
            None => Some("simulated fetch failure".to_string()),
        };
    }

    /// Compose the status line at the current width.
    pub fn status_line(&self) -> RenderedLine {
        self.status_bar.render(
            self.width,
            &self.status,
            &TimeRange::ALL,
            self.theme.styles(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::formatters::display_width;

    fn app() -> App {
        App::new("NASDAQ", ThemeContext::default())
    }

    #[test]
    fn unsized_app_renders_nothing() {
        assert!(app().status_line().is_empty());
    }

    #[test]
    fn status_line_tracks_size() {
        let mut app = app();
        app.set_size(60, 20);
        assert_eq!(display_width(&app.status_line().text()), 60);

        app.set_size(90, 20);
        assert_eq!(app.status_line().width(), 90);
    }

    #[test]
    fn set_status_replaces_snapshot() {
        let mut app = app();
        app.set_size(80, 24);
        app.set_status(
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            true,
            Some("boom".to_string()),
        );
        assert!(app.status_line().text().contains(" Error "));

        app.set_status(NaiveTime::from_hms_opt(9, 16, 0).unwrap(), true, None);
        assert!(app.status_line().text().contains(" 09:16:00 "));
    }

    #[test]
    fn message_stays_until_cleared() {
        let mut app = app();
        app.set_size(80, 24);
        app.set_status_message(REFRESHING_MESSAGE);
        app.set_time_range(TimeRange::OneHour);
        app.set_status(NaiveTime::from_hms_opt(1, 2, 3).unwrap(), false, None);
        assert!(app.status_line().text().contains(REFRESHING_MESSAGE));

        app.clear_status_message();
        assert!(app.status_line().text().contains("01:02:03"));
    }

    #[test]
    fn time_range_highlight_moves() {
        let mut app = app();
        app.set_size(80, 24);
        app.set_time_range(TimeRange::ThirtyDays);
        let text = app.status_line().text();
        assert!(text.contains("[30D]"));
        assert!(!text.contains("[24H]"));
    }

    #[test]
    fn theme_switch_restyles_status_line() {
        let mut app = app();
        app.set_size(80, 24);
        let before = app.status_line();

        assert!(app.set_theme("dracula"));
        let after = app.status_line();
        assert_eq!(before.text(), after.text());
        assert_ne!(before, after);

        assert!(!app.set_theme("nonexistent"));
        assert_eq!(app.status_line(), after);
    }

    #[test]
    fn cycle_theme_announces_new_theme() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme.active_name(), "dark");
        assert_eq!(app.status.message, "Theme: dark");
    }

    #[test]
    fn toggles_flip_state() {
        let mut app = app();
        app.toggle_connected();
        assert!(!app.status.connected);
        app.toggle_error();
        assert!(app.status.last_error.is_some());
        app.toggle_error();
        assert!(app.status.last_error.is_none());
    }
}
