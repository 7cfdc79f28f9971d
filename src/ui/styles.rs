//! Styles derived from the active palette.

use crate::theme::Palette;
use ratatui::style::{Modifier, Style};

/// Style slot a status bar segment is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// Bar fill.
    Background,
    /// Plain text.
    Base,
    /// Selected time range.
    Accent,
    /// Connectivity glyph while data is trustworthy.
    Connected,
    /// Connectivity glyph while disconnected or erroring.
    Disconnected,
}

/// Ready-to-render styles for one palette.
///
/// Every field is a plain value. A theme switch replaces the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    /// Status bar fill.
    pub background: Style,
    /// Status bar text.
    pub base: Style,
    /// Selected time range.
    pub accent: Style,
    /// Connected indicator.
    pub connected: Style,
    /// Disconnected or error indicator.
    pub disconnected: Style,
    /// Selected list row.
    pub selection: Style,
    /// Inactive pane border.
    pub pane: Style,
    /// Focused pane border.
    pub active_pane: Style,
    /// Price went up.
    pub positive_change: Style,
    /// Price went down.
    pub negative_change: Style,
    /// Chart axis labels.
    pub chart_label: Style,
}

impl StyleSet {
    /// Derive every style from a palette.
    pub fn from_palette(palette: &Palette) -> Self {
        let background = Style::default().bg(palette.highlight());
        let base = background.fg(palette.subtext());

        Self {
            background,
            base,
            accent: background
                .fg(palette.primary())
                .add_modifier(Modifier::BOLD),
            connected: background.fg(palette.success()),
            disconnected: background.fg(palette.error()),
            selection: Style::default()
                .fg(palette.primary())
                .bg(palette.highlight())
                .add_modifier(Modifier::BOLD),
            pane: Style::default().fg(palette.secondary()),
            active_pane: Style::default().fg(palette.primary()),
            positive_change: Style::default().fg(palette.success()),
            negative_change: Style::default().fg(palette.error()),
            chart_label: Style::default().fg(palette.subtext()),
        }
    }

    /// Resolve a segment role.
    pub fn style(&self, role: StyleRole) -> Style {
        match role {
            StyleRole::Background => self.background,
            StyleRole::Base => self.base,
            StyleRole::Accent => self.accent,
            StyleRole::Connected => self.connected,
            StyleRole::Disconnected => self.disconnected,
        }
    }
}
