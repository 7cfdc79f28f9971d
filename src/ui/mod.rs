//! User interface rendering.

pub mod formatters;
mod preview;
mod status_bar;
mod styles;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

pub use status_bar::{
    RenderedLine, Segment, StatusBar, CONNECTED_GLYPH, DISCONNECTED_GLYPH, ERROR_TEXT,
    HELP_SUFFIX,
};
pub use styles::{StyleRole, StyleSet};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let area = f.area();
    app.set_size(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    preview::draw_preview(f, app, chunks[0]);

    let status = Paragraph::new(app.status_line().into_line());
    f.render_widget(status, chunks[1]);
}
