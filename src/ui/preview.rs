//! Theme preview panel shown above the status bar.

use crate::app::App;
use crate::theme::ColorRole;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const KEY_HINTS: &[(&str, &str)] = &[
    ("T", "next theme"),
    ("1-4", "time range"),
    ("Tab", "next time range"),
    ("c", "toggle connection"),
    ("e", "toggle error"),
    ("r", "refresh message"),
    ("u", "mark updated now"),
    ("Esc", "clear message"),
    ("q", "quit"),
];

/// Draw the theme list next to the active palette.
pub(super) fn draw_preview(f: &mut Frame<'_>, app: &App, area: Rect) {
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(area);

    draw_themes(f, app, content[0]);
    draw_palette(f, app, content[1]);
}

fn draw_themes(f: &mut Frame<'_>, app: &App, area: Rect) {
    let styles = app.theme.styles();
    let active = app.theme.active_name();

    let items: Vec<ListItem<'_>> = app
        .theme
        .registry()
        .names()
        .into_iter()
        .map(|name| {
            let style = if name == active {
                styles.selection
            } else {
                Style::default().fg(app.theme.palette().text())
            };
            ListItem::new(Line::from(format!(" {} ", name))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Themes ")
            .borders(Borders::ALL)
            .border_style(styles.active_pane),
    );

    f.render_widget(list, area);
}

fn draw_palette(f: &mut Frame<'_>, app: &App, area: Rect) {
    let styles = app.theme.styles();
    let palette = app.theme.palette();

    let mut lines: Vec<Line<'_>> = ColorRole::ALL
        .iter()
        .map(|&role| {
            Line::from(vec![
                Span::styled(format!("{:>10} ", role.name()), styles.chart_label),
                Span::styled("██████", Style::default().fg(palette.color(role))),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("  AAPL  +1.24%", styles.positive_change),
        Span::raw("   "),
        Span::styled("  TSLA  -0.87%", styles.negative_change),
    ]));
    lines.push(Line::default());
    lines.extend(KEY_HINTS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("{:>10} ", key), styles.accent),
            Span::styled(*action, Style::default().fg(palette.text())),
        ])
    }));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", app.theme.active_name()))
            .borders(Borders::ALL)
            .border_style(styles.pane),
    );

    f.render_widget(paragraph, area);
}
