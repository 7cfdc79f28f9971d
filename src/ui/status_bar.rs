//! Status bar composition.
//!
//! The bar is one line split into three regions:
//!
//! ```text
//!  ● NASDAQ       1H  [24H]  7D  30D        09:15:00  ? Help  q Quit
//! └── left ─┘└──────── center ─────────┘└────────── right ───────────┘
//! ```
//!
//! Left and right are always laid out in full. The center gets whatever
//! columns remain and is dropped entirely when the time ranges do not fit.
//! The final line is padded or clipped to exactly the requested width.

use super::formatters::{
    center_padding, clip_to_width, display_width, format_clock, replace_controls,
};
use super::{StyleRole, StyleSet};
use crate::error::Result;
use crate::status::{StatusState, TimeRange};
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::queue;
use ratatui::{
    style::{Color, Modifier},
    text::{Line, Span},
};

/// Glyph shown while data is trustworthy.
pub const CONNECTED_GLYPH: &str = "●";
/// Glyph shown while disconnected or erroring.
pub const DISCONNECTED_GLYPH: &str = "○";
/// Key hints closing the right region.
pub const HELP_SUFFIX: &str = "? Help  q Quit";
/// Right region text while the last fetch failed.
pub const ERROR_TEXT: &str = "Error";

/// One run of equally styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text content.
    pub text: String,
    /// Display width in columns.
    pub width: usize,
    /// Style slot.
    pub role: StyleRole,
}

impl Segment {
    /// Create a segment, measuring its display width. Control characters
    /// are replaced with spaces.
    pub fn new(text: impl AsRef<str>, role: StyleRole) -> Self {
        let text = replace_controls(text.as_ref());
        let width = display_width(&text);
        Self { text, width, role }
    }

    /// Background-styled spaces.
    pub fn blank(width: usize) -> Self {
        Self {
            text: " ".repeat(width),
            width,
            role: StyleRole::Background,
        }
    }
}

fn total_width(segments: &[Segment]) -> usize {
    segments.iter().map(|s| s.width).sum()
}

/// A composed status line of a known display width.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine {
    line: Line<'static>,
    width: usize,
}

impl RenderedLine {
    /// Empty zero-width line.
    pub fn empty() -> Self {
        Self {
            line: Line::default(),
            width: 0,
        }
    }

    /// Styled line for ratatui.
    pub fn line(&self) -> &Line<'static> {
        &self.line
    }

    /// Take the styled line.
    pub fn into_line(self) -> Line<'static> {
        self.line
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Text without styling.
    pub fn text(&self) -> String {
        self.line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    /// Serialize to a string with ANSI color and bold escapes.
    pub fn to_ansi(&self) -> Result<String> {
        let mut out = Vec::new();

        for span in &self.line.spans {
            let style = self.line.style.patch(span.style);
            if let Some(fg) = style.fg {
                queue!(out, SetForegroundColor(term_color(fg)))?;
            }
            if let Some(bg) = style.bg {
                queue!(out, SetBackgroundColor(term_color(bg)))?;
            }
            if style.add_modifier.contains(Modifier::BOLD) {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                out,
                Print(span.content.as_ref()),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }

        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

/// Status bar composer.
///
/// Holds only the source label; every render is a pure function of its
/// arguments.
#[derive(Debug, Clone)]
pub struct StatusBar {
    provider: String,
}

impl StatusBar {
    /// Create a status bar for a data source label.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    /// Data source label.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Compose the bar at exactly `width` columns.
    pub fn render(
        &self,
        width: u16,
        state: &StatusState,
        ranges: &[TimeRange],
        styles: &StyleSet,
    ) -> RenderedLine {
        let width = usize::from(width);
        if width == 0 {
            return RenderedLine::empty();
        }

        let left = self.left_segments(state);
        let center = center_segments(state, ranges);
        let right = right_segments(state);

        let center_width = width.saturating_sub(total_width(&left) + total_width(&right));
        let content_width = total_width(&center);

        let mut segments = left;
        if content_width <= center_width {
            let (leading, trailing) = center_padding(center_width, content_width);
            segments.push(Segment::blank(leading));
            segments.extend(center);
            segments.push(Segment::blank(trailing));
        } else {
            segments.push(Segment::blank(center_width));
        }
        segments.extend(right);

        let segments = fit_to_width(segments, width);
        let spans: Vec<Span<'static>> = segments
            .into_iter()
            .filter(|s| !s.text.is_empty())
            .map(|s| Span::styled(s.text, styles.style(s.role)))
            .collect();

        RenderedLine {
            line: Line::from(spans).style(styles.background),
            width,
        }
    }

    fn left_segments(&self, state: &StatusState) -> Vec<Segment> {
        let (glyph, role) = if state.is_healthy() {
            (CONNECTED_GLYPH, StyleRole::Connected)
        } else {
            (DISCONNECTED_GLYPH, StyleRole::Disconnected)
        };

        vec![
            Segment::new(" ", StyleRole::Base),
            Segment::new(glyph, role),
            Segment::new(format!(" {} ", self.provider), StyleRole::Base),
        ]
    }
}

fn center_segments(state: &StatusState, ranges: &[TimeRange]) -> Vec<Segment> {
    ranges
        .iter()
        .map(|&range| {
            if range == state.time_range {
                Segment::new(format!(" [{}] ", range), StyleRole::Accent)
            } else {
                Segment::new(format!(" {} ", range), StyleRole::Base)
            }
        })
        .collect()
}

fn right_segments(state: &StatusState) -> Vec<Segment> {
    let text = if !state.message.is_empty() {
        state.message.clone()
    } else if state.last_error.is_some() {
        ERROR_TEXT.to_string()
    } else {
        format_clock(state.last_update)
    };

    vec![Segment::new(
        format!(" {}  {} ", text, HELP_SUFFIX),
        StyleRole::Base,
    )]
}

/// Pad with background or clip so the segments span exactly `width`.
fn fit_to_width(segments: Vec<Segment>, width: usize) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len() + 1);
    let mut used = 0;

    for segment in segments {
        let remaining = width - used;
        if remaining == 0 {
            break;
        }
        if segment.width <= remaining {
            used += segment.width;
            out.push(segment);
        } else {
            let (text, clipped) = clip_to_width(&segment.text, remaining);
            used += clipped;
            out.push(Segment {
                text,
                width: clipped,
                role: segment.role,
            });
            break;
        }
    }

    if used < width {
        out.push(Segment::blank(width - used));
    }
    out
}
