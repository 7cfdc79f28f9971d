//! Color roles and palettes.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::{Result, TickerbarError};

/// A named slot in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Accent color for selected and active elements.
    Primary,
    /// Muted color for inactive borders.
    Secondary,
    /// Positive changes and good connectivity.
    Success,
    /// Negative changes, errors and lost connectivity.
    Error,
    /// Main text color.
    Text,
    /// Secondary text color.
    Subtext,
    /// Selection and bar background.
    Highlight,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Error,
        ColorRole::Text,
        ColorRole::Subtext,
        ColorRole::Highlight,
    ];

    /// Get the role name.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Success => "success",
            ColorRole::Error => "error",
            ColorRole::Text => "text",
            ColorRole::Subtext => "subtext",
            ColorRole::Highlight => "highlight",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete palette. Every role is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    primary: Color,
    secondary: Color,
    success: Color,
    error: Color,
    text: Color,
    subtext: Color,
    highlight: Color,
}

impl Palette {
    /// Create a palette from `0xRRGGBB` values in [`ColorRole::ALL`] order.
    pub const fn from_rgb(rgb: [u32; 7]) -> Self {
        Self {
            primary: rgb_color(rgb[0]),
            secondary: rgb_color(rgb[1]),
            success: rgb_color(rgb[2]),
            error: rgb_color(rgb[3]),
            text: rgb_color(rgb[4]),
            subtext: rgb_color(rgb[5]),
            highlight: rgb_color(rgb[6]),
        }
    }

    /// Get the color for a role.
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Success => self.success,
            ColorRole::Error => self.error,
            ColorRole::Text => self.text,
            ColorRole::Subtext => self.subtext,
            ColorRole::Highlight => self.highlight,
        }
    }

    /// Primary color.
    pub fn primary(&self) -> Color {
        self.primary
    }

    /// Secondary color.
    pub fn secondary(&self) -> Color {
        self.secondary
    }

    /// Success color.
    pub fn success(&self) -> Color {
        self.success
    }

    /// Error color.
    pub fn error(&self) -> Color {
        self.error
    }

    /// Text color.
    pub fn text(&self) -> Color {
        self.text
    }

    /// Subtext color.
    pub fn subtext(&self) -> Color {
        self.subtext
    }

    /// Highlight color.
    pub fn highlight(&self) -> Color {
        self.highlight
    }
}

impl From<Palette> for PaletteSpec {
    fn from(palette: Palette) -> Self {
        let mut spec = PaletteSpec::new();
        for role in ColorRole::ALL {
            spec = spec.with(role, palette.color(role));
        }
        spec
    }
}

/// A palette under construction. Roles may be missing until it is
/// validated into a [`Palette`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteSpec {
    colors: [Option<Color>; 7],
}

impl PaletteSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spec from hex strings given in [`ColorRole::ALL`] order.
    pub fn from_hex(hex: [&str; 7]) -> Result<Self> {
        let mut spec = Self::new();
        for (role, value) in ColorRole::ALL.into_iter().zip(hex) {
            spec = spec.with_hex(role, value)?;
        }
        Ok(spec)
    }

    /// Set a role.
    pub fn with(mut self, role: ColorRole, color: Color) -> Self {
        self.colors[index(role)] = Some(color);
        self
    }

    /// Set a role from a `#RRGGBB` string.
    pub fn with_hex(self, role: ColorRole, value: &str) -> Result<Self> {
        let color = parse_hex(value).ok_or_else(|| TickerbarError::invalid_color(role, value))?;
        Ok(self.with(role, color))
    }

    /// Get a role if set.
    pub fn get(&self, role: ColorRole) -> Option<Color> {
        self.colors[index(role)]
    }

    /// Roles that have not been set, in [`ColorRole::ALL`] order.
    pub fn missing(&self) -> Vec<ColorRole> {
        ColorRole::ALL
            .into_iter()
            .filter(|&role| self.get(role).is_none())
            .collect()
    }

    /// Validate into a complete palette. `theme` is only used for the error.
    pub fn build(&self, theme: &str) -> Result<Palette> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(TickerbarError::incomplete_palette(theme, missing));
        }

        let color = |role: ColorRole| self.get(role).unwrap_or(Color::Reset);
        Ok(Palette {
            primary: color(ColorRole::Primary),
            secondary: color(ColorRole::Secondary),
            success: color(ColorRole::Success),
            error: color(ColorRole::Error),
            text: color(ColorRole::Text),
            subtext: color(ColorRole::Subtext),
            highlight: color(ColorRole::Highlight),
        })
    }
}

fn index(role: ColorRole) -> usize {
    role as usize
}

const fn rgb_color(value: u32) -> Color {
    Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Parse a `#RRGGBB` string into an RGB color.
fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Color::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: [&str; 7] = [
        "#7D56F4", "#666666", "#04B575", "#FF4C4C", "#EEEEEE", "#999999", "#2D2D2D",
    ];

    #[test]
    fn from_hex_fills_every_role() {
        let palette = PaletteSpec::from_hex(HEX).unwrap().build("default").unwrap();
        assert_eq!(palette.primary(), Color::Rgb(0x7D, 0x56, 0xF4));
        assert_eq!(palette.highlight(), Color::Rgb(0x2D, 0x2D, 0x2D));
        assert_eq!(palette.color(ColorRole::Error), Color::Rgb(0xFF, 0x4C, 0x4C));
    }

    #[test]
    fn from_rgb_matches_hex_spec() {
        let rgb = Palette::from_rgb([
            0x7D56F4, 0x666666, 0x04B575, 0xFF4C4C, 0xEEEEEE, 0x999999, 0x2D2D2D,
        ]);
        let hex = PaletteSpec::from_hex(HEX).unwrap().build("default").unwrap();
        assert_eq!(rgb, hex);
    }

    #[test]
    fn build_reports_missing_roles() {
        let spec = PaletteSpec::new()
            .with(ColorRole::Primary, Color::Blue)
            .with(ColorRole::Text, Color::White);

        let err = spec.build("partial").unwrap_err();
        match err {
            TickerbarError::IncompletePalette { theme, missing } => {
                assert_eq!(theme, "partial");
                assert_eq!(
                    missing,
                    vec![
                        ColorRole::Secondary,
                        ColorRole::Success,
                        ColorRole::Error,
                        ColorRole::Subtext,
                        ColorRole::Highlight,
                    ]
                );
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["7D56F4", "#7D56F", "#GGGGGG", "#7D56F4AA", "red"] {
            let err = PaletteSpec::new()
                .with_hex(ColorRole::Primary, bad)
                .unwrap_err();
            assert!(
                matches!(err, TickerbarError::InvalidColor { role: ColorRole::Primary, .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn palette_converts_back_to_complete_spec() {
        let palette = PaletteSpec::from_hex(HEX).unwrap().build("default").unwrap();
        let spec = PaletteSpec::from(palette);
        assert!(spec.missing().is_empty());
        assert_eq!(spec.build("copy").unwrap(), palette);
    }
}
