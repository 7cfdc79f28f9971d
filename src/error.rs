//! Error types for Tickerbar.
//!
//! This module provides a unified error handling approach using `thiserror`.

use crate::theme::ColorRole;
use thiserror::Error;

/// Result type alias for Tickerbar operations.
pub type Result<T> = std::result::Result<T, TickerbarError>;

/// Errors that can occur in Tickerbar.
#[derive(Debug, Error)]
pub enum TickerbarError {
    /// A palette was registered without every color role.
    #[error("Theme '{theme}' is missing color roles: {}", format_roles(.missing))]
    IncompletePalette {
        theme: String,
        missing: Vec<ColorRole>,
    },

    /// A color value could not be parsed.
    #[error("Invalid color '{value}' for role {role}")]
    InvalidColor { role: ColorRole, value: String },

    /// Theme name is not registered.
    #[error("Theme not found: {name}")]
    UnknownTheme { name: String },

    /// Theme may not be removed.
    #[error("Theme '{name}' is built in and cannot be removed")]
    ProtectedTheme { name: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TickerbarError {
    /// Create an IncompletePalette error.
    pub fn incomplete_palette(theme: impl Into<String>, missing: Vec<ColorRole>) -> Self {
        Self::IncompletePalette {
            theme: theme.into(),
            missing,
        }
    }

    /// Create an InvalidColor error.
    pub fn invalid_color(role: ColorRole, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            role,
            value: value.into(),
        }
    }

    /// Create an UnknownTheme error.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme { name: name.into() }
    }

    /// Create a ProtectedTheme error.
    pub fn protected_theme(name: impl Into<String>) -> Self {
        Self::ProtectedTheme { name: name.into() }
    }
}

fn format_roles(roles: &[ColorRole]) -> String {
    roles
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_palette_lists_every_missing_role() {
        let err = TickerbarError::incomplete_palette(
            "half",
            vec![ColorRole::Error, ColorRole::Highlight],
        );
        assert_eq!(
            err.to_string(),
            "Theme 'half' is missing color roles: error, highlight"
        );
    }

    #[test]
    fn unknown_theme_message() {
        let err = TickerbarError::unknown_theme("neon");
        assert_eq!(err.to_string(), "Theme not found: neon");
    }

    #[test]
    fn protected_theme_message() {
        let err = TickerbarError::protected_theme("default");
        assert!(matches!(&err, TickerbarError::ProtectedTheme { name } if name == "default"));
        assert_eq!(
            err.to_string(),
            "Theme 'default' is built in and cannot be removed"
        );
    }
}
