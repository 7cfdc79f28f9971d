//! Tickerbar - a themeable status bar for terminal stock watchers.
//!
//! Tickerbar composes the one-line footer of a market watch TUI: a
//! connectivity indicator with the data source, the selectable chart time
//! ranges, and the last update time (or an error, or a transient message)
//! followed by key hints. The line always spans exactly the requested number
//! of terminal columns.
//!
//! # Features
//!
//! - Width-exact three-region layout measured in display columns
//! - Precedence between transport state, data errors and transient messages
//! - Ordered registry of named palettes with ten stock themes
//! - Styles rebuilt wholesale on every theme switch
//!
//! # Example
//!
//! ```
//! use tickerbar::status::{StatusState, TimeRange};
//! use tickerbar::theme::ThemeContext;
//! use tickerbar::ui::StatusBar;
//!
//! let mut theme = ThemeContext::default();
//! assert!(theme.set_theme("nord"));
//!
//! let bar = StatusBar::new("NASDAQ");
//! let line = bar.render(60, &StatusState::new(), &TimeRange::ALL, theme.styles());
//! assert_eq!(line.width(), 60);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod status;
pub mod theme;
pub mod ui;

pub use error::{Result, TickerbarError};
