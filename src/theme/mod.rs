//! Theme palettes and the active theme.
//!
//! A theme is a named [`Palette`] of color roles. The [`ThemeRegistry`]
//! holds every theme in a fixed order and tracks which one is active; the
//! [`ThemeContext`] pairs it with the styles derived from that palette.

mod builtin;
mod context;
mod palette;
mod registry;

pub use builtin::DEFAULT_THEME;
pub use context::ThemeContext;
pub use palette::{ColorRole, Palette, PaletteSpec};
pub use registry::ThemeRegistry;
