//! Stock color themes.
//!
//! Each entry lists `0xRRGGBB` colors in [`ColorRole::ALL`](super::ColorRole::ALL) order:
//! primary, secondary, success, error, text, subtext, highlight.

/// Name of the theme that is always registered.
pub const DEFAULT_THEME: &str = "default";

/// Built-in themes in registration order.
pub(crate) const BUILTIN_THEMES: &[(&str, [u32; 7])] = &[
    (
        DEFAULT_THEME,
        [0x7D56F4, 0x666666, 0x04B575, 0xFF4C4C, 0xEEEEEE, 0x999999, 0x2D2D2D],
    ),
    (
        "dark",
        [0x8850EF, 0x555555, 0x00CC66, 0xFF3333, 0xFFFFFF, 0xAAAAAA, 0x444444],
    ),
    (
        "light",
        [0x5D3FD3, 0x888888, 0x2E8B57, 0xDC143C, 0x000000, 0x666666, 0xDDDDDD],
    ),
    (
        "solarized",
        [0x268BD2, 0x859900, 0x859900, 0xDC322F, 0x839496, 0x586E75, 0x073642],
    ),
    (
        "monokai",
        [0xAE81FF, 0x75715E, 0xA6E22E, 0xF92672, 0xF8F8F2, 0x75715E, 0x49483E],
    ),
    (
        "dracula",
        [0xBD93F9, 0x6272A4, 0x50FA7B, 0xFF5555, 0xF8F8F2, 0x6272A4, 0x44475A],
    ),
    (
        "nord",
        [0x81A1C1, 0x4C566A, 0xA3BE8C, 0xBF616A, 0xECEFF4, 0xD8DEE9, 0x434C5E],
    ),
    (
        "gruvbox",
        [0x83A598, 0xA89984, 0x98971A, 0xFB4934, 0xEBDBB2, 0xBDAE93, 0x3C3836],
    ),
    (
        "tokyo-night",
        [0x7AA2F7, 0x565F89, 0x9ECE6A, 0xF7768E, 0xA9B1D6, 0x787C99, 0x24283B],
    ),
    (
        "catppuccin",
        [0x89B4FA, 0x6C7086, 0xA6E3A1, 0xF38BA8, 0xCDD6F4, 0xA6ADC8, 0x45475A],
    ),
];
