//! Theme registry.

use std::collections::HashMap;

use super::builtin::{BUILTIN_THEMES, DEFAULT_THEME};
use super::{Palette, PaletteSpec};
use crate::error::{Result, TickerbarError};

/// Registered themes and the active one.
///
/// Names are kept in insertion order next to the lookup table so that
/// listing and cycling are deterministic. The `default` theme is registered
/// at construction and can be overwritten but never removed, so the active
/// name always resolves.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    order: Vec<String>,
    palettes: HashMap<String, Palette>,
    active: String,
}

impl ThemeRegistry {
    /// Create a registry holding only the default theme.
    pub fn new() -> Self {
        let (name, rgb) = BUILTIN_THEMES[0];
        let mut palettes = HashMap::new();
        palettes.insert(name.to_string(), Palette::from_rgb(rgb));

        Self {
            order: vec![name.to_string()],
            palettes,
            active: name.to_string(),
        }
    }

    /// Create a registry with every stock theme, `default` active.
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::new();
        for &(name, rgb) in &BUILTIN_THEMES[1..] {
            registry.insert(name, Palette::from_rgb(rgb));
        }
        registry
    }

    /// Add or overwrite a theme.
    ///
    /// Fails without touching the registry if the palette is incomplete.
    pub fn register(&mut self, name: &str, spec: &PaletteSpec) -> Result<()> {
        let palette = spec.build(name).map_err(|e| {
            tracing::warn!("Rejected theme registration: {}", e);
            e
        })?;
        self.insert(name, palette);
        Ok(())
    }

    fn insert(&mut self, name: &str, palette: Palette) {
        if self.palettes.insert(name.to_string(), palette).is_none() {
            self.order.push(name.to_string());
        }
    }

    /// Remove a theme. Removing the active theme makes `default` active.
    pub fn remove(&mut self, name: &str) -> Result<Palette> {
        if name == DEFAULT_THEME {
            return Err(TickerbarError::protected_theme(name));
        }

        let palette = self
            .palettes
            .remove(name)
            .ok_or_else(|| TickerbarError::unknown_theme(name))?;
        self.order.retain(|n| n != name);

        if self.active == name {
            self.active = DEFAULT_THEME.to_string();
        }

        Ok(palette)
    }

    /// Switch the active theme. Unknown names leave it unchanged.
    pub fn set_active(&mut self, name: &str) -> bool {
        if !self.palettes.contains_key(name) {
            return false;
        }
        self.active = name.to_string();
        true
    }

    /// Get the active palette.
    pub fn active(&self) -> &Palette {
        // `active` is only ever set to a registered name and `default` cannot
        // be removed.
        &self.palettes[&self.active]
    }

    /// Get the active theme name.
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// Get a palette by name.
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Check if a theme is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    /// Theme names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Themes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), &self.palettes[name]))
    }

    /// Name of the theme after the active one, wrapping around.
    pub fn next_name(&self) -> &str {
        let pos = self
            .order
            .iter()
            .position(|n| *n == self.active)
            .unwrap_or(0);
        &self.order[(pos + 1) % self.order.len()]
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; the default theme is always present.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
