//! Active theme plus the styles derived from it.

use super::{Palette, PaletteSpec, ThemeRegistry};
use crate::error::Result;
use crate::ui::StyleSet;

/// Owns the theme registry and the derived styles.
///
/// Created once by the application and handed by reference to whatever
/// renders. Styles are rebuilt exactly once for every change of the active
/// palette.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    registry: ThemeRegistry,
    styles: StyleSet,
}

impl ThemeContext {
    /// Create a context over a registry, binding its active theme.
    pub fn new(registry: ThemeRegistry) -> Self {
        let styles = StyleSet::from_palette(registry.active());
        Self { registry, styles }
    }

    /// Switch to a registered theme. Returns false and changes nothing for
    /// unknown names.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if !self.registry.set_active(name) {
            tracing::warn!("Unknown theme '{}', keeping '{}'", name, self.active_name());
            return false;
        }
        self.rebuild();
        true
    }

    /// Switch to the next registered theme and return its name.
    pub fn cycle_theme(&mut self) -> &str {
        let next = self.registry.next_name().to_string();
        self.set_theme(&next);
        self.active_name()
    }

    /// Add or overwrite a theme. Overwriting the active theme restyles.
    pub fn register(&mut self, name: &str, spec: &PaletteSpec) -> Result<()> {
        self.registry.register(name, spec)?;
        if self.registry.active_name() == name {
            self.rebuild();
        }
        Ok(())
    }

    /// Remove a theme. Removing the active theme restyles with `default`.
    pub fn remove(&mut self, name: &str) -> Result<Palette> {
        let was_active = self.registry.active_name() == name;
        let palette = self.registry.remove(name)?;
        if was_active {
            self.rebuild();
        }
        Ok(palette)
    }

    fn rebuild(&mut self) {
        self.styles = StyleSet::from_palette(self.registry.active());
        tracing::debug!("Styles rebuilt for theme '{}'", self.active_name());
    }

    /// Current styles.
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Active palette.
    pub fn palette(&self) -> &Palette {
        self.registry.active()
    }

    /// Active theme name.
    pub fn active_name(&self) -> &str {
        self.registry.active_name()
    }

    /// Underlying registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeRegistry::with_builtin_themes())
    }
}
