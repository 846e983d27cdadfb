//! # Live Style Namespace
//!
//! The set of named style properties UI components read at render time.
//!
//! The namespace has one slot per [Role], keyed by
//! [Role::property_name]. Slots are registered up front and start out empty;
//! [ThemeApplier](crate::applier::ThemeApplier) fills all of them at once.
//!
//! ```rust
//! use seedtone_theme::style::StyleNamespace;
//!
//! let style = StyleNamespace::new();
//! assert!(!style.is_populated());
//! assert_eq!(style.get("--md-sys-color-primary"), None);
//! ```

use std::fmt::Write;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::color::Color;
use crate::palette::Palette;
use crate::role::Role;

/// Named style property slots, in [Role::ALL] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNamespace {
    properties: IndexMap<&'static str, Option<Color>>,
    seed: Option<Color>,
}

/// A style namespace shared between its writer and any number of readers.
pub type SharedStyleNamespace = Arc<RwLock<StyleNamespace>>;

impl StyleNamespace {
    /// Create a namespace with every slot registered and empty.
    pub fn new() -> Self {
        let properties = Role::ALL
            .iter()
            .map(|role| (role.property_name(), None))
            .collect();
        Self {
            properties,
            seed: None,
        }
    }

    /// Create a new shared namespace.
    pub fn shared() -> SharedStyleNamespace {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.properties.get(name).copied().flatten()
    }

    /// Get the property value bound to a role.
    pub fn get_role(&self, role: Role) -> Option<Color> {
        self.get(role.property_name())
    }

    /// Seed of the palette currently written, if any.
    pub fn seed(&self) -> Option<Color> {
        self.seed
    }

    /// Iterate over all slots in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<Color>)> + '_ {
        self.properties.iter().map(|(name, value)| (*name, *value))
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no slots are registered. Never true for [StyleNamespace::new].
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Whether every slot holds a value.
    pub fn is_populated(&self) -> bool {
        self.properties.values().all(Option::is_some)
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for value in self.properties.values_mut() {
            *value = None;
        }
        self.seed = None;
    }

    /// Overwrite every slot from a palette.
    pub(crate) fn write_palette(&mut self, palette: &Palette) {
        for (role, color) in palette.iter() {
            self.properties.insert(role.property_name(), Some(color));
        }
        self.seed = Some(palette.seed());
    }

    /// Render the populated slots as a CSS `:root` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            if let Some(color) = value {
                // Writing into a String cannot fail.
                let _ = writeln!(css, "  {}: {};", name, color);
            }
        }
        css.push('}');
        css.push('\n');
        css
    }
}

impl Default for StyleNamespace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate_palette;

    #[test]
    fn test_new_registers_every_role() {
        let style = StyleNamespace::new();
        assert_eq!(style.len(), Role::COUNT);
        assert!(!style.is_empty());
        for (i, (name, value)) in style.iter().enumerate() {
            assert_eq!(name, Role::ALL[i].property_name());
            assert_eq!(value, None);
        }
    }

    #[test]
    fn test_write_palette_fills_all_slots() {
        let palette = generate_palette(Color::from_rgb8(0xff, 0, 0));
        let mut style = StyleNamespace::new();
        style.write_palette(&palette);

        assert!(style.is_populated());
        assert_eq!(style.len(), Role::COUNT);
        assert_eq!(style.seed(), Some(palette.seed()));
        for role in Role::ALL {
            assert_eq!(style.get_role(role), Some(palette.get(role)));
        }
        assert_eq!(
            style.get("--md-sys-color-primary-container"),
            Some(Color::from_rgb8(0x91, 0x08, 0x08))
        );
    }

    #[test]
    fn test_clear_empties_slots() {
        let mut style = StyleNamespace::new();
        style.write_palette(&generate_palette(Color::WHITE));
        style.clear();
        assert_eq!(style, StyleNamespace::new());
    }

    #[test]
    fn test_css_output() {
        assert_eq!(StyleNamespace::new().to_css(), ":root {\n}\n");

        let mut style = StyleNamespace::new();
        style.write_palette(&generate_palette(Color::from_rgb8(0xff, 0, 0)));
        let css = style.to_css();
        assert!(css.starts_with(":root {\n  --md-sys-color-primary: #ff0000;\n"));
        assert!(css.contains("  --md-sys-color-primary-container: #910808;\n"));
        assert_eq!(css.lines().count(), Role::COUNT + 2);
    }
}
