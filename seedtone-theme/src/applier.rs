//! # Theme Application
//!
//! [ThemeApplier] turns a seed into a palette and writes it into a style
//! namespace. There is one process-wide namespace, reached through
//! [ThemeApplier::global]; tests and embedders can also give an applier a
//! private one.
//!
//! Every application overwrites all slots under a single write lock, so a
//! reader never sees a mix of two palettes. The namespace has one logical
//! writer (the UI thread), and the last write wins.
//!
//! ```rust
//! use seedtone_theme::applier::ThemeApplier;
//! use seedtone_theme::role::Role;
//!
//! let applier = ThemeApplier::new();
//! applier.apply_hex("#6750A4").unwrap();
//! let style = applier.snapshot();
//! assert!(style.is_populated());
//! assert_eq!(style.get_role(Role::OnPrimary).unwrap().to_string(), "#000000");
//! ```

use std::sync::{Arc, PoisonError};

use once_cell::sync::Lazy;

use crate::color::{parse_hex_color, Color};
use crate::error::ThemeResult;
use crate::palette::{generate_palette, Palette};
use crate::style::{SharedStyleNamespace, StyleNamespace};

static GLOBAL_STYLE: Lazy<SharedStyleNamespace> = Lazy::new(StyleNamespace::shared);

/// Writes generated palettes into a style namespace.
#[derive(Debug, Clone)]
pub struct ThemeApplier {
    style: SharedStyleNamespace,
}

impl ThemeApplier {
    /// Create an applier with its own, empty namespace.
    pub fn new() -> Self {
        Self::with_namespace(StyleNamespace::shared())
    }

    /// Create an applier writing to an existing namespace.
    pub fn with_namespace(style: SharedStyleNamespace) -> Self {
        Self { style }
    }

    /// The applier bound to the process-wide style namespace.
    pub fn global() -> Self {
        Self::with_namespace(Arc::clone(&GLOBAL_STYLE))
    }

    /// Handle to the namespace, for readers.
    pub fn namespace(&self) -> SharedStyleNamespace {
        Arc::clone(&self.style)
    }

    /// Overwrite every style property with the given palette.
    pub fn apply_palette(&self, palette: &Palette) {
        let mut style = self.style.write().unwrap_or_else(PoisonError::into_inner);
        style.write_palette(palette);
        log::debug!("Applied palette for seed {}", palette.seed());
    }

    /// Generate the palette for a seed and apply it.
    pub fn apply_theme_color(&self, seed: Color) -> Palette {
        let palette = generate_palette(seed);
        self.apply_palette(&palette);
        palette
    }

    /// Parse a hex seed and apply it. Nothing is written if parsing fails.
    pub fn apply_hex(&self, hex: &str) -> ThemeResult<Color> {
        let seed = parse_hex_color(hex)?;
        self.apply_theme_color(seed);
        Ok(seed)
    }

    /// Copy of the current namespace contents.
    pub fn snapshot(&self) -> StyleNamespace {
        self.style
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Seed of the palette currently applied, if any.
    pub fn current_seed(&self) -> Option<Color> {
        self.style
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .seed()
    }

    /// Empty every style property.
    pub fn reset(&self) {
        self.style
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for ThemeApplier {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a user-picked seed to the process-wide style namespace.
///
/// This is the entry point for color pickers: it bypasses the settings store
/// and takes effect immediately. Malformed input leaves the current theme in
/// place and returns an error.
pub fn apply_theme_color(hex: &str) -> ThemeResult<Color> {
    ThemeApplier::global().apply_hex(hex)
}

/// Copy of the process-wide style namespace.
pub fn live_style() -> StyleNamespace {
    ThemeApplier::global().snapshot()
}
