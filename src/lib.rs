#![warn(missing_docs)]

//! Seed-color driven palettes for UI theming.
//!
//! A single seed color is expanded into a full set of role colors and written
//! into the live style namespace. With the `services` feature, the saved seed
//! is restored from the settings store at startup.

pub use seedtone_theme as theme;
#[cfg(feature = "services")]
pub use seedtone_services as services;

/// A "prelude" for users of seedtone.
///
/// Importing this module brings into scope the most common types
/// needed to apply a theme.
///
/// ```rust
/// use seedtone::prelude::*;
///
/// let applier = ThemeApplier::new();
/// applier.apply_theme_color(Color::from_rgb8(0x67, 0x50, 0xa4));
/// assert_eq!(applier.snapshot().get_role(Role::Primary), Some(FALLBACK_SEED));
/// ```
pub mod prelude {
    pub use crate::theme::applier::{apply_theme_color, live_style, ThemeApplier};
    pub use crate::theme::color::{hex_to_hsl, hsl_to_hex, Color, Hsl};
    pub use crate::theme::config::{ThemeConfig, FALLBACK_SEED};
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::palette::{generate_palette, Palette};
    pub use crate::theme::role::Role;
    pub use crate::theme::style::StyleNamespace;

    #[cfg(feature = "services")]
    pub use crate::services::{
        AppliedTheme, FileSettingsStore, SettingsError, SettingsProvider, SettingsStore,
        ThemePersistenceBridge, ThemeSettings,
    };
}
