#![warn(missing_docs)]

//! # Seedtone Theming Core
//!
//! Generates a complete, role-based color palette from a single seed color and
//! writes it into the live style namespace UI components read from.
//!
//! ## Overview
//!
//! - **[color]**: Conversion between hex colors and HSL
//! - **[palette]**: Seed color to role palette, by a fixed derivation table
//! - **[style]**: The live style namespace (`--md-sys-color-*` properties)
//! - **[applier]**: Writes palettes into a style namespace
//! - **[config]**: Fallback seed and timeouts from the environment or TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use seedtone_theme::applier::ThemeApplier;
//! use seedtone_theme::role::Role;
//!
//! let applier = ThemeApplier::new();
//! let seed = applier.apply_hex("#6750A4").unwrap();
//!
//! let style = applier.snapshot();
//! assert_eq!(style.get("--md-sys-color-primary"), Some(seed));
//! assert_eq!(style.get_role(Role::Background), style.get_role(Role::Surface));
//! ```
//!
//! For a color picker, [applier::apply_theme_color] applies a hex string to the
//! process-wide namespace directly.

/// Contains the [applier::ThemeApplier] and the interactive entry point.
pub mod applier;
/// Contains [color::Color], [color::Hsl] and the conversions between them.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the palette generator.
pub mod palette;
/// Contains the [role::Role] enum.
pub mod role;
/// Contains the live [style::StyleNamespace].
pub mod style;

pub use applier::{apply_theme_color, ThemeApplier};
pub use color::{hex_to_hsl, hsl_to_hex, parse_hex_color, Color, Hsl};
pub use config::{ThemeConfig, FALLBACK_SEED};
pub use error::{ThemeError, ThemeResult};
pub use palette::{generate_palette, Palette};
pub use role::Role;
pub use style::StyleNamespace;
