// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # Seedtone Services
//!
//! Settings persistence for the theming core.
//!
//! - **[settings]**: The settings record and the stores it lives in
//! - **[bridge]**: Restores the saved theme at startup and saves user picks
//!
//! Loading the saved theme never fails: any problem with the store ends in
//! the fallback seed being applied.
//!
//! ```rust
//! use seedtone_services::{FileSettingsStore, SettingsError, ThemePersistenceBridge};
//! use seedtone_theme::{ThemeApplier, ThemeConfig, FALLBACK_SEED};
//!
//! let bridge = ThemePersistenceBridge::new(ThemeApplier::new(), ThemeConfig::new());
//! let applied = smol::block_on(bridge.load_saved_theme_with(
//!     || -> Result<FileSettingsStore, _> { Err(SettingsError::NoConfigDir("HOME unset".into())) },
//! ));
//! assert!(applied.is_fallback());
//! assert_eq!(bridge.applier().current_seed(), Some(FALLBACK_SEED));
//! ```

/// Contains the [bridge::ThemePersistenceBridge].
pub mod bridge;
/// Contains [settings::ThemeSettings] and the settings stores.
pub mod settings;

pub use bridge::{AppliedTheme, ThemePersistenceBridge};
pub use settings::{FileSettingsStore, SettingsError, SettingsProvider, SettingsStore, ThemeSettings};
