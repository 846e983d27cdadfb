//! # Theme Configuration
//!
//! Startup settings for the theming subsystem: the fallback seed applied when
//! the saved theme cannot be loaded, how long to wait for the settings store,
//! and where the settings file lives.
//!
//! ## Environment Variables
//!
//! - `SEEDTONE_THEME_CONFIG`: Path to a TOML configuration file
//! - `SEEDTONE_THEME_FALLBACK`: Fallback seed color (`#rrggbb`)
//! - `SEEDTONE_SETTINGS_TIMEOUT_MS`: Settings retrieval timeout in milliseconds
//!
//! Values set in the environment override the file.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! fallback = "#6750A4"
//! timeout_ms = 2500
//! settings_path = "/home/me/.config/seedtone/settings.json"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use seedtone_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::from_toml("[theme]\ntimeout_ms = 250").unwrap();
//! assert_eq!(config.settings_timeout, Duration::from_millis(250));
//! assert_eq!(config.fallback_seed.to_string(), "#6750a4");
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::color::{parse_hex_color, Color};
use crate::error::{ThemeError, ThemeResult};

/// Seed applied whenever no saved theme is available.
pub const FALLBACK_SEED: Color = Color::from_rgb8(0x67, 0x50, 0xa4);

/// Default time to wait for the settings store.
pub const DEFAULT_SETTINGS_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_CONFIG: &str = "SEEDTONE_THEME_CONFIG";
const ENV_FALLBACK: &str = "SEEDTONE_THEME_FALLBACK";
const ENV_TIMEOUT: &str = "SEEDTONE_SETTINGS_TIMEOUT_MS";

/// Theme subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Seed applied when the saved theme is unavailable.
    pub fallback_seed: Color,
    /// How long the startup bridge waits for the settings store.
    pub settings_timeout: Duration,
    /// Explicit settings file location. `None` means the XDG default.
    pub settings_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeSection {
    fallback: Option<String>,
    timeout_ms: Option<u64>,
    settings_path: Option<PathBuf>,
}

impl ThemeConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            fallback_seed: FALLBACK_SEED,
            settings_timeout: DEFAULT_SETTINGS_TIMEOUT,
            settings_path: None,
        }
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// Unreadable files and invalid values are logged and skipped.
    pub fn from_env_or_default() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = var(ENV_CONFIG) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_CONFIG, e),
            }
        }

        if let Some(fallback) = var(ENV_FALLBACK) {
            match parse_hex_color(&fallback) {
                Ok(seed) => config.fallback_seed = seed,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_FALLBACK, e),
            }
        }

        if let Some(timeout) = var(ENV_TIMEOUT) {
            match timeout.trim().parse::<u64>() {
                Ok(ms) => config.settings_timeout = Duration::from_millis(ms),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_TIMEOUT, timeout, e),
            }
        }

        config
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::UnsupportedConfigFormat(path.to_path_buf()));
        }

        let content =
            fs::read_to_string(path).map_err(|e| ThemeError::ConfigRead(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }

    /// Load configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ThemeError::config_parse(path, e.to_string()))?;

        let mut config = Self::new();
        if let Some(fallback) = file.theme.fallback {
            config.fallback_seed = parse_hex_color(&fallback)
                .map_err(|e| ThemeError::config_parse(path, e.to_string()))?;
        }
        if let Some(ms) = file.theme.timeout_ms {
            config.settings_timeout = Duration::from_millis(ms);
        }
        config.settings_path = file.theme.settings_path;

        Ok(config)
    }

    /// Set the fallback seed.
    pub fn with_fallback_seed(mut self, seed: Color) -> Self {
        self.fallback_seed = seed;
        self
    }

    /// Set the settings retrieval timeout.
    pub fn with_settings_timeout(mut self, timeout: Duration) -> Self {
        self.settings_timeout = timeout;
        self
    }

    /// Set an explicit settings file location.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
