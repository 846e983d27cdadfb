// SPDX-License-Identifier: LGPL-3.0-only
//! Settings record and the stores it is retrieved from.
//!
//! The theming subsystem only reads `themeColor`; every other field of the
//! backend record is carried along untouched so a save never drops data the
//! backend owns.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use seedtone_theme::color::{parse_hex_color, Color};
use seedtone_theme::config::{ThemeConfig, FALLBACK_SEED};
use seedtone_theme::error::ThemeError;
use serde::{Deserialize, Serialize};
use smol::fs;
use thiserror::Error;
use xdg::BaseDirectories;

const XDG_PREFIX: &str = "seedtone";
const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while retrieving or storing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The backend could not be reached.
    #[error("Settings store unavailable: {0}")]
    Unavailable(String),

    /// The settings file could not be read or written.
    #[error("Failed to access settings file {0:?}: {1}")]
    Io(PathBuf, #[source] io::Error),

    /// The settings file does not hold a valid settings record.
    #[error("Malformed settings in {0:?}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    /// The store did not answer in time.
    #[error("Settings retrieval timed out after {0:?}")]
    Timeout(Duration),

    /// The record has no theme color.
    #[error("Settings contain no theme color")]
    MissingThemeColor,

    /// The saved theme color is not a valid hex color.
    #[error("Saved theme color is invalid: {0}")]
    InvalidThemeColor(#[from] ThemeError),

    /// No configuration directory could be determined.
    #[error("No configuration directory available: {0}")]
    NoConfigDir(String),
}

/// The persisted application settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Seed color of the UI theme, `#rrggbb`.
    #[serde(default)]
    pub theme_color: String,
    /// Every other backend field, passed through as-is.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ThemeSettings {
    /// Create a record holding only a theme color.
    pub fn with_theme_color(seed: Color) -> Self {
        Self {
            theme_color: seed.to_string(),
            other: serde_json::Map::new(),
        }
    }

    /// The saved seed color.
    pub fn seed(&self) -> Result<Color, SettingsError> {
        let raw = self.theme_color.trim();
        if raw.is_empty() {
            return Err(SettingsError::MissingThemeColor);
        }
        Ok(parse_hex_color(raw)?)
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::with_theme_color(FALLBACK_SEED)
    }
}

/// Read access to the persisted settings.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Retrieve the current settings record.
    async fn get_settings(&self) -> Result<ThemeSettings, SettingsError>;
}

/// Read and write access to the persisted settings.
#[async_trait]
pub trait SettingsStore: SettingsProvider {
    /// Replace the stored settings record.
    async fn save_settings(&self, settings: &ThemeSettings) -> Result<(), SettingsError>;

    /// Store a new seed color, keeping every other field.
    async fn set_theme_color(&self, seed: Color) -> Result<(), SettingsError> {
        let mut settings = self.get_settings().await?;
        settings.theme_color = seed.to_string();
        self.save_settings(&settings).await
    }
}

/// Settings kept as a JSON file.
///
/// By default the file is `$XDG_CONFIG_HOME/seedtone/settings.json`.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store at the default XDG location.
    pub fn new() -> Result<Self, SettingsError> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)
            .map_err(|e| SettingsError::NoConfigDir(e.to_string()))?;
        Ok(Self::with_path(xdg_dirs.get_config_home().join(SETTINGS_FILE)))
    }

    /// Create a store for a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for the configured location, or the XDG default.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, SettingsError> {
        match &config.settings_path {
            Some(path) => Ok(Self::with_path(path)),
            None => Self::new(),
        }
    }

    /// Location of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsProvider for FileSettingsStore {
    async fn get_settings(&self) -> Result<ThemeSettings, SettingsError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings at {:?}, using defaults", self.path);
                return Ok(ThemeSettings::default());
            },
            Err(e) => return Err(SettingsError::Io(self.path.clone(), e)),
        };
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(self.path.clone(), e))
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn save_settings(&self, settings: &ThemeSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Io(parent.to_path_buf(), e))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Parse(self.path.clone(), e))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| SettingsError::Io(self.path.clone(), e))?;

        log::info!("Settings saved to {:?}", self.path);
        Ok(())
    }
}
