// SPDX-License-Identifier: LGPL-3.0-only
//! Startup bridge between the settings store and the theme applier.
//!
//! [ThemePersistenceBridge::load_saved_theme] makes one attempt to read the
//! saved seed and applies it. Every failure (store error, timeout, missing or
//! malformed color) is logged and answered with the fallback seed, so the UI
//! always ends up with a complete palette.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use futures::channel::oneshot;
use futures::future::{select, Either};
use seedtone_theme::applier::ThemeApplier;
use seedtone_theme::color::{parse_hex_color, Color};
use seedtone_theme::config::ThemeConfig;

use crate::settings::{SettingsError, SettingsProvider, SettingsStore};

/// What the bridge ended up applying.
#[derive(Debug)]
pub enum AppliedTheme {
    /// The seed stored in the settings.
    Saved(Color),
    /// The fallback seed, and why the saved one could not be used.
    Fallback {
        /// The seed that was applied.
        seed: Color,
        /// The failure that triggered the fallback.
        reason: SettingsError,
    },
}

impl AppliedTheme {
    /// The seed that was applied.
    pub fn seed(&self) -> Color {
        match self {
            AppliedTheme::Saved(seed) => *seed,
            AppliedTheme::Fallback { seed, .. } => *seed,
        }
    }

    /// Whether the fallback seed was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, AppliedTheme::Fallback { .. })
    }
}

/// Loads the persisted theme and drives a [ThemeApplier].
#[derive(Debug, Clone)]
pub struct ThemePersistenceBridge {
    applier: ThemeApplier,
    config: ThemeConfig,
}

impl ThemePersistenceBridge {
    /// Create a bridge writing through the given applier.
    pub fn new(applier: ThemeApplier, config: ThemeConfig) -> Self {
        Self { applier, config }
    }

    /// Create a bridge for the process-wide style namespace.
    pub fn global(config: ThemeConfig) -> Self {
        Self::new(ThemeApplier::global(), config)
    }

    /// The applier this bridge writes through.
    pub fn applier(&self) -> &ThemeApplier {
        &self.applier
    }

    /// The bridge configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Retrieve the saved seed from `provider` and apply it, or apply the
    /// fallback seed on any failure. Makes exactly one attempt.
    pub async fn load_saved_theme<P>(&self, provider: &P) -> AppliedTheme
    where
        P: SettingsProvider + ?Sized,
    {
        match self.fetch_seed(provider).await {
            Ok(seed) => {
                log::info!("Applying saved theme color {}", seed);
                self.applier.apply_theme_color(seed);
                AppliedTheme::Saved(seed)
            },
            Err(reason) => self.apply_fallback(reason),
        }
    }

    /// Like [ThemePersistenceBridge::load_saved_theme], but the provider is
    /// only looked up when the bridge runs. A failed lookup takes the
    /// fallback path.
    pub async fn load_saved_theme_with<F, P>(&self, resolve: F) -> AppliedTheme
    where
        F: FnOnce() -> Result<P, SettingsError>,
        P: SettingsProvider,
    {
        match resolve() {
            Ok(provider) => self.load_saved_theme(&provider).await,
            Err(reason) => self.apply_fallback(reason),
        }
    }

    /// Run [ThemePersistenceBridge::load_saved_theme] in the background.
    ///
    /// The task is detached and always runs to completion, so the handle may
    /// be dropped. Await it to learn what was applied.
    pub fn spawn_load_saved_theme<P>(self, provider: P) -> oneshot::Receiver<AppliedTheme>
    where
        P: SettingsProvider + 'static,
    {
        let (tx, rx) = oneshot::channel();
        smol::spawn(async move {
            let applied = self.load_saved_theme(&provider).await;
            // The receiver may already be gone.
            let _ = tx.send(applied);
        })
        .detach();
        rx
    }

    /// Apply a user-picked seed immediately, then persist it.
    ///
    /// The theme stays applied even if saving fails.
    pub async fn save_and_apply<S>(&self, store: &S, hex: &str) -> anyhow::Result<Color>
    where
        S: SettingsStore + ?Sized,
    {
        let seed = parse_hex_color(hex).with_context(|| format!("Invalid theme color {:?}", hex))?;
        self.applier.apply_theme_color(seed);
        store
            .set_theme_color(seed)
            .await
            .with_context(|| format!("Failed to save theme color {}", seed))?;
        Ok(seed)
    }

    async fn fetch_seed<P>(&self, provider: &P) -> Result<Color, SettingsError>
    where
        P: SettingsProvider + ?Sized,
    {
        let settings = with_timeout(self.config.settings_timeout, provider.get_settings()).await??;
        settings.seed()
    }

    fn apply_fallback(&self, reason: SettingsError) -> AppliedTheme {
        let seed = self.config.fallback_seed;
        log::error!("Failed to load theme from settings: {}", reason);
        log::warn!("Falling back to theme color {}", seed);
        self.applier.apply_theme_color(seed);
        AppliedTheme::Fallback { seed, reason }
    }
}

async fn with_timeout<F>(timeout: Duration, future: F) -> Result<F::Output, SettingsError>
where
    F: Future,
{
    let timer = smol::Timer::after(timeout);
    match select(Box::pin(future), timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(SettingsError::Timeout(timeout)),
    }
}
