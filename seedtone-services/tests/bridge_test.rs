use std::time::Duration;

use async_trait::async_trait;
use seedtone_services::{AppliedTheme, SettingsError, SettingsProvider, ThemePersistenceBridge, ThemeSettings};
use seedtone_theme::{generate_palette, Color, Role, ThemeApplier, ThemeConfig, FALLBACK_SEED};

struct StaticProvider(ThemeSettings);

#[async_trait]
impl SettingsProvider for StaticProvider {
    async fn get_settings(&self) -> Result<ThemeSettings, SettingsError> {
        Ok(self.0.clone())
    }
}

struct UnreachableProvider;

#[async_trait]
impl SettingsProvider for UnreachableProvider {
    async fn get_settings(&self) -> Result<ThemeSettings, SettingsError> {
        Err(SettingsError::Unavailable("backend process not running".to_string()))
    }
}

struct SlowProvider(Duration);

#[async_trait]
impl SettingsProvider for SlowProvider {
    async fn get_settings(&self) -> Result<ThemeSettings, SettingsError> {
        smol::Timer::after(self.0).await;
        Ok(ThemeSettings::with_theme_color(Color::from_rgb8(0xff, 0, 0)))
    }
}

fn settings_with(theme_color: &str) -> ThemeSettings {
    ThemeSettings {
        theme_color: theme_color.to_string(),
        other: serde_json::Map::new(),
    }
}

fn bridge() -> ThemePersistenceBridge {
    ThemePersistenceBridge::new(ThemeApplier::new(), ThemeConfig::new())
}

fn assert_palette_applied(bridge: &ThemePersistenceBridge, seed: Color) {
    let style = bridge.applier().snapshot();
    let palette = generate_palette(seed);
    assert!(style.is_populated());
    for role in Role::ALL {
        assert_eq!(style.get_role(role), Some(palette.get(role)), "role {}", role);
    }
}

#[tokio::test]
async fn test_saved_color_is_applied() {
    let bridge = bridge();
    let applied = bridge
        .load_saved_theme(&StaticProvider(settings_with("#FF0000")))
        .await;

    assert!(matches!(applied, AppliedTheme::Saved(_)));
    assert_eq!(applied.seed(), Color::from_rgb8(0xff, 0, 0));
    assert_palette_applied(&bridge, Color::from_rgb8(0xff, 0, 0));
}

#[tokio::test]
async fn test_retrieval_error_applies_fallback() {
    let bridge = bridge();
    let applied = bridge.load_saved_theme(&UnreachableProvider).await;

    assert!(applied.is_fallback());
    assert_eq!(applied.seed(), FALLBACK_SEED);
    assert!(matches!(
        applied,
        AppliedTheme::Fallback { reason: SettingsError::Unavailable(_), .. }
    ));
    assert_palette_applied(&bridge, "#6750A4".parse().unwrap());
}

#[tokio::test]
async fn test_empty_theme_color_applies_fallback() {
    let bridge = bridge();
    let applied = bridge.load_saved_theme(&StaticProvider(settings_with(""))).await;

    assert!(matches!(
        applied,
        AppliedTheme::Fallback { reason: SettingsError::MissingThemeColor, .. }
    ));
    assert_palette_applied(&bridge, FALLBACK_SEED);
}

#[tokio::test]
async fn test_malformed_theme_color_applies_fallback() {
    let bridge = bridge();
    let applied = bridge
        .load_saved_theme(&StaticProvider(settings_with("#67zz")))
        .await;

    assert!(matches!(
        applied,
        AppliedTheme::Fallback { reason: SettingsError::InvalidThemeColor(_), .. }
    ));
    assert_palette_applied(&bridge, FALLBACK_SEED);
}

#[tokio::test]
async fn test_timeout_applies_fallback() {
    let config = ThemeConfig::new().with_settings_timeout(Duration::from_millis(50));
    let bridge = ThemePersistenceBridge::new(ThemeApplier::new(), config);
    let applied = bridge
        .load_saved_theme(&SlowProvider(Duration::from_secs(5)))
        .await;

    match applied {
        AppliedTheme::Fallback { seed, reason: SettingsError::Timeout(after) } => {
            assert_eq!(seed, FALLBACK_SEED);
            assert_eq!(after, Duration::from_millis(50));
        },
        other => panic!("expected a timeout fallback, got {:?}", other),
    }
    assert_palette_applied(&bridge, FALLBACK_SEED);
}

#[tokio::test]
async fn test_configured_fallback_seed() {
    let config = ThemeConfig::new().with_fallback_seed(Color::from_rgb8(0, 0xff, 0));
    let bridge = ThemePersistenceBridge::new(ThemeApplier::new(), config);
    let applied = bridge.load_saved_theme(&UnreachableProvider).await;

    assert_eq!(applied.seed(), Color::from_rgb8(0, 0xff, 0));
    assert_palette_applied(&bridge, Color::from_rgb8(0, 0xff, 0));
}

#[tokio::test]
async fn test_provider_resolved_at_call_time() {
    let bridge = bridge();
    let applied = bridge
        .load_saved_theme_with(|| Ok(StaticProvider(settings_with("#123456"))))
        .await;
    assert_eq!(applied.seed(), Color::from_rgb8(0x12, 0x34, 0x56));

    let applied = bridge
        .load_saved_theme_with(|| -> Result<StaticProvider, _> {
            Err(SettingsError::NoConfigDir("HOME is not set".to_string()))
        })
        .await;
    assert!(matches!(
        applied,
        AppliedTheme::Fallback { reason: SettingsError::NoConfigDir(_), .. }
    ));
    assert_palette_applied(&bridge, FALLBACK_SEED);
}

#[tokio::test]
async fn test_spawned_load_runs_in_background() {
    let bridge = bridge();
    let applier = bridge.applier().clone();

    let handle = bridge.spawn_load_saved_theme(StaticProvider(settings_with("#abcdef")));
    let applied = handle.await.unwrap();

    assert_eq!(applied.seed(), Color::from_rgb8(0xab, 0xcd, 0xef));
    assert_eq!(applier.current_seed(), Some(Color::from_rgb8(0xab, 0xcd, 0xef)));
}

#[tokio::test]
async fn test_user_pick_overrides_saved_theme() {
    let bridge = bridge();
    bridge
        .load_saved_theme(&StaticProvider(settings_with("#FF0000")))
        .await;
    bridge.applier().apply_hex("#6750A4").unwrap();

    assert_palette_applied(&bridge, FALLBACK_SEED);
}

#[tokio::test]
async fn test_spawned_load_completes_without_handle() {
    let bridge = bridge();
    let applier = bridge.applier().clone();

    drop(bridge.spawn_load_saved_theme(SlowProvider(Duration::from_millis(50))));
    assert_eq!(applier.current_seed(), None);

    let mut waited = Duration::ZERO;
    while applier.current_seed().is_none() && waited < Duration::from_secs(5) {
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }
    assert_eq!(applier.current_seed(), Some(Color::from_rgb8(0xff, 0, 0)));
}
