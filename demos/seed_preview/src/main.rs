use clap::Parser;
use seedtone::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "seed_preview",
    about = "Preview the palette generated from a seed color.",
    after_help = "Examples:\n  seed_preview             Restore the saved theme\n  seed_preview '#6750A4'   Apply a seed without saving\n  seed_preview --save ff0000 --json"
)]
struct Cli {
    /// Print the palette as JSON instead of CSS
    #[arg(long)]
    json: bool,

    /// Persist the seed to the settings file
    #[arg(long, requires = "color")]
    save: bool,

    /// Seed color (`#rrggbb` or `rrggbb`)
    #[arg(value_name = "COLOR")]
    color: Option<Color>,
}

fn print_style(json: bool) -> anyhow::Result<()> {
    let style = live_style();
    if json {
        let seed = style.seed().unwrap_or(FALLBACK_SEED);
        println!("{}", generate_palette(seed).to_json()?);
    } else {
        print!("{}", style.to_css());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ThemeConfig::from_env_or_default();
    let bridge = ThemePersistenceBridge::global(config.clone());

    match cli.color {
        Some(seed) if cli.save => {
            let store = FileSettingsStore::from_config(&config)?;
            smol::block_on(bridge.save_and_apply(&store, &seed.to_string()))?;
            log::info!("Saved {} to {:?}", seed, store.path());
        },
        Some(seed) => {
            bridge.applier().apply_theme_color(seed);
        },
        None => {
            let applied = smol::block_on(
                bridge.load_saved_theme_with(|| FileSettingsStore::from_config(&config)),
            );
            if let AppliedTheme::Fallback { reason, .. } = &applied {
                log::warn!("Using fallback theme: {}", reason);
            }
        },
    }

    print_style(cli.json)
}
