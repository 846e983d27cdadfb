//! # Palette Generation
//!
//! Derives the complete role palette from one seed color.
//!
//! The derivation is a fixed table of hue offsets, saturation floors and
//! lightness levels tuned for a dark UI. The numbers are the contract: a
//! different number is a different theme.
//!
//! ```rust
//! use seedtone_theme::palette::generate_palette_from_hex;
//! use seedtone_theme::role::Role;
//!
//! let palette = generate_palette_from_hex("#FF0000").unwrap();
//! assert_eq!(palette.get(Role::OnPrimary).to_string(), "#000000");
//! assert_eq!(palette.get(Role::PrimaryContainer).to_string(), "#910808");
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::{hsl_to_hex, parse_hex_color, wrap_hue, Color, Hsl};
use crate::error::ThemeResult;
use crate::role::Role;

/// Hue offset of the secondary accent, in degrees.
pub const SECONDARY_HUE_SHIFT: f64 = 35.0;
/// Hue offset of the tertiary accent, in degrees.
pub const TERTIARY_HUE_SHIFT: f64 = 75.0;

/// The accent tones every role is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedTones {
    /// The seed itself.
    pub base: Hsl,
    /// Hue and saturation of the secondary accent; `l` is the accent lightness.
    pub secondary: Hsl,
    /// Hue and saturation of the tertiary accent; `l` is the accent lightness.
    pub tertiary: Hsl,
}

impl SeedTones {
    /// Derive the accent tones for a seed.
    pub fn from_seed(seed: Color) -> Self {
        let base = seed.to_hsl();
        Self {
            base,
            secondary: Hsl::new(
                wrap_hue(base.h + SECONDARY_HUE_SHIFT),
                (base.s - 20.0).max(30.0),
                60.0,
            ),
            tertiary: Hsl::new(
                wrap_hue(base.h + TERTIARY_HUE_SHIFT),
                (base.s - 15.0).max(35.0),
                65.0,
            ),
        }
    }
}

/// A complete role palette.
///
/// Every [Role] always resolves to a color; there is no partially filled
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    seed: Color,
    colors: [Color; Role::COUNT],
}

impl Palette {
    /// Generate the palette for a seed. Same as [generate_palette].
    pub fn from_seed(seed: Color) -> Self {
        generate_palette(seed)
    }

    /// The seed this palette was generated from.
    pub fn seed(&self) -> Color {
        self.seed
    }

    /// Get the color of a role.
    pub fn get(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Iterate over all roles and their colors in [Role::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.iter().map(move |role| (*role, self.get(*role)))
    }

    /// Serialize the palette as a camelCase JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::ops::Index<Role> for Palette {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        &self.colors[role.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.as_str(), &color)?;
        }
        map.end()
    }
}

/// Generate the full role palette from a seed color.
///
/// Pure: the same seed always yields a bit-identical palette.
pub fn generate_palette(seed: Color) -> Palette {
    let tones = SeedTones::from_seed(seed);
    let SeedTones {
        base,
        secondary,
        tertiary,
    } = tones;

    let surface = hsl_to_hex(base.h, 8.0, 8.0);
    let on_surface = hsl_to_hex(base.h, 8.0, 90.0);

    let mut colors = [Color::BLACK; Role::COUNT];
    let mut set = |role: Role, color: Color| colors[role.index()] = color;

    // Primary: the seed is used unchanged.
    set(Role::Primary, seed);
    set(Role::OnPrimary, Color::BLACK);
    set(
        Role::PrimaryContainer,
        hsl_to_hex(base.h, (base.s - 10.0).max(40.0), 30.0),
    );
    set(
        Role::OnPrimaryContainer,
        hsl_to_hex(base.h, base.s.max(80.0), 90.0),
    );

    set(Role::Secondary, secondary.to_color());
    set(Role::OnSecondary, Color::BLACK);
    set(
        Role::SecondaryContainer,
        hsl_to_hex(secondary.h, secondary.s, 30.0),
    );
    set(
        Role::OnSecondaryContainer,
        hsl_to_hex(secondary.h, secondary.s + 20.0, 90.0),
    );

    set(Role::Tertiary, tertiary.to_color());
    set(Role::OnTertiary, Color::BLACK);
    set(
        Role::TertiaryContainer,
        hsl_to_hex(tertiary.h, tertiary.s, 30.0),
    );
    set(
        Role::OnTertiaryContainer,
        hsl_to_hex(tertiary.h, tertiary.s + 20.0, 90.0),
    );

    // Neutrals keep the seed hue at low saturation.
    set(Role::Surface, surface);
    set(Role::OnSurface, on_surface);
    set(Role::SurfaceVariant, hsl_to_hex(base.h, 10.0, 25.0));
    set(Role::OnSurfaceVariant, hsl_to_hex(base.h, 10.0, 80.0));
    set(Role::SurfaceContainerLowest, hsl_to_hex(base.h, 8.0, 6.0));
    set(Role::SurfaceContainerLow, hsl_to_hex(base.h, 8.0, 11.0));
    set(Role::SurfaceContainer, hsl_to_hex(base.h, 8.0, 13.0));
    set(Role::SurfaceContainerHigh, hsl_to_hex(base.h, 8.0, 15.0));
    set(Role::SurfaceContainerHighest, hsl_to_hex(base.h, 8.0, 17.0));

    set(Role::Outline, hsl_to_hex(base.h, 8.0, 40.0));
    set(Role::OutlineVariant, hsl_to_hex(base.h, 10.0, 30.0));

    set(Role::Background, surface);
    set(Role::OnBackground, on_surface);

    Palette { seed, colors }
}

/// Parse a hex seed and generate its palette.
pub fn generate_palette_from_hex(hex: &str) -> ThemeResult<Palette> {
    parse_hex_color(hex).map(generate_palette)
}
