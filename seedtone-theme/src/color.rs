//! # Color Space Conversion
//!
//! Conversion between 24-bit hex colors and hue/saturation/lightness triples.
//!
//! Hex strings are validated once, at the boundary, by [parse_hex_color]. After
//! that a [Color] is always a valid RGB triple and every conversion in this
//! module is total.
//!
//! ```rust
//! use seedtone_theme::color::{hex_to_hsl, hsl_to_hex};
//!
//! let hsl = hex_to_hsl("#FF0000").unwrap();
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
//! assert_eq!(hsl_to_hex(0.0, 90.0, 30.0).to_string(), "#910808");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ThemeError, ThemeResult};

/// A 24-bit RGB color.
///
/// The canonical text form is six lowercase hex digits. [Color::hex] returns it
/// without a prefix; `Display` and serde use the `#rrggbb` boundary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Opaque black, used for every `on-*` accent role.
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

    /// Create a color from its channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six lowercase hex digits, no `#`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to hue/saturation/lightness.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        parse_hex_color(&hex).map_err(serde::de::Error::custom)
    }
}

/// A hue/saturation/lightness triple.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL triple. No normalization happens here.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to a [Color] via [hsl_to_hex].
    pub fn to_color(&self) -> Color {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// Parse a 6-digit hex color, with or without a leading `#`, in any case.
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ThemeError::invalid_color(format!(
            "expected 6 hex digits, got {:?}",
            hex
        )));
    }
    // from_str_radix tolerates a leading '+', so check digits up front.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::invalid_color(format!(
            "non-hex characters in {:?}",
            hex
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ThemeError::invalid_color(format!("{:?}: {}", hex, e)))
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Convert a hex color string to HSL.
pub fn hex_to_hsl(hex: &str) -> ThemeResult<Hsl> {
    parse_hex_color(hex).map(|color| color.to_hsl())
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Convert an HSL triple to a [Color].
///
/// `s` and `l` are clamped into `[0, 100]` and `h` is wrapped into `[0, 360)`
/// before conversion. For in-range input both steps are no-ops.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Color {
    let h = wrap_hue(h);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        h if h < 360.0 => (c, 0.0, x),
        // NaN hue
        _ => (0.0, 0.0, 0.0),
    };

    Color::from_rgb8(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative value can round up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{} vs {}", a, b);
    }

    #[test]
    fn test_parse_accepts_prefix_and_case() {
        let expected = Color::from_rgb8(0x67, 0x50, 0xa4);
        assert_eq!(parse_hex_color("#6750A4").unwrap(), expected);
        assert_eq!(parse_hex_color("6750a4").unwrap(), expected);
        assert_eq!("#6750a4".parse::<Color>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "+f0000", "#12 456", "ééé"] {
            assert!(
                matches!(parse_hex_color(bad), Err(ThemeError::InvalidColor(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_display_is_lowercase_and_padded() {
        let color = Color::from_rgb8(0x0a, 0x00, 0xff);
        assert_eq!(color.to_string(), "#0a00ff");
        assert_eq!(color.hex(), "0a00ff");
    }

    #[test]
    fn test_primary_colors_to_hsl() {
        assert_eq!(hex_to_hsl("#ff0000").unwrap(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#00ff00").unwrap(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#0000ff").unwrap(), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(hex_to_hsl("#ffffff").unwrap(), Hsl::new(0.0, 0.0, 100.0));
        let gray = hex_to_hsl("#808080").unwrap();
        assert_eq!((gray.h, gray.s), (0.0, 0.0));
        assert_close(gray.l, 50.196, 0.001);
    }

    #[test]
    fn test_seed_hsl_values() {
        let hsl = hex_to_hsl("#6750A4").unwrap();
        assert_close(hsl.h, 256.428_571, 1e-5);
        assert_close(hsl.s, 34.426_229, 1e-5);
        assert_close(hsl.l, 47.843_137, 1e-5);

        let hsl = hex_to_hsl("#f00028").unwrap();
        assert_close(hsl.h, 350.0, 1e-9);
    }

    #[test]
    fn test_hsl_ranges_over_channel_grid() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(85) {
                    let hsl = Color::from_rgb8(r, g, b).to_hsl();
                    assert!((0.0..360.0).contains(&hsl.h), "h={} for {},{},{}", hsl.h, r, g, b);
                    assert!((0.0..=100.0).contains(&hsl.s), "s={} for {},{},{}", hsl.s, r, g, b);
                    assert!((0.0..=100.0).contains(&hsl.l), "l={} for {},{},{}", hsl.l, r, g, b);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_representative_seeds() {
        for seed in ["#6750A4", "#FF0000", "#000000", "#FFFFFF", "#123456", "#abcdef"] {
            let original = parse_hex_color(seed).unwrap();
            let back = original.to_hsl().to_color();
            assert!(original.r.abs_diff(back.r) <= 1, "{} -> {}", original, back);
            assert!(original.g.abs_diff(back.g) <= 1, "{} -> {}", original, back);
            assert!(original.b.abs_diff(back.b) <= 1, "{} -> {}", original, back);
        }
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 90.0, 30.0).to_string(), "#910808");
        assert_eq!(hsl_to_hex(25.0, 80.0, 60.0).to_string(), "#eb8b47");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), Color::WHITE);
        assert_eq!(hsl_to_hex(123.0, 55.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_hue_is_wrapped() {
        assert_eq!(hsl_to_hex(370.0, 100.0, 50.0), hsl_to_hex(10.0, 100.0, 50.0));
        assert_eq!(hsl_to_hex(-10.0, 100.0, 50.0).to_string(), "#ff002b");
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), hsl_to_hex(0.0, 100.0, 50.0));
        assert_eq!(wrap_hue(-1e-20), 0.0);
    }

    #[test]
    fn test_saturation_and_lightness_are_clamped() {
        assert_eq!(hsl_to_hex(75.0, 105.0, 90.0), hsl_to_hex(75.0, 100.0, 90.0));
        assert_eq!(hsl_to_hex(10.0, -5.0, 120.0), Color::WHITE);
    }

    #[test]
    fn test_serde_uses_boundary_form() {
        let color = Color::from_rgb8(0x67, 0x50, 0xa4);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#6750a4\"");
        let back: Color = serde_json::from_str("\"#6750A4\"").unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"#67\"").is_err());
    }
}
