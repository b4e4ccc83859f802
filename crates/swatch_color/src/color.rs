//! The sRGB color value shared by every palette component.
//!
//! A [`Color`] is stored as three 8 bit channels. Its canonical text form is a
//! lowercase `#rrggbb` string, which is also how it serializes.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors produced when parsing a color from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input contained a character that is not a hex digit
    #[error("Invalid hex digit in color '{0}'")]
    InvalidDigit(String),

    /// Input had a digit count other than 3 or 6
    #[error("Color '{input}' has {len} hex digits, expected 3 or 6")]
    InvalidLength {
        /// The rejected input
        input: String,
        /// Number of digits found after stripping `#`
        len: usize,
    },
}

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Pack the channels into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Pick a color uniformly from the full RGB cube.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.random_range(0..=0x00ff_ffff))
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`. Case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        match digits.len() {
            3 => {
                // All ASCII hex digits, so byte slicing is safe and parsing cannot fail
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).unwrap_or(0);
                Ok(Self::new(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16)
                    .map_err(|_| ColorError::InvalidDigit(hex.to_string()))?;
                Ok(Self::from_u32(value))
            }
            len => Err(ColorError::InvalidLength {
                input: hex.to_string(),
                len,
            }),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0-1.0.
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build a color from 0.0-1.0 channels, clamping and rounding to the nearest step.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(quantize(r), quantize(g), quantize(b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(Color::from_hex("FF8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Color::from_hex("#f80").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorError::InvalidDigit(_))
        ));
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::new(171, 205, 239).to_string(), "#abcdef");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");

        let back: Color = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(back, Color::new(0, 255, 0));

        assert!(serde_json::from_str::<Color>("\"banana\"").is_err());
    }

    #[test]
    fn test_random_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let hex = Color::random(&mut rng).to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert_eq!(hex, hex.to_lowercase());
        }
    }

    #[test]
    fn test_random_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = Color::random(&mut rng);
        assert!((0..10).any(|_| Color::random(&mut rng) != first));
    }

    #[test]
    fn test_packed_roundtrip() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(color.to_u32(), 0x123456);
        assert_eq!(Color::from_u32(0x123456), color);
    }
}
