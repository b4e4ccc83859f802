//! Luminance and foreground color selection.

use std::fmt;

use crate::color::Color;

/// Luminance above which dark text is used.
pub const TEXT_CONTRAST_THRESHOLD: f64 = 0.5;

/// Relative luminance (WCAG 2.x) of a color, in `[0, 1]`.
///
/// Black maps to 0.0 and white to 1.0.
pub fn luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_unit_rgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// sRGB transfer function, decoded to linear light.
fn linearize(channel: f64) -> f64 {
    if channel <= 0.039_28 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Foreground color used for text and icons drawn over a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// Dark text, for light backgrounds
    Black,
    /// Light text, for dark backgrounds
    White,
}

impl TextColor {
    /// CSS keyword for this color.
    pub fn as_css(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    /// The concrete color value.
    pub fn color(self) -> Color {
        match self {
            TextColor::Black => Color::BLACK,
            TextColor::White => Color::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Pick black or white text for a background color.
pub fn text_color_for(background: Color) -> TextColor {
    if luminance(background) > TEXT_CONTRAST_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsl::hsl_to_hex;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(Color::BLACK), 0.0);
        assert!((luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_monotonic_on_grays() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let l = luminance(Color::new(v, v, v));
            assert!(l > previous, "gray {v} not brighter than {}", v.wrapping_sub(1));
            previous = l;
        }
    }

    #[test]
    fn test_text_color_extremes() {
        assert_eq!(text_color_for(Color::BLACK), TextColor::White);
        assert_eq!(text_color_for(Color::WHITE), TextColor::Black);
        assert_eq!(text_color_for(Color::new(255, 255, 0)), TextColor::Black);
        assert_eq!(text_color_for(Color::new(0, 0, 255)), TextColor::White);
    }

    #[test]
    fn test_lightness_ramp_crosses_threshold_once() {
        for hue in [0.0, 60.0, 120.0, 210.0, 300.0] {
            for sat in [0.0, 0.4, 1.0] {
                let picks: Vec<TextColor> = (0..=100)
                    .map(|step| text_color_for(hsl_to_hex(hue, sat, f64::from(step) / 100.0)))
                    .collect();
                let switches = picks.windows(2).filter(|w| w[0] != w[1]).count();
                assert_eq!(switches, 1, "hue {hue} sat {sat}");
                assert_eq!(picks[0], TextColor::White);
                assert_eq!(picks[100], TextColor::Black);
            }
        }
    }

    #[test]
    fn test_css_keywords() {
        assert_eq!(TextColor::Black.to_string(), "black");
        assert_eq!(TextColor::White.as_css(), "white");
    }
}
