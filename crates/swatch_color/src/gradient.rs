//! Gradient stops for hue, saturation and brightness slider tracks.

use crate::color::Color;
use crate::hsl::Hsl;

/// Which slider a gradient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientAxis {
    /// Hue, 0-360 degrees
    Hue,
    /// HSL saturation
    Saturation,
    /// HSL lightness, shown to users as brightness
    Brightness,
}

impl GradientAxis {
    /// All axes in slider order.
    pub const ALL: [GradientAxis; 3] = [
        GradientAxis::Hue,
        GradientAxis::Saturation,
        GradientAxis::Brightness,
    ];

    /// Lowercase name, used for DOM class names and logs.
    pub fn name(self) -> &'static str {
        match self {
            GradientAxis::Hue => "hue",
            GradientAxis::Saturation => "saturation",
            GradientAxis::Brightness => "brightness",
        }
    }
}

/// The fixed rainbow shown on every hue track.
pub const HUE_STOPS: [Color; 7] = [
    Color::new(255, 0, 0),   // Red
    Color::new(255, 255, 0), // Yellow
    Color::new(0, 255, 0),   // Green
    Color::new(0, 255, 255), // Cyan
    Color::new(0, 0, 255),   // Blue
    Color::new(255, 0, 255), // Magenta
    Color::new(255, 0, 0),   // Red
];

/// Ordered gradient stops for `axis`, derived from `color`.
///
/// - Saturation: `[s = 0, color, s = 1]` at the color's hue and lightness
/// - Brightness: `[black, color at l = 0.5, white]`
/// - Hue: [`HUE_STOPS`], independent of `color`
pub fn gradient_stops(color: Color, axis: GradientAxis) -> Vec<Color> {
    let hsl = Hsl::from(color);
    match axis {
        GradientAxis::Saturation => vec![
            hsl.with_saturation(0.0).to_color(),
            color,
            hsl.with_saturation(1.0).to_color(),
        ],
        GradientAxis::Brightness => vec![
            Color::BLACK,
            hsl.with_lightness(0.5).to_color(),
            Color::WHITE,
        ],
        GradientAxis::Hue => HUE_STOPS.to_vec(),
    }
}

/// Render stops as a left-to-right CSS `linear-gradient`.
pub fn css_linear_gradient(stops: &[Color]) -> String {
    let stops: Vec<String> = stops.iter().map(|c| c.to_hex()).collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}
