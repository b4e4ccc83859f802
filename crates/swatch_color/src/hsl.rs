//! HSL (Hue-Saturation-Lightness) conversions.

use crate::color::Color;

/// HSL color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-1.0
/// - L (lightness): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: f64,
    /// Saturation, `[0, 1]`
    pub s: f64,
    /// Lightness, `[0, 1]`
    pub l: f64,
}

impl Hsl {
    /// Create an HSL triple. Hue is wrapped into `[0, 360)`, the rest clamped.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Same hue and lightness with a different saturation.
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Same hue and saturation with a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Same saturation and lightness with a different hue.
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Convert to the nearest 8 bit sRGB color.
    pub fn to_color(self) -> Color {
        let (r, g, b) = hsl_to_rgb(self);
        Color::from_unit_rgb(r, g, b)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_unit_rgb();
        rgb_to_hsl(r, g, b)
    }
}

/// Decompose a color into HSL.
pub fn hex_to_hsl(color: Color) -> Hsl {
    Hsl::from(color)
}

/// Build a color from HSL components.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Color {
    Hsl::new(h, s, l).to_color()
}

/// Convert RGB to HSL
///
/// Input: RGB values in range 0.0-1.0
/// Output: HSL where H is 0.0-360.0, S and L are 0.0-1.0
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    // Achromatic: hue is undefined, report 0
    if delta < 1e-9 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if max == r {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsl {
        h: h % 360.0,
        s: s.clamp(0.0, 1.0),
        l,
    }
}

/// Convert HSL to RGB
///
/// Output: RGB values in range 0.0-1.0
pub fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let Hsl { h, s, l } = hsl;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s < 1e-9 {
        return (l, l, l);
    }

    let h = h.rem_euclid(360.0) / 360.0;

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
