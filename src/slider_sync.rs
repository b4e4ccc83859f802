//! Slider positions and track gradients for the hue/saturation/brightness controls.
//!
//! Positions are what the three range inputs show. They are derived from a color
//! with [`positions_for_color`], and turned back into a color against a swatch's
//! reference color with [`color_from_positions`].

use swatch_color::{Color, GradientAxis, Hsl, css_linear_gradient, gradient_stops};

use crate::constants::slider;

/// Positions of the three sliders belonging to one swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTriple {
    /// Hue in whole degrees, `[0, 360)`
    pub hue: f64,
    /// Saturation in hundredths, `[0, 1]`
    pub saturation: f64,
    /// Lightness in hundredths, `[0, 1]`
    pub brightness: f64,
}

impl SliderTriple {
    /// Position of one slider.
    pub fn get(&self, axis: GradientAxis) -> f64 {
        match axis {
            GradientAxis::Hue => self.hue,
            GradientAxis::Saturation => self.saturation,
            GradientAxis::Brightness => self.brightness,
        }
    }

    /// Replace one slider's position, snapped to that slider's range and step.
    pub fn with(mut self, axis: GradientAxis, value: f64) -> Self {
        let value = snap(axis, value);
        match axis {
            GradientAxis::Hue => self.hue = value,
            GradientAxis::Saturation => self.saturation = value,
            GradientAxis::Brightness => self.brightness = value,
        }
        self
    }
}

/// Snap a raw slider value to the slider's range and step.
///
/// Non-finite input snaps to 0.
pub fn snap(axis: GradientAxis, value: f64) -> f64 {
    let value = if value.is_finite() { value } else { 0.0 };
    match axis {
        GradientAxis::Hue => {
            ((value / slider::HUE_STEP).round() * slider::HUE_STEP).rem_euclid(slider::HUE_MAX)
        }
        GradientAxis::Saturation | GradientAxis::Brightness => {
            let steps = (slider::UNIT_MAX / slider::UNIT_STEP).round();
            (value.clamp(0.0, slider::UNIT_MAX) * steps).round() / steps
        }
    }
}

/// Slider positions showing `color`.
pub fn positions_for_color(color: Color) -> SliderTriple {
    let hsl = Hsl::from(color);
    SliderTriple {
        hue: snap(GradientAxis::Hue, hsl.h),
        saturation: snap(GradientAxis::Saturation, hsl.s),
        brightness: snap(GradientAxis::Brightness, hsl.l),
    }
}

fn component(hsl: Hsl, axis: GradientAxis) -> f64 {
    match axis {
        GradientAxis::Hue => hsl.h,
        GradientAxis::Saturation => hsl.s,
        GradientAxis::Brightness => hsl.l,
    }
}

/// Rebuild a color from slider positions, relative to `base`.
///
/// Each slider still sitting at the position `base` itself would produce keeps
/// `base`'s exact component; only sliders that moved override it. Moving one
/// slider therefore never shifts the other two components through rounding.
pub fn color_from_positions(base: Color, positions: SliderTriple) -> Color {
    let exact = Hsl::from(base);
    let resting = positions_for_color(base);

    let pick = |axis: GradientAxis| {
        let wanted = positions.get(axis);
        if (wanted - resting.get(axis)).abs() < 1e-9 {
            component(exact, axis)
        } else {
            wanted
        }
    };

    Hsl::new(
        pick(GradientAxis::Hue),
        pick(GradientAxis::Saturation),
        pick(GradientAxis::Brightness),
    )
    .to_color()
}

/// CSS backgrounds for the three slider tracks of one swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderGradients {
    /// Hue track background
    pub hue: String,
    /// Saturation track background
    pub saturation: String,
    /// Brightness track background
    pub brightness: String,
}

impl SliderGradients {
    /// Background of one track.
    pub fn get(&self, axis: GradientAxis) -> &str {
        match axis {
            GradientAxis::Hue => &self.hue,
            GradientAxis::Saturation => &self.saturation,
            GradientAxis::Brightness => &self.brightness,
        }
    }
}

/// Track backgrounds for a swatch showing `color`.
pub fn gradient_backgrounds(color: Color) -> SliderGradients {
    let css = |axis| css_linear_gradient(&gradient_stops(color, axis));
    SliderGradients {
        hue: css(GradientAxis::Hue),
        saturation: css(GradientAxis::Saturation),
        brightness: css(GradientAxis::Brightness),
    }
}
