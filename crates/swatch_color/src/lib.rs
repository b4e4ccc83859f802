//! swatch_color - color math for the swatchgen palette editor.
//!
//! Stateless building blocks: an 8 bit sRGB [`Color`] with hex parsing and
//! formatting, HSL decomposition, relative luminance with a black/white text
//! picker, and the gradient stops drawn behind each adjustment slider.

mod color;
mod contrast;
mod gradient;
mod hsl;

pub use color::{Color, ColorError};
pub use contrast::{TEXT_CONTRAST_THRESHOLD, TextColor, luminance, text_color_for};
pub use gradient::{GradientAxis, HUE_STOPS, css_linear_gradient, gradient_stops};
pub use hsl::{Hsl, hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
