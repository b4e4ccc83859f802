//! Rendering surface contract and model-to-view projection.
//!
//! The surface is a pure projection of [`PaletteState`]: it is written to after
//! every change and never read back as a source of colors.

use swatch_color::{Color, GradientAxis, TextColor, text_color_for};

use crate::model::Palette;
use crate::slider_sync::gradient_backgrounds;
use crate::state::PaletteState;

/// What the core needs from whatever draws the swatches.
///
/// Every per-swatch method takes the swatch index; each slider is addressed by
/// its swatch index and axis.
pub trait RenderSurface {
    /// Set a swatch's background color.
    fn set_background(&mut self, index: usize, color: Color);

    /// Set a swatch's label text.
    fn set_label(&mut self, index: usize, text: &str);

    /// Set the color of a swatch's label and icons.
    fn set_text_color(&mut self, index: usize, color: TextColor);

    /// Show a swatch's lock state.
    fn set_locked(&mut self, index: usize, locked: bool);

    /// Open or close a swatch's adjust panel.
    fn set_adjust_open(&mut self, index: usize, open: bool);

    /// Move a slider.
    fn set_slider_position(&mut self, index: usize, axis: GradientAxis, value: f64);

    /// Set a slider track's CSS background.
    fn set_slider_gradient(&mut self, index: usize, axis: GradientAxis, css: &str);

    /// Read where a slider currently sits, if the surface has one there.
    fn slider_position(&self, index: usize, axis: GradientAxis) -> Option<f64>;

    /// Show a short-lived message such as a copy confirmation.
    fn show_notice(&mut self, text: &str);

    /// Show the saved palette list.
    fn set_library(&mut self, palettes: &[Palette]);
}

/// Push the color-dependent visuals of one swatch: background, label, text color
/// and slider track gradients. Slider positions are left alone.
pub fn render_swatch_visuals<R: RenderSurface + ?Sized>(
    surface: &mut R,
    state: &PaletteState,
    index: usize,
) {
    let Some(swatch) = state.swatch(index) else {
        return;
    };
    let color = swatch.color;

    surface.set_background(index, color);
    surface.set_label(index, &color.to_hex());
    surface.set_text_color(index, text_color_for(color));

    let gradients = gradient_backgrounds(color);
    for axis in GradientAxis::ALL {
        surface.set_slider_gradient(index, axis, gradients.get(axis));
    }
}

/// Push everything about one swatch, slider positions included.
pub fn render_swatch<R: RenderSurface + ?Sized>(
    surface: &mut R,
    state: &PaletteState,
    index: usize,
) {
    let (Some(swatch), Some(sliders)) = (state.swatch(index), state.sliders(index)) else {
        return;
    };
    let locked = swatch.locked;

    render_swatch_visuals(surface, state, index);
    surface.set_locked(index, locked);
    surface.set_adjust_open(index, state.is_adjusting(index));
    for axis in GradientAxis::ALL {
        surface.set_slider_position(index, axis, sliders.get(axis));
    }
}

/// Push every swatch.
pub fn render_all<R: RenderSurface + ?Sized>(surface: &mut R, state: &PaletteState) {
    for index in 0..state.len() {
        render_swatch(surface, state, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider_sync::positions_for_color;
    use crate::testing::RecordingSurface;

    #[test]
    fn test_render_swatch_projects_model() {
        let mut state = PaletteState::from_seed(2, 20);
        state.set_swatch_color(1, Color::new(255, 255, 255));
        state.toggle_lock(1);

        let mut surface = RecordingSurface::new(2);
        render_swatch(&mut surface, &state, 1);

        let view = &surface.swatches[1];
        assert_eq!(view.background, Some(Color::WHITE));
        assert_eq!(view.label, "#ffffff");
        assert_eq!(view.text_color, Some(TextColor::Black));
        assert!(view.locked);
        assert!(!view.adjust_open);
        assert_eq!(
            view.brightness_gradient,
            "linear-gradient(to right, #000000, #808080, #ffffff)"
        );
        let positions = positions_for_color(Color::WHITE);
        assert_eq!(view.positions, [positions.hue, positions.saturation, positions.brightness]);

        // Swatch 0 untouched
        assert_eq!(surface.swatches[0].background, None);
    }

    #[test]
    fn test_visuals_leave_positions() {
        let state = PaletteState::from_seed(1, 21);
        let mut surface = RecordingSurface::new(1);
        surface.swatches[0].positions = [1.0, 0.5, 0.5];
        render_swatch_visuals(&mut surface, &state, 0);
        assert_eq!(surface.swatches[0].positions, [1.0, 0.5, 0.5]);
        assert_eq!(surface.swatches[0].background, Some(state.colors()[0]));
    }

    #[test]
    fn test_dark_color_gets_white_text() {
        let mut state = PaletteState::from_seed(1, 22);
        state.set_swatch_color(0, Color::new(10, 10, 40));
        let mut surface = RecordingSurface::new(1);
        render_all(&mut surface, &state);
        assert_eq!(surface.swatches[0].text_color, Some(TextColor::White));
    }
}
