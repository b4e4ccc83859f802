//! Test doubles shared by the unit tests.

use swatch_color::{Color, GradientAxis, TextColor};

use crate::model::Palette;
use crate::render::RenderSurface;

/// What a surface currently shows for one swatch.
#[derive(Debug, Clone, Default)]
pub struct SwatchView {
    pub background: Option<Color>,
    pub label: String,
    pub text_color: Option<TextColor>,
    pub locked: bool,
    pub adjust_open: bool,
    /// Hue, saturation, brightness
    pub positions: [f64; 3],
    pub hue_gradient: String,
    pub saturation_gradient: String,
    pub brightness_gradient: String,
}

/// Surface that records the last value written for everything.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub swatches: Vec<SwatchView>,
    pub notices: Vec<String>,
    pub library: Vec<Palette>,
}

impl RecordingSurface {
    pub fn new(swatch_count: usize) -> Self {
        Self {
            swatches: vec![SwatchView::default(); swatch_count],
            ..Default::default()
        }
    }

    fn axis_slot(axis: GradientAxis) -> usize {
        match axis {
            GradientAxis::Hue => 0,
            GradientAxis::Saturation => 1,
            GradientAxis::Brightness => 2,
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn set_background(&mut self, index: usize, color: Color) {
        self.swatches[index].background = Some(color);
    }

    fn set_label(&mut self, index: usize, text: &str) {
        self.swatches[index].label = text.to_string();
    }

    fn set_text_color(&mut self, index: usize, color: TextColor) {
        self.swatches[index].text_color = Some(color);
    }

    fn set_locked(&mut self, index: usize, locked: bool) {
        self.swatches[index].locked = locked;
    }

    fn set_adjust_open(&mut self, index: usize, open: bool) {
        self.swatches[index].adjust_open = open;
    }

    fn set_slider_position(&mut self, index: usize, axis: GradientAxis, value: f64) {
        self.swatches[index].positions[Self::axis_slot(axis)] = value;
    }

    fn set_slider_gradient(&mut self, index: usize, axis: GradientAxis, css: &str) {
        let view = &mut self.swatches[index];
        let target = match axis {
            GradientAxis::Hue => &mut view.hue_gradient,
            GradientAxis::Saturation => &mut view.saturation_gradient,
            GradientAxis::Brightness => &mut view.brightness_gradient,
        };
        *target = css.to_string();
    }

    fn slider_position(&self, index: usize, axis: GradientAxis) -> Option<f64> {
        self.swatches
            .get(index)
            .map(|view| view.positions[Self::axis_slot(axis)])
    }

    fn show_notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }

    fn set_library(&mut self, palettes: &[Palette]) {
        self.library = palettes.to_vec();
    }
}
