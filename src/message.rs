//! Application message types.
//!
//! All user actions are represented as messages in the Elm architecture style.
//! Front ends translate their input events into these and hand them to
//! [`PaletteApp::update`](crate::PaletteApp::update).

use swatch_color::GradientAxis;

use crate::model::PaletteId;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Randomize every unlocked swatch
    Generate,
    /// Flip a swatch's lock
    ToggleLock(usize),
    /// Open or close a swatch's adjust panel
    ToggleAdjust(usize),
    /// A slider was dragged
    SliderInput {
        /// Swatch the slider belongs to
        index: usize,
        /// Which of its three sliders
        axis: GradientAxis,
        /// Raw slider value
        value: f64,
    },
    /// Copy a swatch's hex code
    CopyHex(usize),
    /// Save the current colors under a name
    SavePalette(String),
    /// Show a saved palette on the swatches
    SelectPalette(PaletteId),
}
