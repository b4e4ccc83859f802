//! Swatch data model: one on-screen color slot.

use swatch_color::Color;

/// A fixed color slot in the editor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Stable position, `0..N`
    pub index: usize,
    /// Color currently displayed
    pub color: Color,
    /// Locked swatches are skipped by randomization
    pub locked: bool,
}

impl Swatch {
    /// Create an unlocked swatch.
    pub fn new(index: usize, color: Color) -> Self {
        Self {
            index,
            color,
            locked: false,
        }
    }
}
