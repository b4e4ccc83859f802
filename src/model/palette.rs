//! Saved palette records.
//!
//! The serialized shape is `{ "id": number, "name": string, "colors": ["#rrggbb", ...] }`,
//! stored as a JSON array under a single storage key.

use serde::{Deserialize, Serialize};
use swatch_color::Color;

/// Palette identifier. New ids are creation timestamps in milliseconds.
pub type PaletteId = u64;

/// A named snapshot of every swatch color, in swatch order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Palette {
    /// Unique identifier
    pub id: PaletteId,
    /// Display name
    pub name: String,
    /// One color per swatch index
    pub colors: Vec<Color>,
}

impl Palette {
    /// Create a palette record.
    pub fn new(id: PaletteId, name: &str, colors: Vec<Color>) -> Self {
        Self {
            id,
            name: name.to_string(),
            colors,
        }
    }
}
