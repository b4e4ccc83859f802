//! Data models for the palette editor.

mod palette;
mod swatch;

pub use palette::{Palette, PaletteId};
pub use swatch::Swatch;
