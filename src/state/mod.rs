//! Application state management modules.

mod palette;

pub use palette::PaletteState;
