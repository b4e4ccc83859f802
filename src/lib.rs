//! swatchgen - browser color palette generator.
//!
//! A fixed row of color swatches that can be randomized, locked, fine-tuned with
//! hue/saturation/brightness sliders, copied, and saved to a persistent library.
//! The model ([`PaletteState`], [`PaletteLibrary`]) is the single source of truth;
//! front ends implement [`RenderSurface`] and feed [`Message`]s to [`PaletteApp`].

mod app;
mod clipboard;
mod config;
pub mod constants;
mod error;
mod library;
mod message;
mod model;
mod render;
mod slider_sync;
mod state;

#[cfg(test)]
mod testing;

pub use app::PaletteApp;
#[cfg(target_arch = "wasm32")]
pub use clipboard::BrowserClipboard;
#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::SystemClipboard;
pub use clipboard::{Clipboard, MemoryClipboard, copy_to_clipboard};
pub use config::{AppConfig, CONFIG_VERSION, ConfigError, LogLevel, UserPreferences};
pub use error::PaletteError;
#[cfg(not(target_arch = "wasm32"))]
pub use library::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use library::LocalStorage;
pub use library::{
    IdGenerator, MemoryStorage, PaletteLibrary, PaletteStorage, parse_palettes, recall,
};
pub use message::Message;
pub use model::{Palette, PaletteId, Swatch};
pub use render::{RenderSurface, render_all, render_swatch, render_swatch_visuals};
pub use slider_sync::{
    SliderGradients, SliderTriple, color_from_positions, gradient_backgrounds,
    positions_for_color, snap,
};
pub use state::PaletteState;
pub use swatch_color as color;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
