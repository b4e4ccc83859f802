//! Error types for palette state and library operations.

use thiserror::Error;

use crate::model::PaletteId;

/// Errors that can occur while editing swatches or managing the palette library.
///
/// None of these are fatal: callers log them and leave the visible state as it was.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Swatch index outside `0..len`
    #[error("Swatch index {index} out of range (0..{len})")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of swatches
        len: usize,
    },

    /// Palette saved without a name
    #[error("Palette name must not be empty")]
    EmptyName,

    /// A palette with this id already exists in the library
    #[error("Palette id {0} already exists")]
    IdCollision(PaletteId),

    /// No palette with this id in the library
    #[error("Palette not found: {0}")]
    NotFound(PaletteId),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file storage operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend error (localStorage in WASM)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Clipboard backend error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Malformed color text
    #[error("Invalid color: {0}")]
    Color(#[from] swatch_color::ColorError),
}

impl PaletteError {
    /// Create a storage error with a message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a clipboard error with a message.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }
}
