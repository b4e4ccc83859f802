//! Persistence backends for the palette library.
//!
//! A backend stores one opaque JSON document. Parsing and recovery from bad
//! content happen in the library, not here.

use crate::error::PaletteError;

/// Somewhere the serialized palette list can be read from and written to.
pub trait PaletteStorage {
    /// Read the stored document. `Ok(None)` when nothing was ever saved.
    fn read(&self) -> Result<Option<String>, PaletteError>;

    /// Replace the stored document. Completes (or fails) before returning.
    fn write(&mut self, json: &str) -> Result<(), PaletteError>;
}

/// Storage held in memory, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with a document.
    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            contents: Some(json.into()),
        }
    }

    /// The currently stored document.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl PaletteStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, json: &str) -> Result<(), PaletteError> {
        self.contents = Some(json.to_string());
        Ok(())
    }
}

/// JSON file on disk (native only).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Store palettes in the file at `path`.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/swatchgen/<key>.json`, or None when no data directory exists.
    pub fn default_path(key: &str) -> Option<std::path::PathBuf> {
        let base = dirs::data_dir().or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))?;
        Some(base.join("swatchgen").join(format!("{key}.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PaletteStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No palette file at {:?}", self.path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, json: &str) -> Result<(), PaletteError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        log::info!("Saved palettes to {:?}", self.path);
        Ok(())
    }
}

/// Browser `window.localStorage` under a single key (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Store palettes under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, PaletteError> {
        let window =
            web_sys::window().ok_or_else(|| PaletteError::storage("No window object available"))?;
        window
            .local_storage()
            .map_err(|e| PaletteError::storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| PaletteError::storage("localStorage not available"))
    }
}

#[cfg(target_arch = "wasm32")]
impl PaletteStorage for LocalStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| PaletteError::storage(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn write(&mut self, json: &str) -> Result<(), PaletteError> {
        Self::storage()?
            .set_item(&self.key, json)
            .map_err(|e| PaletteError::storage(format!("Failed to save to localStorage: {:?}", e)))?;
        log::info!("Saved palettes to localStorage");
        Ok(())
    }
}
