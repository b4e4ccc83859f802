//! Saved palette library.
//!
//! Palettes are kept in memory and mirrored to a [`PaletteStorage`] backend as a
//! JSON array after every change. Reading never fails: a missing document is an
//! empty library, unreadable JSON is logged and treated as empty, and individual
//! malformed records are dropped.

mod id;
mod storage;

#[cfg(test)]
mod tests;

pub use id::IdGenerator;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, PaletteStorage};

use swatch_color::Color;

use crate::error::PaletteError;
use crate::model::{Palette, PaletteId};
use crate::state::PaletteState;

/// Named palettes, persisted through `S`.
#[derive(Debug)]
pub struct PaletteLibrary<S: PaletteStorage> {
    storage: S,
    palettes: Vec<Palette>,
    ids: IdGenerator,
}

impl<S: PaletteStorage> PaletteLibrary<S> {
    /// Open a library, loading whatever `storage` already holds.
    pub fn open(storage: S) -> Self {
        let mut library = Self {
            storage,
            palettes: Vec::new(),
            ids: IdGenerator::new(),
        };
        library.reload();
        library
    }

    /// Read the persisted palette list.
    pub fn load_all(&self) -> Vec<Palette> {
        match self.storage.read() {
            Ok(Some(json)) => parse_palettes(&json),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read palette library: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the in-memory list with the persisted one.
    pub fn reload(&mut self) {
        self.palettes = self.load_all();
        for palette in &self.palettes {
            self.ids.observe(palette.id);
        }
        log::info!("Loaded {} saved palettes", self.palettes.len());
    }

    /// Palettes in the order they were saved.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Number of saved palettes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Look up a palette by id.
    pub fn find_by_id(&self, id: PaletteId) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Save `colors` under `name` with a fresh id.
    ///
    /// Names are trimmed; an empty name is rejected. The palette stays in memory
    /// even if writing to storage fails, in which case the storage error is returned.
    pub fn save(&mut self, name: &str, colors: &[Color]) -> Result<Palette, PaletteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PaletteError::EmptyName);
        }

        let palette = Palette::new(self.ids.next_id(), name, colors.to_vec());
        self.insert(palette.clone())?;
        log::info!("💾 Saved palette '{}' ({})", palette.name, palette.id);
        Ok(palette)
    }

    /// Add a palette built elsewhere, keeping its id.
    pub fn insert(&mut self, palette: Palette) -> Result<(), PaletteError> {
        if self.find_by_id(palette.id).is_some() {
            return Err(PaletteError::IdCollision(palette.id));
        }
        self.ids.observe(palette.id);
        self.palettes.push(palette);
        self.persist()
    }

    fn persist(&mut self) -> Result<(), PaletteError> {
        let json = serde_json::to_string(&self.palettes)?;
        self.storage.write(&json)
    }
}

/// Parse a stored palette list, dropping anything malformed.
pub fn parse_palettes(json: &str) -> Vec<Palette> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Palette library is not a JSON array, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut palettes: Vec<Palette> = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Palette>(entry) {
            Ok(palette) if palettes.iter().any(|p| p.id == palette.id) => {
                log::warn!("Dropping palette '{}': duplicate id {}", palette.name, palette.id);
            }
            Ok(palette) => palettes.push(palette),
            Err(e) => log::warn!("Dropping malformed palette entry: {}", e),
        }
    }
    palettes
}

/// Show a saved palette on the swatch row.
///
/// Each swatch gets the palette color at its index, regardless of lock state, and
/// that color becomes its new slider reference. Extra palette colors are ignored;
/// swatches beyond the palette's length are left alone. Returns how many swatches
/// were updated.
pub fn recall(palette: &Palette, state: &mut PaletteState) -> usize {
    let count = palette.colors.len().min(state.len());
    if palette.colors.len() != state.len() {
        log::debug!(
            "Palette '{}' has {} colors for {} swatches",
            palette.name,
            palette.colors.len(),
            state.len()
        );
    }
    for (index, color) in palette.colors.iter().take(count).enumerate() {
        state.set_swatch_color(index, *color);
    }
    log::debug!("📂 Recalled palette '{}'", palette.name);
    count
}
