//! Palette id generation.

use crate::model::PaletteId;

/// Hands out strictly increasing palette ids.
///
/// Ids are the current time in milliseconds, the same scheme older saved
/// libraries used, bumped past the last id whenever two saves land in the same
/// millisecond (or the clock runs backwards).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: PaletteId,
}

impl IdGenerator {
    /// Create a generator that has seen no ids yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: PaletteId) {
        self.last = self.last.max(id);
    }

    /// Next id, based on the wall clock.
    pub fn next_id(&mut self) -> PaletteId {
        self.next_at(now_millis())
    }

    /// Next id, given the current time in milliseconds.
    pub fn next_at(&mut self, now_ms: u64) -> PaletteId {
        let id = now_ms.max(self.last.saturating_add(1));
        if id != now_ms {
            log::debug!("Palette id {} taken, using {}", now_ms, id);
        }
        self.last = id;
        id
    }
}

/// Milliseconds since the Unix epoch.
fn now_millis() -> u64 {
    // Use web-time for cross-platform compatibility (native + WASM)
    web_time::SystemTime::now()
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}
