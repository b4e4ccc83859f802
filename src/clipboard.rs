//! Clipboard access for copying hex codes.
//!
//! Copying is best-effort: failures are logged and reported as `false`, never
//! surfaced as errors to the user.

use crate::error::PaletteError;

/// Something text can be copied to.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), PaletteError>;
}

/// Copy `text`, logging any failure. Returns whether the copy went through.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            log::debug!("📋 Copied {} to clipboard", text);
            true
        }
        Err(e) => {
            log::warn!("Failed to copy to clipboard: {}", e);
            false
        }
    }
}

/// Clipboard that just remembers the last text, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PaletteError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The desktop clipboard (native only).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(not(target_arch = "wasm32"))]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PaletteError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|e| PaletteError::clipboard(e.to_string()))
    }
}

/// `navigator.clipboard` (WASM only).
///
/// The browser API is asynchronous; the write is started here and its eventual
/// failure is only logged.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserClipboard;

#[cfg(target_arch = "wasm32")]
impl Clipboard for BrowserClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PaletteError> {
        let window =
            web_sys::window().ok_or_else(|| PaletteError::clipboard("No window object available"))?;
        let promise = window.navigator().clipboard().write_text(text);

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("Clipboard write rejected: {:?}", e);
            }
        });
        Ok(())
    }
}
