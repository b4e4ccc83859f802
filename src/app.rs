//! Main application: routes messages to the palette model and re-renders.

use swatch_color::GradientAxis;

use crate::clipboard::{Clipboard, copy_to_clipboard};
use crate::constants::notice;
use crate::error::PaletteError;
use crate::library::{PaletteLibrary, PaletteStorage, recall};
use crate::message::Message;
use crate::model::PaletteId;
use crate::render::{RenderSurface, render_all, render_swatch, render_swatch_visuals};
use crate::state::PaletteState;


/// The palette editor.
///
/// Owns the swatch row, the saved library, the surface it draws on and the
/// clipboard. All mutation goes through [`PaletteApp::update`], one message at a
/// time, and every message leaves the surface in sync with the model.
pub struct PaletteApp<S: PaletteStorage, R: RenderSurface, C: Clipboard> {
    state: PaletteState,
    library: PaletteLibrary<S>,
    surface: R,
    clipboard: C,
}

impl<S: PaletteStorage, R: RenderSurface, C: Clipboard> PaletteApp<S, R, C> {
    /// Create the app and draw its initial state.
    pub fn new(state: PaletteState, library: PaletteLibrary<S>, surface: R, clipboard: C) -> Self {
        let mut app = Self {
            state,
            library,
            surface,
            clipboard,
        };
        render_all(&mut app.surface, &app.state);
        app.surface.set_library(app.library.palettes());
        log::debug!(
            "🎨 Palette editor ready: {} swatches, {} saved palettes",
            app.state.len(),
            app.library.len()
        );
        app
    }

    /// The swatch row.
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    /// The saved palette library.
    pub fn library(&self) -> &PaletteLibrary<S> {
        &self.library
    }

    /// The rendering surface.
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// The clipboard.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Update the application state in response to a message.
    pub fn update(&mut self, message: Message) {
        log::trace!("Message: {:?}", message);
        match message {
            Message::Generate => self.handle_generate(),
            Message::ToggleLock(index) => self.handle_toggle_lock(index),
            Message::ToggleAdjust(index) => self.handle_toggle_adjust(index),
            Message::SliderInput { index, axis, value } => {
                self.handle_slider_input(index, axis, value)
            }
            Message::CopyHex(index) => self.handle_copy(index),
            Message::SavePalette(name) => self.handle_save(&name),
            Message::SelectPalette(id) => self.handle_select(id),
        }
    }

    fn handle_generate(&mut self) {
        for index in self.state.randomize_all() {
            render_swatch(&mut self.surface, &self.state, index);
        }
    }

    fn handle_toggle_lock(&mut self, index: usize) {
        if let Some(locked) = self.state.toggle_lock(index) {
            self.surface.set_locked(index, locked);
        }
    }

    fn handle_toggle_adjust(&mut self, index: usize) {
        if let Some(open) = self.state.toggle_adjust(index) {
            self.surface.set_adjust_open(index, open);
        }
    }

    fn handle_slider_input(&mut self, index: usize, axis: GradientAxis, value: f64) {
        if self.state.apply_slider(index, axis, value).is_some() {
            // Only the dragged slider moved; the other two keep their positions
            render_swatch_visuals(&mut self.surface, &self.state, index);
        }
    }

    fn handle_copy(&mut self, index: usize) {
        let Some(swatch) = self.state.swatch(index) else {
            log::warn!("Copy requested for missing swatch {}", index);
            return;
        };
        let hex = swatch.color.to_hex();
        if copy_to_clipboard(&mut self.clipboard, &hex) {
            self.surface.show_notice(notice::COPIED);
        }
    }

    fn handle_save(&mut self, name: &str) {
        let colors = self.state.colors();
        match self.library.save(name, &colors) {
            Ok(_) => {
                self.surface.set_library(self.library.palettes());
                self.surface.show_notice(notice::SAVED);
            }
            Err(PaletteError::EmptyName) => {
                self.surface.show_notice(notice::NAME_REQUIRED);
            }
            Err(e) => {
                // Still listed for this session even though it did not persist
                log::warn!("Failed to persist palette '{}': {}", name.trim(), e);
                self.surface.set_library(self.library.palettes());
            }
        }
    }

    fn handle_select(&mut self, id: PaletteId) {
        let Some(palette) = self.library.find_by_id(id) else {
            log::warn!("{}", PaletteError::NotFound(id));
            return;
        };
        recall(palette, &mut self.state);
        render_all(&mut self.surface, &self.state);
    }
}
