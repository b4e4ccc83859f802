//! Browser front end: a DOM [`RenderSurface`] and the event wiring that turns
//! clicks, slider drags and form submits into [`Message`]s.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, Window};

use swatch_color::{Color, GradientAxis, TextColor};

use crate::app::PaletteApp;
use crate::clipboard::BrowserClipboard;
use crate::config::AppConfig;
use crate::constants::dom;
use crate::library::{LocalStorage, PaletteLibrary};
use crate::message::Message;
use crate::model::{Palette, PaletteId};
use crate::render::RenderSurface;
use crate::state::PaletteState;

type BrowserApp = PaletteApp<LocalStorage, DomSurface, BrowserClipboard>;

fn js_error(context: &str) -> JsValue {
    JsValue::from_str(context)
}

/// Log a failed DOM call instead of aborting the render.
fn log_dom_error<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("DOM update failed ({}): {:?}", what, e);
    }
}

/// Renders the palette onto the page markup.
///
/// Expects one `.color` container per swatch, each holding a `.color__header`
/// label, `.color__lock` and `.color__adjust` buttons, and a `.sliders` panel
/// with three `input[type=range][data-axis]` sliders. The `.notice` popup and
/// `.library` list are optional.
pub struct DomSurface {
    window: Window,
    document: Document,
    swatches: Vec<HtmlElement>,
    notice: Option<HtmlElement>,
    library: Option<Element>,
    notice_ms: i32,
    notice_timer: Option<i32>,
}

impl DomSurface {
    /// Find the swatch containers and tag each with its index.
    pub fn attach(window: Window, document: Document, notice_ms: u32) -> Result<Self, JsValue> {
        let nodes = document.query_selector_all(&format!(".{}", dom::SWATCH))?;
        let mut swatches = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let element: HtmlElement = node.dyn_into()?;
            element.set_attribute(dom::INDEX_ATTR, &swatches.len().to_string())?;
            swatches.push(element);
        }

        let notice = document
            .query_selector(&format!(".{}", dom::NOTICE))?
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        let library = document.query_selector(&format!(".{}", dom::LIBRARY))?;

        Ok(Self {
            window,
            document,
            swatches,
            notice,
            library,
            notice_ms: i32::try_from(notice_ms).unwrap_or(i32::MAX),
            notice_timer: None,
        })
    }

    /// Number of swatch containers on the page.
    pub fn swatch_count(&self) -> usize {
        self.swatches.len()
    }

    fn part(&self, index: usize, class: &str) -> Option<HtmlElement> {
        self.swatches
            .get(index)?
            .query_selector(&format!(".{}", class))
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn slider(&self, index: usize, axis: GradientAxis) -> Option<HtmlInputElement> {
        self.swatches
            .get(index)?
            .query_selector(&format!("input[{}=\"{}\"]", dom::AXIS_ATTR, axis.name()))
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn library_entry(&self, palette: &Palette) -> Result<Element, JsValue> {
        let entry = self.document.create_element("li")?;
        entry.set_class_name(dom::LIBRARY_ENTRY);

        let name = self.document.create_element("span")?;
        name.set_class_name(dom::LIBRARY_NAME);
        name.set_text_content(Some(&palette.name));
        entry.append_child(&name)?;

        let preview = self.document.create_element("div")?;
        preview.set_class_name(dom::LIBRARY_PREVIEW);
        for color in &palette.colors {
            let chip = self.document.create_element("div")?;
            chip.set_attribute("style", &format!("background-color: {}", color))?;
            preview.append_child(&chip)?;
        }
        entry.append_child(&preview)?;

        let select = self.document.create_element("button")?;
        select.set_class_name(dom::LIBRARY_SELECT);
        select.set_attribute(dom::PALETTE_ID_ATTR, &palette.id.to_string())?;
        select.set_text_content(Some("Select"));
        entry.append_child(&select)?;

        Ok(entry)
    }
}

impl RenderSurface for DomSurface {
    fn set_background(&mut self, index: usize, color: Color) {
        if let Some(swatch) = self.swatches.get(index) {
            log_dom_error(
                swatch.style().set_property("background-color", &color.to_hex()),
                "background",
            );
        }
    }

    fn set_label(&mut self, index: usize, text: &str) {
        if let Some(label) = self.part(index, dom::LABEL) {
            label.set_text_content(Some(text));
        }
    }

    fn set_text_color(&mut self, index: usize, color: TextColor) {
        // Label and button icons inherit it
        if let Some(swatch) = self.swatches.get(index) {
            log_dom_error(swatch.style().set_property("color", color.as_css()), "text color");
        }
    }

    fn set_locked(&mut self, index: usize, locked: bool) {
        if let Some(button) = self.part(index, dom::LOCK_BUTTON) {
            log_dom_error(
                button.class_list().toggle_with_force(dom::LOCKED, locked),
                "lock",
            );
            log_dom_error(
                button.set_attribute("aria-pressed", if locked { "true" } else { "false" }),
                "lock",
            );
        }
    }

    fn set_adjust_open(&mut self, index: usize, open: bool) {
        if let Some(panel) = self.part(index, dom::SLIDER_PANEL) {
            log_dom_error(
                panel.class_list().toggle_with_force(dom::PANEL_OPEN, open),
                "adjust panel",
            );
        }
    }

    fn set_slider_position(&mut self, index: usize, axis: GradientAxis, value: f64) {
        if let Some(slider) = self.slider(index, axis) {
            slider.set_value(&value.to_string());
        }
    }

    fn set_slider_gradient(&mut self, index: usize, axis: GradientAxis, css: &str) {
        if let Some(slider) = self.slider(index, axis) {
            log_dom_error(
                slider.style().set_property("background-image", css),
                "slider gradient",
            );
        }
    }

    fn slider_position(&self, index: usize, axis: GradientAxis) -> Option<f64> {
        self.slider(index, axis)?.value().parse().ok()
    }

    fn show_notice(&mut self, text: &str) {
        let Some(notice) = self.notice.clone() else {
            log::debug!("Notice: {}", text);
            return;
        };
        notice.set_text_content(Some(text));
        log_dom_error(notice.class_list().add_1(dom::NOTICE_VISIBLE), "notice");

        if let Some(timer) = self.notice_timer.take() {
            self.window.clear_timeout_with_handle(timer);
        }
        let hide = Closure::once_into_js(move || {
            log_dom_error(notice.class_list().remove_1(dom::NOTICE_VISIBLE), "notice");
        });
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref::<js_sys::Function>(),
                self.notice_ms,
            )
        {
            Ok(timer) => self.notice_timer = Some(timer),
            Err(e) => log::warn!("Failed to schedule notice hide: {:?}", e),
        }
    }

    fn set_library(&mut self, palettes: &[Palette]) {
        let Some(list) = &self.library else {
            return;
        };
        list.set_inner_html("");
        for palette in palettes {
            match self.library_entry(palette) {
                Ok(entry) => log_dom_error(list.append_child(&entry), "library"),
                Err(e) => log::warn!("Failed to build library entry '{}': {:?}", palette.name, e),
            }
        }
    }
}

/// Index of the swatch containing `element`.
fn swatch_index(element: &Element) -> Option<usize> {
    element
        .closest(&format!(".{}", dom::SWATCH))
        .ok()
        .flatten()?
        .get_attribute(dom::INDEX_ATTR)?
        .parse()
        .ok()
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn within(element: &Element, class: &str) -> bool {
    matches!(element.closest(&format!(".{}", class)), Ok(Some(_)))
}

/// Translate a click anywhere on the page into a message.
fn click_message(element: &Element) -> Option<Message> {
    if within(element, dom::GENERATE_BUTTON) {
        return Some(Message::Generate);
    }
    if let Ok(Some(entry)) = element.closest(&format!("[{}]", dom::PALETTE_ID_ATTR)) {
        let id: PaletteId = entry.get_attribute(dom::PALETTE_ID_ATTR)?.parse().ok()?;
        return Some(Message::SelectPalette(id));
    }

    let index = swatch_index(element)?;
    if within(element, dom::LOCK_BUTTON) {
        Some(Message::ToggleLock(index))
    } else if within(element, dom::ADJUST_BUTTON) {
        Some(Message::ToggleAdjust(index))
    } else if within(element, dom::LABEL) {
        Some(Message::CopyHex(index))
    } else {
        None
    }
}

/// Translate a slider `input` event into a message.
fn slider_message(element: &Element) -> Option<Message> {
    let axis_name = element.get_attribute(dom::AXIS_ATTR)?;
    let axis = GradientAxis::ALL
        .into_iter()
        .find(|axis| axis.name() == axis_name)?;
    let input = element.dyn_ref::<HtmlInputElement>()?;
    let value = input.value().parse().ok()?;
    Some(Message::SliderInput {
        index: swatch_index(element)?,
        axis,
        value,
    })
}

fn listen(
    document: &Document,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Leak the closure to keep it alive
    Ok(())
}

fn wire_events(document: &Document, app: &Rc<RefCell<BrowserApp>>) -> Result<(), JsValue> {
    let click_app = Rc::clone(app);
    listen(document, "click", move |event| {
        if let Some(message) = event_element(&event).as_ref().and_then(click_message) {
            click_app.borrow_mut().update(message);
        }
    })?;

    let input_app = Rc::clone(app);
    listen(document, "input", move |event| {
        if let Some(message) = event_element(&event).as_ref().and_then(slider_message) {
            input_app.borrow_mut().update(message);
        }
    })?;

    let submit_app = Rc::clone(app);
    listen(document, "submit", move |event| {
        let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        if !form.class_list().contains(dom::SAVE_FORM) {
            return;
        }
        event.prevent_default();

        let name = form
            .query_selector(&format!(".{}", dom::SAVE_NAME))
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let mut app = submit_app.borrow_mut();
        let before = app.library().len();
        app.update(Message::SavePalette(name));
        if app.library().len() > before {
            form.reset();
        }
    })?;

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    if let Err(e) = console_log::init_with_level(config.preferences.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already initialized: {}", e).into());
    }
    log::info!("🎨 swatchgen starting");

    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;

    let surface = DomSurface::attach(window, document.clone(), config.preferences.copy_notice_ms)?;
    if surface.swatch_count() == 0 {
        log::warn!("No .{} elements on the page, nothing to do", dom::SWATCH);
        return Ok(());
    }

    let state = PaletteState::initialize(surface.swatch_count());
    let library = PaletteLibrary::open(LocalStorage::new(config.preferences.storage_key.clone()));
    let app = Rc::new(RefCell::new(PaletteApp::new(
        state,
        library,
        surface,
        BrowserClipboard,
    )));

    wire_events(&document, &app).inspect_err(|e| {
        log::error!("Failed to wire page events: {:?}", e);
    })
}
