//! Global constants for the swatchgen application

/// Number of swatches when nothing else decides it (the browser layout does)
pub const DEFAULT_SWATCH_COUNT: usize = 5;

/// Storage key holding the saved palette list
pub const DEFAULT_STORAGE_KEY: &str = "palettes";

/// How long the "Copied!" confirmation stays visible, in milliseconds
pub const DEFAULT_COPY_NOTICE_MS: u32 = 1000;

/// Slider ranges, matching the `min`/`max`/`step` attributes in the page markup.
pub mod slider {
    /// Hue slider upper bound (exclusive for positions, 360 wraps to 0)
    pub const HUE_MAX: f64 = 360.0;
    /// Hue slider step
    pub const HUE_STEP: f64 = 1.0;
    /// Saturation and brightness upper bound
    pub const UNIT_MAX: f64 = 1.0;
    /// Saturation and brightness step
    pub const UNIT_STEP: f64 = 0.01;
}

/// User-facing notices shown by the rendering surface.
pub mod notice {
    /// Shown after a hex code reaches the clipboard
    pub const COPIED: &str = "Copied!";
    /// Shown after a palette was stored in the library
    pub const SAVED: &str = "Palette saved";
    /// Shown when the save form is submitted without a name
    pub const NAME_REQUIRED: &str = "Please enter a palette name";
}

/// Class names and attributes the browser front end looks up.
pub mod dom {
    /// One container per swatch
    pub const SWATCH: &str = "color";
    /// Attribute set on each swatch container holding its index
    pub const INDEX_ATTR: &str = "data-index";
    /// Hex label inside a swatch
    pub const LABEL: &str = "color__header";
    /// Lock toggle button inside a swatch
    pub const LOCK_BUTTON: &str = "color__lock";
    /// Adjust panel toggle button inside a swatch
    pub const ADJUST_BUTTON: &str = "color__adjust";
    /// Slider panel inside a swatch
    pub const SLIDER_PANEL: &str = "sliders";
    /// Class added to an open slider panel
    pub const PANEL_OPEN: &str = "active";
    /// Class added to a locked swatch's lock button
    pub const LOCKED: &str = "locked";
    /// Attribute naming a slider's axis (`hue`, `saturation`, `brightness`)
    pub const AXIS_ATTR: &str = "data-axis";
    /// Generate button
    pub const GENERATE_BUTTON: &str = "panel__button--generate";
    /// Save form and its name field
    pub const SAVE_FORM: &str = "save-form";
    /// Name input inside the save form
    pub const SAVE_NAME: &str = "save-form__name";
    /// Library list container
    pub const LIBRARY: &str = "library";
    /// One saved palette in the library list
    pub const LIBRARY_ENTRY: &str = "library__palette";
    /// Palette name inside a library entry
    pub const LIBRARY_NAME: &str = "library__name";
    /// Row of preview chips inside a library entry
    pub const LIBRARY_PREVIEW: &str = "library__preview";
    /// Select button inside a library entry
    pub const LIBRARY_SELECT: &str = "library__select";
    /// Attribute carrying a palette id on library entries
    pub const PALETTE_ID_ATTR: &str = "data-palette-id";
    /// Transient notice popup
    pub const NOTICE: &str = "notice";
    /// Class added to a visible notice
    pub const NOTICE_VISIBLE: &str = "notice--visible";
}
