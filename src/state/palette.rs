//! In-memory swatch row: the single source of truth for what each swatch shows.

use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_color::{Color, GradientAxis};

use crate::error::PaletteError;
use crate::model::Swatch;
use crate::slider_sync::{SliderTriple, color_from_positions, positions_for_color};

/// Everything tracked for one swatch.
#[derive(Debug, Clone)]
struct SwatchSlot {
    swatch: Swatch,
    /// Color captured at the last randomize/recall; slider edits compose against it
    reference: Color,
    /// Current slider positions
    sliders: SliderTriple,
    /// Whether the adjust panel is open
    adjusting: bool,
}

impl SwatchSlot {
    fn new(index: usize, color: Color) -> Self {
        Self {
            swatch: Swatch::new(index, color),
            reference: color,
            sliders: positions_for_color(color),
            adjusting: false,
        }
    }

    /// Show `color` and make it the new slider reference.
    fn capture(&mut self, color: Color) {
        self.swatch.color = color;
        self.reference = color;
        self.sliders = positions_for_color(color);
    }
}

/// A fixed row of swatches with lock flags, slider positions and reference colors.
///
/// The number of swatches is fixed at construction.
#[derive(Debug, Clone)]
pub struct PaletteState {
    slots: Vec<SwatchSlot>,
    rng: StdRng,
}

impl PaletteState {
    /// Create `n` unlocked swatches with random colors, seeded from the OS.
    pub fn initialize(n: usize) -> Self {
        Self::with_rng(n, StdRng::from_os_rng())
    }

    /// Create `n` swatches with a deterministic color sequence.
    pub fn from_seed(n: usize, seed: u64) -> Self {
        Self::with_rng(n, StdRng::seed_from_u64(seed))
    }

    /// Create `n` swatches drawing colors from `rng`.
    pub fn with_rng(n: usize, mut rng: StdRng) -> Self {
        let slots = (0..n)
            .map(|index| SwatchSlot::new(index, Color::random(&mut rng)))
            .collect();
        log::debug!("🎨 Initialized {} swatches", n);
        Self { slots, rng }
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no swatches at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Swatch at `index`.
    pub fn swatch(&self, index: usize) -> Option<&Swatch> {
        self.slots.get(index).map(|slot| &slot.swatch)
    }

    /// All swatches in order.
    pub fn swatches(&self) -> impl Iterator<Item = &Swatch> {
        self.slots.iter().map(|slot| &slot.swatch)
    }

    /// Current colors in swatch order.
    pub fn colors(&self) -> Vec<Color> {
        self.swatches().map(|s| s.color).collect()
    }

    /// Current slider positions of the swatch at `index`.
    pub fn sliders(&self, index: usize) -> Option<SliderTriple> {
        self.slots.get(index).map(|slot| slot.sliders)
    }

    /// Reference color slider edits of the swatch at `index` compose against.
    pub fn reference(&self, index: usize) -> Option<Color> {
        self.slots.get(index).map(|slot| slot.reference)
    }

    /// Whether the adjust panel of the swatch at `index` is open.
    pub fn is_adjusting(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.adjusting)
    }

    /// Give every unlocked swatch a new random color.
    ///
    /// Locked swatches keep their color, sliders and reference untouched. Returns the
    /// indices that changed.
    pub fn randomize_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for slot in self.slots.iter_mut().filter(|slot| !slot.swatch.locked) {
            let previous = slot.swatch.color;
            let mut color = Color::random(&mut self.rng);
            // Re-draw the 1-in-16.7M repeat so an unlocked swatch always changes
            while color == previous {
                color = Color::random(&mut self.rng);
            }
            slot.capture(color);
            changed.push(slot.swatch.index);
        }
        log::debug!(
            "🎲 Randomized {} of {} swatches",
            changed.len(),
            self.slots.len()
        );
        changed
    }

    /// Show `color` at `index` regardless of its lock, re-deriving its sliders and
    /// making it the new reference color.
    ///
    /// Out-of-range indices are a programming error: they assert in debug builds and
    /// are a no-op otherwise. Returns whether the swatch was updated.
    pub fn set_swatch_color(&mut self, index: usize, color: Color) -> bool {
        let Some(slot) = self.slot_mut(index) else {
            return false;
        };
        slot.capture(color);
        log::debug!("Swatch {} set to {}", index, color);
        true
    }

    /// Move one slider of the swatch at `index` and recompute its color.
    ///
    /// The new color is built from the swatch's reference color, not from its
    /// current color, and the other two slider positions are left as they were.
    /// Successive drags therefore all compose against the same reference.
    pub fn apply_slider(&mut self, index: usize, axis: GradientAxis, value: f64) -> Option<Color> {
        let slot = self.slot_mut(index)?;
        slot.sliders = slot.sliders.with(axis, value);
        let color = color_from_positions(slot.reference, slot.sliders);
        slot.swatch.color = color;
        log::trace!(
            "Swatch {} {} -> {:.2}: {}",
            index,
            axis.name(),
            slot.sliders.get(axis),
            color
        );
        Some(color)
    }

    /// Flip the lock flag of the swatch at `index`. Returns the new flag.
    pub fn toggle_lock(&mut self, index: usize) -> Option<bool> {
        let slot = self.slot_mut(index)?;
        slot.swatch.locked = !slot.swatch.locked;
        log::debug!(
            "{} swatch {}",
            if slot.swatch.locked { "🔒 Locked" } else { "🔓 Unlocked" },
            index
        );
        Some(slot.swatch.locked)
    }

    /// Open or close the adjust panel of the swatch at `index`. Returns the new state.
    pub fn toggle_adjust(&mut self, index: usize) -> Option<bool> {
        let slot = self.slot_mut(index)?;
        slot.adjusting = !slot.adjusting;
        Some(slot.adjusting)
    }

    /// Validate `index`, asserting in debug builds.
    pub fn check_index(&self, index: usize) -> Result<usize, PaletteError> {
        let len = self.slots.len();
        debug_assert!(index < len, "swatch index {index} out of range (0..{len})");
        if index < len {
            Ok(index)
        } else {
            Err(PaletteError::IndexOutOfRange { index, len })
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut SwatchSlot> {
        match self.check_index(index) {
            Ok(index) => self.slots.get_mut(index),
            Err(e) => {
                log::warn!("Ignoring swatch update: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_color::Hsl;

    #[test]
    fn test_initialize_creates_unlocked_swatches() {
        let state = PaletteState::from_seed(5, 1);
        assert_eq!(state.len(), 5);
        for (i, swatch) in state.swatches().enumerate() {
            assert_eq!(swatch.index, i);
            assert!(!swatch.locked);
            assert_eq!(state.reference(i), Some(swatch.color));
            assert_eq!(state.sliders(i), Some(positions_for_color(swatch.color)));
            assert!(!state.is_adjusting(i));
        }
    }

    #[test]
    fn test_randomize_changes_every_unlocked_swatch() {
        let mut state = PaletteState::from_seed(5, 2);
        let before = state.colors();
        let changed = state.randomize_all();
        assert_eq!(changed, vec![0, 1, 2, 3, 4]);
        for (old, new) in before.iter().zip(state.colors()) {
            assert_ne!(*old, new);
        }
    }

    #[test]
    fn test_randomize_never_touches_locked_swatches() {
        // Every subset of a 5-swatch row
        for mask in 0u32..32 {
            let mut state = PaletteState::from_seed(5, u64::from(mask));
            for i in 0..5 {
                if mask & (1 << i) != 0 {
                    state.toggle_lock(i);
                }
            }
            for _ in 0..3 {
                let before: Vec<_> = (0..5)
                    .map(|i| (state.colors()[i], state.sliders(i), state.reference(i)))
                    .collect();
                state.randomize_all();
                for (i, prior) in before.iter().enumerate() {
                    let now = (state.colors()[i], state.sliders(i), state.reference(i));
                    if mask & (1 << i) != 0 {
                        assert_eq!(*prior, now, "locked swatch {i} changed (mask {mask:05b})");
                    } else {
                        assert_ne!(prior.0, now.0, "unlocked swatch {i} kept its color");
                    }
                }
            }
        }
    }

    #[test]
    fn test_randomize_refreshes_sliders() {
        let mut state = PaletteState::from_seed(2, 3);
        state.randomize_all();
        for i in 0..2 {
            let color = state.colors()[i];
            assert_eq!(state.sliders(i), Some(positions_for_color(color)));
            assert_eq!(state.reference(i), Some(color));
        }
    }

    #[test]
    fn test_toggle_lock_keeps_color() {
        let mut state = PaletteState::from_seed(3, 4);
        let color = state.colors()[1];
        assert_eq!(state.toggle_lock(1), Some(true));
        assert_eq!(state.colors()[1], color);
        assert_eq!(state.toggle_lock(1), Some(false));
        assert!(!state.swatch(1).unwrap().locked);
    }

    #[test]
    fn test_set_swatch_color_ignores_lock() {
        let mut state = PaletteState::from_seed(3, 5);
        state.toggle_lock(0);
        let red = Color::new(255, 0, 0);
        assert!(state.set_swatch_color(0, red));
        assert_eq!(state.colors()[0], red);
        assert_eq!(state.reference(0), Some(red));
        assert_eq!(state.sliders(0), Some(positions_for_color(red)));
        assert!(state.swatch(0).unwrap().locked);
    }

    #[test]
    fn test_slider_edits_compose_against_reference() {
        let mut state = PaletteState::from_seed(1, 6);
        let reference = Color::new(0x3d, 0x7f, 0xb5);
        state.set_swatch_color(0, reference);
        let resting = state.sliders(0).unwrap();

        state.apply_slider(0, GradientAxis::Hue, 20.0);
        let after_hue = state.apply_slider(0, GradientAxis::Hue, 90.0).unwrap();

        // Same as a single drag straight to 90 from the reference
        let direct = color_from_positions(reference, resting.with(GradientAxis::Hue, 90.0));
        assert_eq!(after_hue, direct);
        assert_eq!(state.reference(0), Some(reference));

        // Other positions were not recomputed from the intermediate color
        let sliders = state.sliders(0).unwrap();
        assert_eq!(sliders.saturation, resting.saturation);
        assert_eq!(sliders.brightness, resting.brightness);
        assert_eq!(sliders.hue, 90.0);
    }

    #[test]
    fn test_slider_edits_accumulate_across_axes() {
        let mut state = PaletteState::from_seed(1, 7);
        state.set_swatch_color(0, Color::new(200, 40, 40));
        state.apply_slider(0, GradientAxis::Brightness, 0.7);
        let color = state.apply_slider(0, GradientAxis::Saturation, 0.2).unwrap();

        let hsl = Hsl::from(color);
        assert!((hsl.l - 0.7).abs() < 0.01);
        assert!((hsl.s - 0.2).abs() < 0.02);
    }

    #[test]
    fn test_randomize_replaces_reference() {
        let mut state = PaletteState::from_seed(1, 8);
        state.apply_slider(0, GradientAxis::Hue, 180.0);
        state.randomize_all();
        let color = state.colors()[0];
        assert_eq!(state.reference(0), Some(color));
    }

    #[test]
    fn test_toggle_adjust() {
        let mut state = PaletteState::from_seed(2, 9);
        assert_eq!(state.toggle_adjust(1), Some(true));
        assert!(state.is_adjusting(1));
        assert!(!state.is_adjusting(0));
        assert_eq!(state.toggle_adjust(1), Some(false));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_asserts_in_debug() {
        let mut state = PaletteState::from_seed(3, 10);
        state.set_swatch_color(3, Color::BLACK);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_out_of_range_is_noop_in_release() {
        let mut state = PaletteState::from_seed(3, 10);
        let before = state.colors();
        assert!(!state.set_swatch_color(3, Color::BLACK));
        assert_eq!(state.toggle_lock(7), None);
        assert_eq!(state.apply_slider(9, GradientAxis::Hue, 10.0), None);
        assert_eq!(state.colors(), before);
    }
}
