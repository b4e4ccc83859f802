//! Tests for palette persistence and recall.

use swatch_color::Color;

use super::*;

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap()
}

fn rgb() -> Vec<Color> {
    vec![hex("#ff0000"), hex("#00ff00"), hex("#0000ff")]
}

#[test]
fn test_save_then_load_all() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    library.save("Sunset", &rgb()).unwrap();

    let loaded = library.load_all();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Sunset");
    assert_eq!(loaded[0].colors, rgb());
}

#[test]
fn test_persisted_layout() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    let saved = library.save("Sunset", &rgb()).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(library.storage().contents().unwrap()).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{
            "id": saved.id,
            "name": "Sunset",
            "colors": ["#ff0000", "#00ff00", "#0000ff"],
        }])
    );
}

#[test]
fn test_empty_name_rejected() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    assert!(matches!(library.save("", &rgb()), Err(PaletteError::EmptyName)));
    assert!(matches!(library.save("   ", &rgb()), Err(PaletteError::EmptyName)));
    assert!(library.is_empty());
    assert_eq!(library.storage().contents(), None);
}

#[test]
fn test_name_is_trimmed() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    let saved = library.save("  Ocean ", &rgb()).unwrap();
    assert_eq!(saved.name, "Ocean");
}

#[test]
fn test_rapid_saves_get_unique_ids() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    let ids: Vec<_> = (0..20)
        .map(|i| library.save(&format!("p{i}"), &rgb()).unwrap().id)
        .collect();
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_ids_continue_past_loaded_palettes() {
    let far_future = u64::MAX / 2;
    let json = format!(r##"[{{"id": {far_future}, "name": "old", "colors": ["#000000"]}}]"##);
    let mut library = PaletteLibrary::open(MemoryStorage::with_contents(json));
    let saved = library.save("new", &rgb()).unwrap();
    assert_eq!(saved.id, far_future + 1);
}

#[test]
fn test_insert_rejects_collision() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    library.insert(Palette::new(7, "a", rgb())).unwrap();
    assert!(matches!(
        library.insert(Palette::new(7, "b", rgb())),
        Err(PaletteError::IdCollision(7))
    ));
    assert_eq!(library.len(), 1);
}

#[test]
fn test_find_by_id() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    let a = library.save("a", &rgb()).unwrap();
    let b = library.save("b", &[hex("#123456")]).unwrap();
    assert_eq!(library.find_by_id(b.id), Some(&b));
    assert_eq!(library.find_by_id(a.id).map(|p| p.name.as_str()), Some("a"));
    assert_eq!(library.find_by_id(12345), None);
}

#[test]
fn test_missing_storage_is_empty() {
    let library = PaletteLibrary::open(MemoryStorage::new());
    assert!(library.load_all().is_empty());
    assert!(library.palettes().is_empty());
}

#[test]
fn test_malformed_json_is_empty() {
    for junk in ["{not json", "{\"id\": 1}", "42", ""] {
        let library = PaletteLibrary::open(MemoryStorage::with_contents(junk));
        assert!(library.is_empty(), "input {junk:?}");
    }
}

#[test]
fn test_corrupt_entries_dropped() {
    let json = r##"[
        {"id": 1, "name": "good", "colors": ["#ff0000"]},
        {"id": 2, "name": "bad color", "colors": ["#nothex"]},
        {"name": "no id", "colors": []},
        "just a string",
        {"id": 1, "name": "duplicate", "colors": []},
        {"id": 3, "name": "also good", "colors": ["#00ff00", "#0000ff"]}
    ]"##;
    let library = PaletteLibrary::open(MemoryStorage::with_contents(json));
    let names: Vec<_> = library.palettes().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["good", "also good"]);
}

#[test]
fn test_recall_sets_exact_colors() {
    let mut library = PaletteLibrary::open(MemoryStorage::new());
    let saved = library.save("p", &rgb()).unwrap();

    let mut state = PaletteState::from_seed(3, 11);
    assert_eq!(recall(&saved, &mut state), 3);
    assert_eq!(state.colors(), rgb());
    for (i, color) in rgb().into_iter().enumerate() {
        assert_eq!(state.reference(i), Some(color));
        assert_eq!(
            state.sliders(i),
            Some(crate::slider_sync::positions_for_color(color))
        );
    }
}

#[test]
fn test_recall_overrides_locks() {
    let mut state = PaletteState::from_seed(3, 12);
    state.toggle_lock(2);
    recall(&Palette::new(1, "p", rgb()), &mut state);
    assert_eq!(state.colors(), rgb());
    assert!(state.swatch(2).unwrap().locked);
}

#[test]
fn test_recall_length_mismatch() {
    let mut state = PaletteState::from_seed(5, 13);
    let before = state.colors();
    assert_eq!(recall(&Palette::new(1, "short", rgb()), &mut state), 3);
    assert_eq!(&state.colors()[..3], rgb().as_slice());
    assert_eq!(&state.colors()[3..], &before[3..]);

    let mut small = PaletteState::from_seed(2, 14);
    assert_eq!(recall(&Palette::new(2, "long", rgb()), &mut small), 2);
    assert_eq!(small.colors(), rgb()[..2].to_vec());
}

/// Storage whose writes always fail.
#[derive(Default)]
struct ReadOnlyStorage;

impl PaletteStorage for ReadOnlyStorage {
    fn read(&self) -> Result<Option<String>, PaletteError> {
        Ok(None)
    }

    fn write(&mut self, _json: &str) -> Result<(), PaletteError> {
        Err(PaletteError::storage("quota exceeded"))
    }
}

#[test]
fn test_write_failure_keeps_palette_in_memory() {
    let mut library = PaletteLibrary::open(ReadOnlyStorage);
    assert!(matches!(
        library.save("p", &rgb()),
        Err(PaletteError::Storage(_))
    ));
    assert_eq!(library.len(), 1);
}
