#![no_main]

use floor_plan_editor::{parse_elements, AppState, ElementStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Parser darf nie paniken
    let Ok(elements) = parse_elements(json) else {
        return;
    };

    // Import ist alles-oder-nichts; angenommene Elemente erfüllen die Mindestgröße
    let mut store = ElementStore::new();
    if store.replace_all(elements).is_ok() {
        assert!(store.iter().all(|el| el.width >= 10.0 && el.height >= 10.0));
        let _ = store.bounds();
    } else {
        assert!(store.is_empty());
    }

    let mut state = AppState::new();
    state.store = store;
    let _ = floor_plan_editor::export_json(&state);
});
