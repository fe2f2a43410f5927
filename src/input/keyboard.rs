//! Keyboard-Shortcuts der Canvas.
//!
//! Verarbeitet fensterweite Tasten und mappt sie auf `AppIntent`s.

use super::Key;
use crate::app::{AppIntent, AppState};

/// Verarbeitet eine gedrückte Taste und gibt AppIntents zurück.
///
/// Escape hat Vorrang vor allen anderen Bindungen.
pub(super) fn collect_keyboard_intents(key: Key, state: &AppState) -> Vec<AppIntent> {
    if key == Key::Escape {
        return vec![AppIntent::CancelRequested];
    }

    match key {
        Key::Delete if state.selection.selected.is_some() => {
            vec![AppIntent::DeleteSelectedRequested]
        }
        Key::ZoomIn => vec![AppIntent::ZoomInRequested],
        Key::ZoomOut => vec![AppIntent::ZoomOutRequested],
        Key::Home => vec![AppIntent::CenterViewRequested],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ElementId;

    #[test]
    fn escape_always_cancels() {
        let state = AppState::new();
        let intents = collect_keyboard_intents(Key::Escape, &state);
        assert!(matches!(intents[..], [AppIntent::CancelRequested]));
    }

    #[test]
    fn delete_requires_selection() {
        let mut state = AppState::new();
        assert!(collect_keyboard_intents(Key::Delete, &state).is_empty());

        state.selection.select(ElementId::new("a"));
        let intents = collect_keyboard_intents(Key::Delete, &state);
        assert!(matches!(intents[..], [AppIntent::DeleteSelectedRequested]));
    }

    #[test]
    fn zoom_and_home_keys() {
        let state = AppState::new();
        assert!(matches!(
            collect_keyboard_intents(Key::ZoomIn, &state)[..],
            [AppIntent::ZoomInRequested]
        ));
        assert!(matches!(
            collect_keyboard_intents(Key::Home, &state)[..],
            [AppIntent::CenterViewRequested]
        ));
        assert!(collect_keyboard_intents(Key::Other, &state).is_empty());
    }
}
