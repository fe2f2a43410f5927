//! Handler für Laufzeit-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt geänderte Optionen.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    use_cases::viewport::apply_options(state, options);
}

/// Speichert die Optionen neben der Binary.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&EditorOptions::config_path())
}

/// Schließt den offenen Hinweis.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}
