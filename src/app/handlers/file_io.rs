//! Handler für Import und Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::sync::SyncBridge;

/// Liest und importiert eine Plandatei.
pub fn import_file(state: &mut AppState, bridge: &mut SyncBridge, path: String) {
    bridge.send_opt(use_cases::file_io::import_from_file(state, path));
}

/// Importiert bereits gelesenen JSON-Inhalt.
pub fn import_json(state: &mut AppState, bridge: &mut SyncBridge, contents: &str) {
    bridge.send_opt(use_cases::file_io::import_json(state, contents));
}

/// Exportiert den Plan und propagiert Fehler an den Aufrufer.
pub fn export(state: &AppState, path: &str) -> anyhow::Result<()> {
    use_cases::file_io::export_to_file(state, path)
}
