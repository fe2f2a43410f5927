//! Use-Case-Funktionen für Import und Export des Elementformats.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::NoticeKind;
use crate::app::{AppState, InteractionMode};
use crate::core::Element;
use crate::sync::SceneCommand;
use anyhow::Context;

/// Parst eine JSON-Elementliste (camelCase-Felder, `type` als Typ-Tag).
pub fn parse_elements(json: &str) -> anyhow::Result<Vec<Element>> {
    serde_json::from_str(json).context("Ungültiges Elementformat (JSON-Array erwartet)")
}

/// Serialisiert die Elementliste als formatiertes JSON.
pub fn export_json(state: &AppState) -> anyhow::Result<String> {
    let elements = state.store.to_vec();
    serde_json::to_string_pretty(&elements).context("Elemente konnten nicht serialisiert werden")
}

/// Importiert eine JSON-Elementliste alles-oder-nichts.
///
/// Erfolg: Store ersetzt, Ansicht zentriert, ein Bulk-Refresh für 3D.
/// Fehler: Store unverändert, Hinweis gesetzt. Der offene Importpfad wird
/// in beiden Fällen zurückgesetzt.
pub fn import_json(state: &mut AppState, contents: &str) -> Option<SceneCommand> {
    let result = parse_elements(contents).and_then(|elements| {
        let count = elements.len();
        state.store.replace_all(elements)?;
        Ok(count)
    });
    state.ui.pending_import_path = None;

    match result {
        Ok(count) => {
            log::info!("Plan importiert: {} Elemente", count);
            state.selection.clear();
            state.interaction = InteractionMode::Idle;
            state.ui.notice = None;
            state.recompute_plan_center();
            let canvas = state.view.canvas_vec();
            let center = state.view.plan_center;
            state.view.viewport.center_on(center, canvas);
            Some(SceneCommand::RefreshAll(state.store.to_vec()))
        }
        Err(e) => {
            state.ui.notify(
                NoticeKind::ImportFailed,
                format!("Fehler beim Importieren der Datei: {e:#}"),
            );
            None
        }
    }
}

/// Liest eine Datei und importiert ihren Inhalt.
///
/// Lesefehler werden wie Parse-Fehler als Hinweis gemeldet.
pub fn import_from_file(state: &mut AppState, path: String) -> Option<SceneCommand> {
    state.ui.pending_import_path = Some(path.clone());
    match std::fs::read_to_string(&path) {
        Ok(contents) => import_json(state, &contents),
        Err(e) => {
            state.ui.pending_import_path = None;
            state.ui.notify(
                NoticeKind::ImportFailed,
                format!("Datei {path} konnte nicht gelesen werden: {e}"),
            );
            None
        }
    }
}

/// Schreibt die Elementliste als JSON in eine Datei.
pub fn export_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let json = export_json(state)?;
    std::fs::write(path, json).with_context(|| format!("Export nach {path} fehlgeschlagen"))?;
    log::info!("Plan exportiert nach: {} ({} Elemente)", path, state.store.len());
    Ok(())
}
