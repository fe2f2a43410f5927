//! Use-Cases für Löschen und Eigenschafts-Änderungen an Elementen.

use crate::app::{AppState, InteractionMode};
use crate::core::ElementId;
use crate::sync::SceneCommand;

/// Löscht das selektierte Element und kehrt nach Idle zurück.
pub fn delete_selected(state: &mut AppState) -> Option<SceneCommand> {
    let id = state.selection.selected.take()?;
    let removed = state.store.remove(&id)?;
    log::info!("Element gelöscht: {} ({})", removed.display_name(), id);

    state.interaction = InteractionMode::Idle;
    state.recompute_plan_center();
    Some(SceneCommand::Remove(id))
}

/// Benennt ein Element um. Der Name wird nicht an die 3D-Ansicht übertragen.
pub fn rename(state: &mut AppState, id: &ElementId, name: String) {
    if state.store.set_name(id, name).is_none() {
        log::warn!("Umbenennen: Element {} nicht gefunden", id);
    }
}

/// Setzt Breite und Höhe (mindestens 10).
pub fn set_size(
    state: &mut AppState,
    id: &ElementId,
    width: f32,
    height: f32,
) -> Option<SceneCommand> {
    let element = state.store.set_size(id, width, height)?;
    let cmd = SceneCommand::UpdateSize(element.clone());
    state.recompute_plan_center();
    Some(cmd)
}

/// Setzt die 3D-Tiefe.
pub fn set_depth(state: &mut AppState, id: &ElementId, depth: f32) -> Option<SceneCommand> {
    let element = state.store.set_depth(id, depth)?;
    Some(SceneCommand::UpdateSize(element.clone()))
}

/// Setzt die Abstände eines Fensters zur Ober- und Unterkante seiner Wand.
pub fn set_window_distances(
    state: &mut AppState,
    id: &ElementId,
    top: f32,
    bottom: f32,
) -> Option<SceneCommand> {
    match state.store.set_window_distances(id, top, bottom) {
        Some(element) => Some(SceneCommand::UpdateSize(element.clone())),
        None => {
            log::warn!("Fensterabstände nur für eingesetzte Fenster: {}", id);
            None
        }
    }
}
