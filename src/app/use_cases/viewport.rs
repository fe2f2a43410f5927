//! Use-Case-Funktionen für Viewport, Canvas und Ansichtsmodus.

use crate::app::AppState;
use crate::shared::{EditorOptions, ViewMode};
use crate::sync::SceneCommand;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let opts = &state.options;
    state
        .view
        .viewport
        .zoom_by_step_clamped(opts.zoom_step, opts.zoom_min, opts.zoom_max);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let opts = &state.options;
    state
        .view
        .viewport
        .zoom_by_step_clamped(-opts.zoom_step, opts.zoom_min, opts.zoom_max);
}

/// Aktualisiert die gespeicherte Canvas-Größe.
pub fn resize_canvas(state: &mut AppState, size: [f32; 2]) {
    state.view.canvas_size = size;
}

/// Zentriert den Viewport auf die Planmitte.
///
/// Leerer Plan: keine Änderung. In der 3D-Ansicht wird die Szene neu aufgebaut.
pub fn center_view(state: &mut AppState) -> Option<SceneCommand> {
    if state.store.is_empty() {
        return None;
    }
    state.recompute_plan_center();
    let canvas = state.view.canvas_vec();
    let center = state.view.plan_center;
    state.view.viewport.center_on(center, canvas);
    log::debug!("Ansicht zentriert auf ({}, {})", center.x, center.y);

    (state.view.view_mode == ViewMode::ThreeD)
        .then(|| SceneCommand::RefreshAll(state.store.to_vec()))
}

/// Wechselt den Ansichtsmodus. Beim Wechsel nach 3D wird die Szene neu aufgebaut.
pub fn set_view_mode(state: &mut AppState, mode: ViewMode) -> Option<SceneCommand> {
    let previous = state.view.view_mode;
    state.view.view_mode = mode;
    log::info!("Ansicht: {} → {}", previous.as_str(), mode.as_str());

    (mode == ViewMode::ThreeD && previous != mode)
        .then(|| SceneCommand::RefreshAll(state.store.to_vec()))
}

/// Schaltet den Verschiebe-Modus um.
pub fn toggle_move_mode(state: &mut AppState) {
    state.view.move_mode = !state.view.move_mode;
}

/// Übernimmt neue Optionen; der aktuelle Zoom wird in die neuen Grenzen geklemmt.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let vp = &mut state.view.viewport;
    vp.zoom = vp.zoom.clamp(options.zoom_min, options.zoom_max);
    state.options = options;
}
