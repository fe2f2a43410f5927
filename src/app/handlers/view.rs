//! Handler für Viewport, Canvas und Ansichtsmodus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewMode;
use crate::sync::SyncBridge;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::viewport::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::viewport::zoom_out(state);
}

/// Zentriert die Ansicht auf die Planmitte.
pub fn center(state: &mut AppState, bridge: &mut SyncBridge) {
    bridge.send_opt(use_cases::viewport::center_view(state));
}

/// Aktualisiert die Canvas-Größe im State.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize_canvas(state, size);
}

/// Wechselt zwischen 2D und 3D.
pub fn set_view_mode(state: &mut AppState, bridge: &mut SyncBridge, mode: ViewMode) {
    bridge.send_opt(use_cases::viewport::set_view_mode(state, mode));
}

pub fn toggle_move_mode(state: &mut AppState) {
    use_cases::viewport::toggle_move_mode(state);
}
