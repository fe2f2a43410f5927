//! Handler für Löschen und das Eigenschaften-Panel.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ElementId;
use crate::sync::SyncBridge;

/// Löscht das selektierte Element.
pub fn delete_selected(state: &mut AppState, bridge: &mut SyncBridge) {
    bridge.send_opt(use_cases::editing::delete_selected(state));
}

pub fn rename(state: &mut AppState, id: ElementId, name: String) {
    use_cases::editing::rename(state, &id, name);
}

pub fn resize(state: &mut AppState, bridge: &mut SyncBridge, id: ElementId, width: f32, height: f32) {
    bridge.send_opt(use_cases::editing::set_size(state, &id, width, height));
}

pub fn set_depth(state: &mut AppState, bridge: &mut SyncBridge, id: ElementId, depth: f32) {
    bridge.send_opt(use_cases::editing::set_depth(state, &id, depth));
}

pub fn set_window_distances(
    state: &mut AppState,
    bridge: &mut SyncBridge,
    id: ElementId,
    top: f32,
    bottom: f32,
) {
    bridge.send_opt(use_cases::editing::set_window_distances(state, &id, top, bottom));
}
