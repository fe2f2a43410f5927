//! Handler für Platzierung, Pan, Drag, Resize und Rotate.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ElementId, ElementKind, ResizeHandle};
use crate::sync::SyncBridge;
use glam::Vec2;

/// Aktiviert ein Platzierungs-Werkzeug.
pub fn select_tool(state: &mut AppState, kind: ElementKind) {
    use_cases::placement::select_tool(state, kind);
}

/// Aktualisiert die Platzierungs-Vorschau.
pub fn update_preview(state: &mut AppState, plan_pos: Vec2) {
    use_cases::placement::update_preview(state, plan_pos);
}

/// Platziert ein Element und meldet es an die 3D-Ansicht.
pub fn place(state: &mut AppState, bridge: &mut SyncBridge, plan_pos: Vec2) {
    bridge.send_opt(use_cases::placement::place_element(state, plan_pos));
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    use_cases::manipulate::begin_pan(state, screen_pos);
}

pub fn update_pan(state: &mut AppState, screen_pos: Vec2) {
    use_cases::manipulate::update_pan(state, screen_pos);
}

pub fn begin_drag(state: &mut AppState, id: ElementId, plan_pos: Vec2) {
    use_cases::manipulate::begin_drag(state, id, plan_pos);
}

pub fn update_drag(state: &mut AppState, bridge: &mut SyncBridge, plan_pos: Vec2) {
    bridge.send_opt(use_cases::manipulate::update_drag(state, plan_pos));
}

pub fn begin_resize(state: &mut AppState, id: ElementId, handle: ResizeHandle, plan_pos: Vec2) {
    use_cases::manipulate::begin_resize(state, id, handle, plan_pos);
}

pub fn update_resize(state: &mut AppState, bridge: &mut SyncBridge, plan_pos: Vec2) {
    bridge.send_opt(use_cases::manipulate::update_resize(state, plan_pos));
}

pub fn begin_rotate(state: &mut AppState, id: ElementId) {
    use_cases::manipulate::begin_rotate(state, id);
}

pub fn update_rotate(state: &mut AppState, bridge: &mut SyncBridge, plan_pos: Vec2) {
    bridge.send_opt(use_cases::manipulate::update_rotate(state, plan_pos));
}

/// Pointer-Up.
pub fn end(state: &mut AppState) {
    use_cases::manipulate::end_interaction(state);
}

/// Escape.
pub fn cancel(state: &mut AppState) {
    use_cases::manipulate::cancel(state);
}
