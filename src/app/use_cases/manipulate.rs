//! Use-Cases für Pan, Drag, Resize und Rotate auf der Canvas.
//!
//! Jede `begin_*`-Funktion verlässt den Placing-Modus und speichert die
//! Ankerdaten; jede `update_*`-Funktion rechnet aus dem Anker neu (keine
//! Akkumulation von Pointer-Deltas).

use crate::app::{AppState, InteractionMode};
use crate::core::geometry::{angle_towards, resize_rect, snap, snap_angle};
use crate::core::{ElementId, ResizeHandle};
use crate::sync::SceneCommand;
use glam::Vec2;

/// Startet das Verschieben der Canvas.
pub fn begin_pan(state: &mut AppState, screen_pos: Vec2) {
    state.interaction = InteractionMode::PanningCanvas {
        last_screen: screen_pos,
    };
}

/// Verschiebt den Viewport um die Zeigerbewegung seit dem letzten Move.
pub fn update_pan(state: &mut AppState, screen_pos: Vec2) {
    let InteractionMode::PanningCanvas { last_screen } = &mut state.interaction else {
        return;
    };
    let delta = screen_pos - *last_screen;
    *last_screen = screen_pos;
    state.view.viewport.pan(delta);
}

/// Selektiert ein Element und startet das Ziehen.
pub fn begin_drag(state: &mut AppState, id: ElementId, plan_pos: Vec2) {
    let Some(element) = state.store.get(&id) else {
        log::warn!("Drag auf unbekanntes Element {}", id);
        return;
    };
    let anchor_origin = element.position();
    state.selection.select(id.clone());
    state.interaction = InteractionMode::DraggingElement {
        id,
        anchor_pointer: plan_pos,
        anchor_origin,
    };
}

/// `x,y = snap(anchor_origin + (pointer − anchor_pointer))`
pub fn update_drag(state: &mut AppState, plan_pos: Vec2) -> Option<SceneCommand> {
    let InteractionMode::DraggingElement {
        id,
        anchor_pointer,
        anchor_origin,
    } = &state.interaction
    else {
        return None;
    };

    let raw = *anchor_origin + (plan_pos - *anchor_pointer);
    let target = match state.options.grid() {
        Some(grid) => Vec2::new(snap(raw.x, grid), snap(raw.y, grid)),
        None => raw,
    };

    let current = state.store.get(id)?.position();
    if current == target {
        return None;
    }
    let id = id.clone();
    let element = state.store.move_to(&id, target, None)?;
    Some(SceneCommand::UpdatePosition(element.clone()))
}

/// Selektiert ein Element und startet das Skalieren über `handle`.
pub fn begin_resize(state: &mut AppState, id: ElementId, handle: ResizeHandle, plan_pos: Vec2) {
    let Some(element) = state.store.get(&id) else {
        log::warn!("Resize auf unbekanntes Element {}", id);
        return;
    };
    let anchor_rect = element.rect();
    state.selection.select(id.clone());
    state.interaction = InteractionMode::Resizing {
        id,
        handle,
        anchor_pointer: plan_pos,
        anchor_rect,
    };
}

/// Wendet den Gesamt-Delta seit Beginn auf das Anker-Rechteck an.
pub fn update_resize(state: &mut AppState, plan_pos: Vec2) -> Option<SceneCommand> {
    let InteractionMode::Resizing {
        id,
        handle,
        anchor_pointer,
        anchor_rect,
    } = &state.interaction
    else {
        return None;
    };

    let rect = resize_rect(
        *anchor_rect,
        *handle,
        plan_pos - *anchor_pointer,
        state.options.grid(),
    );
    if state.store.get(id)?.rect() == rect {
        return None;
    }
    let id = id.clone();
    let element = state.store.set_rect(&id, rect)?;
    Some(SceneCommand::UpdateSize(element.clone()))
}

/// Selektiert ein Element und startet das Drehen.
pub fn begin_rotate(state: &mut AppState, id: ElementId) {
    if !state.store.contains(&id) {
        log::warn!("Rotation auf unbekanntes Element {}", id);
        return;
    }
    state.selection.select(id.clone());
    state.interaction = InteractionMode::Rotating { id };
}

/// Winkel vom Elementmittelpunkt zum Zeiger, in 15°-Schritten.
pub fn update_rotate(state: &mut AppState, plan_pos: Vec2) -> Option<SceneCommand> {
    let InteractionMode::Rotating { id } = &state.interaction else {
        return None;
    };
    let element = state.store.get(id)?;
    let angle = snap_angle(angle_towards(element.center(), plan_pos));
    if element.rotation == angle {
        return None;
    }
    let id = id.clone();
    let element = state.store.rotate(&id, angle)?;
    Some(SceneCommand::UpdateRotation(element.clone()))
}

/// Pointer-Up: beendet Pan/Drag/Resize/Rotate. Im Placing-Modus ohne Wirkung.
///
/// Nach Drag oder Resize wird die Planmitte einmalig neu berechnet.
pub fn end_interaction(state: &mut AppState) {
    if !state.interaction.is_manipulating() {
        return;
    }
    log::debug!("Interaktion beendet: {}", state.interaction.name());
    let moved_geometry = matches!(
        state.interaction,
        InteractionMode::DraggingElement { .. } | InteractionMode::Resizing { .. }
    );
    state.interaction = InteractionMode::Idle;
    if moved_geometry {
        state.recompute_plan_center();
    }
}

/// Escape: zurück nach Idle, Ghost, Werkzeug und Selektion werden verworfen.
pub fn cancel(state: &mut AppState) {
    state.interaction = InteractionMode::Idle;
    state.selection.clear();
}
