//! Use-Cases für das Platzieren neuer Elemente.

use crate::app::state::NoticeKind;
use crate::app::{AppState, InteractionMode};
use crate::core::geometry::{
    default_window_distance, door_has_adjacent_wall, find_parent_wall, snap_point,
};
use crate::core::{ElementId, ElementKind, ElementStore, GhostElement, PlanRect};
use crate::sync::SceneCommand;
use glam::Vec2;

/// Grund für eine abgelehnte Platzierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementRejection {
    #[error("Türen müssen an einer Wand platziert werden")]
    DoorNotAdjacent,
    #[error("Fenster müssen auf einer Wand platziert werden")]
    WindowNotOnWall,
}

/// Wand, in die ein neues Fenster eingesetzt wird.
#[derive(Debug, Clone, PartialEq)]
pub struct WallMount {
    pub wall_id: ElementId,
    /// Standard-Abstand oben und unten
    pub distance: f32,
}

/// Prüft die Wand-Regeln für ein Rechteck des Typs `kind`.
///
/// `Ok(Some(_))` nur für Fenster (Elternwand), `Ok(None)` für alles andere.
pub fn placement_check(
    store: &ElementStore,
    kind: ElementKind,
    rect: PlanRect,
) -> Result<Option<WallMount>, PlacementRejection> {
    match kind {
        ElementKind::Door => {
            if door_has_adjacent_wall(rect, store.iter()) {
                Ok(None)
            } else {
                Err(PlacementRejection::DoorNotAdjacent)
            }
        }
        ElementKind::Window => find_parent_wall(rect, store.iter())
            .map(|wall| {
                Some(WallMount {
                    wall_id: wall.id.clone(),
                    distance: default_window_distance(wall.depth),
                })
            })
            .ok_or(PlacementRejection::WindowNotOnWall),
        _ => Ok(None),
    }
}

/// Zielposition für Ghost und Platzierung (am Raster eingerastet).
fn placement_position(state: &AppState, plan_pos: Vec2) -> Vec2 {
    state
        .grid()
        .map_or(plan_pos, |grid| snap_point(plan_pos, grid))
}

/// Aktiviert ein Platzierungs-Werkzeug. Selektion und Ghost werden verworfen.
pub fn select_tool(state: &mut AppState, kind: ElementKind) {
    state.selection.clear();
    state.interaction = InteractionMode::Placing {
        tool: kind,
        ghost: None,
    };
    log::debug!("Werkzeug gewählt: {}", kind.label());
}

/// Berechnet den Ghost an der eingerasteten Zeigerposition neu.
pub fn update_preview(state: &mut AppState, plan_pos: Vec2) {
    let Some(tool) = state.interaction.active_tool() else {
        return;
    };
    let position = placement_position(state, plan_pos);
    let mut ghost = GhostElement::new(tool, position, true);
    ghost.valid = placement_check(&state.store, tool, ghost.element.rect()).is_ok();

    state.interaction = InteractionMode::Placing {
        tool,
        ghost: Some(ghost),
    };
}

/// Platziert ein Element des aktiven Werkzeugs.
///
/// Bei Ablehnung bleiben Werkzeug und Ghost aktiv und ein Hinweis wird gesetzt.
pub fn place_element(state: &mut AppState, plan_pos: Vec2) -> Option<SceneCommand> {
    let tool = state.interaction.active_tool()?;
    let position = placement_position(state, plan_pos);
    let candidate = GhostElement::new(tool, position, true);

    let mount = match placement_check(&state.store, tool, candidate.element.rect()) {
        Ok(mount) => mount,
        Err(rejection) => {
            state
                .ui
                .notify(NoticeKind::PlacementRejected, rejection.to_string());
            state.interaction = InteractionMode::Placing {
                tool,
                ghost: Some(GhostElement {
                    valid: false,
                    ..candidate
                }),
            };
            return None;
        }
    };

    let mut element = state.store.create(tool, position);
    if let Some(mount) = mount {
        if let Some(mounted) = state
            .store
            .mount_window(&element.id, &mount.wall_id, mount.distance)
        {
            element = mounted.clone();
        }
    }

    log::info!(
        "Element platziert: {} ({}) bei ({}, {})",
        element.display_name(),
        element.id,
        element.x,
        element.y
    );

    state.selection.select(element.id.clone());
    state.interaction = InteractionMode::Idle;
    state.recompute_plan_center();
    Some(SceneCommand::Add(element))
}
