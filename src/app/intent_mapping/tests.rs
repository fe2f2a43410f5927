use crate::app::{AppCommand, AppIntent, AppState, InteractionMode};
use crate::core::{ElementId, ElementKind};
use crate::shared::ViewMode;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn canvas_pressed_clears_selection_then_pans() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPressed {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ClearSelection));
    assert!(matches!(commands[1], AppCommand::BeginPan { .. }));
}

#[test]
fn canvas_pressed_in_move_mode_keeps_selection() {
    let mut state = AppState::new();
    state.view.move_mode = true;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPressed {
            screen_pos: Vec2::ZERO,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginPan { .. }));
}

#[test]
fn placement_intents_are_dropped_without_active_tool() {
    let state = AppState::new();

    let preview = map_intent_to_commands(
        &state,
        AppIntent::PlacementPreviewRequested {
            plan_pos: Vec2::ZERO,
        },
    );
    let place = map_intent_to_commands(
        &state,
        AppIntent::PlaceElementRequested {
            plan_pos: Vec2::ZERO,
        },
    );

    assert!(preview.is_empty());
    assert!(place.is_empty());
}

#[test]
fn place_element_maps_when_placing() {
    let mut state = AppState::new();
    state.interaction = InteractionMode::Placing {
        tool: ElementKind::Table,
        ghost: None,
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceElementRequested {
            plan_pos: Vec2::new(40.0, 40.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::PlaceElement { .. }));
}

#[test]
fn delete_without_selection_maps_to_nothing() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested).is_empty());

    state.selection.select(ElementId::new("element-1"));
    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);
    assert!(matches!(commands[..], [AppCommand::DeleteSelected]));
}

#[test]
fn pointer_released_only_ends_manipulation() {
    let mut state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::PointerReleased).is_empty());

    state.interaction = InteractionMode::Rotating {
        id: ElementId::new("a"),
    };
    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);
    assert!(matches!(commands[..], [AppCommand::EndInteraction]));
}

#[test]
fn view_mode_change_to_same_mode_is_ignored() {
    let state = AppState::new();

    let same = map_intent_to_commands(
        &state,
        AppIntent::ViewModeChanged {
            mode: ViewMode::TwoD,
        },
    );
    let other = map_intent_to_commands(
        &state,
        AppIntent::ViewModeChanged {
            mode: ViewMode::ThreeD,
        },
    );

    assert!(same.is_empty());
    assert!(matches!(
        other[..],
        [AppCommand::SetViewMode {
            mode: ViewMode::ThreeD
        }]
    ));
}
