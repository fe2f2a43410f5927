use floor_plan_editor::app::NoticeKind;
use floor_plan_editor::{
    AppCommand, AppController, AppIntent, AppState, ElementId, ElementKind, InteractionMode,
    RecordingScene, ResizeHandle, SceneCommand, ViewMode,
};
use glam::Vec2;

/// Controller mit aufzeichnender 3D-Ansicht; der initiale Refresh ist bereits entnommen.
fn setup() -> (AppController, AppState, RecordingScene) {
    let mut controller = AppController::new();
    let state = AppState::new();
    let scene = RecordingScene::new();
    controller.attach_scene(&state, Box::new(scene.clone()));
    assert!(matches!(scene.take()[..], [SceneCommand::RefreshAll(_)]));
    (controller, state, scene)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn place(
    controller: &mut AppController,
    state: &mut AppState,
    kind: ElementKind,
    plan_pos: Vec2,
) {
    send(controller, state, AppIntent::SelectToolRequested { kind });
    send(controller, state, AppIntent::PlaceElementRequested { plan_pos });
}

fn last_placed_id(state: &AppState) -> ElementId {
    state
        .store
        .iter()
        .last()
        .map(|el| el.id.clone())
        .expect("Es sollte ein Element platziert sein")
}

#[test]
fn test_place_wall_door_and_window_sends_one_add_each() {
    let (mut controller, mut state, scene) = setup();

    place(&mut controller, &mut state, ElementKind::Wall, Vec2::new(3.0, 4.0));
    let wall_id = last_placed_id(&state);
    place(&mut controller, &mut state, ElementKind::Door, Vec2::new(201.0, -2.0));
    place(&mut controller, &mut state, ElementKind::Window, Vec2::new(40.0, 0.0));

    assert_eq!(state.element_count(), 3);
    let commands = scene.take();
    assert_eq!(commands.len(), 3);
    assert!(commands.iter().all(|c| c.name() == "add"));

    let wall = state.store.get(&wall_id).expect("Wand fehlt");
    assert_eq!(wall.position(), Vec2::ZERO);

    let window = state.store.iter().last().expect("Fenster fehlt");
    assert_eq!(window.kind, ElementKind::Window);
    assert_eq!(window.parent_wall_id.as_ref(), Some(&wall_id));
    assert_eq!(window.window_top_distance, Some(20.0));
    assert_eq!(window.window_bottom_distance, Some(20.0));

    // Nach erfolgreicher Platzierung: selektiert, Werkzeug beendet
    assert!(state.selection.is_selected(&window.id));
    assert!(matches!(state.interaction, InteractionMode::Idle));
}

#[test]
fn test_door_without_wall_is_rejected_and_tool_stays_active() {
    let (mut controller, mut state, scene) = setup();

    place(&mut controller, &mut state, ElementKind::Door, Vec2::new(400.0, 400.0));

    assert!(state.store.is_empty());
    assert!(scene.commands().is_empty());
    let notice = state.ui.notice.as_ref().expect("Hinweis erwartet");
    assert_eq!(notice.kind, NoticeKind::PlacementRejected);
    assert_eq!(notice.message, "Türen müssen an einer Wand platziert werden");

    match &state.interaction {
        InteractionMode::Placing {
            tool: ElementKind::Door,
            ghost: Some(ghost),
        } => assert!(!ghost.valid),
        other => panic!("Unerwarteter Modus: {other:?}"),
    }

    send(&mut controller, &mut state, AppIntent::NoticeDismissed);
    assert!(state.ui.notice.is_none());
}

#[test]
fn test_preview_ghost_tracks_snapped_pointer() {
    let (mut controller, mut state, _scene) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::SelectToolRequested {
            kind: ElementKind::Table,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PlacementPreviewRequested {
            plan_pos: Vec2::new(29.0, 51.0),
        },
    );

    let ghost = state.interaction.ghost().expect("Ghost erwartet");
    assert!(ghost.valid);
    assert_eq!(ghost.element.position(), Vec2::new(20.0, 60.0));
    assert_eq!(ghost.element.id.as_str(), "ghost");
}

#[test]
fn test_drag_resize_rotate_delete_flow() {
    let (mut controller, mut state, scene) = setup();
    place(&mut controller, &mut state, ElementKind::Table, Vec2::new(100.0, 100.0));
    let id = last_placed_id(&state);
    scene.take();

    // Ziehen: Anker + Delta, am Raster eingerastet
    send(
        &mut controller,
        &mut state,
        AppIntent::ElementPressed {
            id: id.clone(),
            plan_pos: Vec2::new(110.0, 110.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ElementDragUpdated {
            plan_pos: Vec2::new(137.0, 151.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(
        state.store.get(&id).map(|el| el.position()),
        Some(Vec2::new(120.0, 140.0))
    );
    assert!(matches!(state.interaction, InteractionMode::Idle));

    // Skalieren über die untere rechte Ecke
    send(
        &mut controller,
        &mut state,
        AppIntent::ResizeHandlePressed {
            id: id.clone(),
            handle: ResizeHandle::BottomRight,
            plan_pos: Vec2::new(220.0, 240.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ResizeUpdated {
            plan_pos: Vec2::new(253.0, 240.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    let table = state.store.get(&id).expect("Tisch fehlt");
    assert_eq!((table.width, table.height), (140.0, 100.0));

    // Drehen: Zeiger direkt unterhalb der Mitte → 90°
    let center = table.center();
    send(
        &mut controller,
        &mut state,
        AppIntent::RotateHandlePressed { id: id.clone() },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::RotateUpdated {
            plan_pos: center + Vec2::new(0.0, 50.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.store.get(&id).map(|el| el.rotation), Some(90.0));

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    assert!(state.store.is_empty());
    assert!(state.selection.selected.is_none());

    let names: Vec<&str> = scene.commands().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["update_position", "update_size", "update_rotation", "remove"]
    );
}

#[test]
fn test_escape_cancels_placing_and_keeps_store() {
    let (mut controller, mut state, _scene) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::SelectToolRequested {
            kind: ElementKind::Plant,
        },
    );
    send(&mut controller, &mut state, AppIntent::CancelRequested);

    assert!(matches!(state.interaction, InteractionMode::Idle));
    assert!(state.interaction.ghost().is_none());
    assert!(state.store.is_empty());
}

#[test]
fn test_canvas_press_clears_selection_and_pans() {
    let (mut controller, mut state, _scene) = setup();
    place(&mut controller, &mut state, ElementKind::Chair, Vec2::ZERO);
    assert!(state.selection.selected.is_some());

    send(
        &mut controller,
        &mut state,
        AppIntent::CanvasPressed {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PanUpdated {
            screen_pos: Vec2::new(30.0, 5.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert!(state.selection.selected.is_none());
    assert_eq!(state.view.viewport.offset, Vec2::new(20.0, -5.0));
}

#[test]
fn test_property_edits_sync_size_but_not_name() {
    let (mut controller, mut state, scene) = setup();
    place(&mut controller, &mut state, ElementKind::Shelf, Vec2::ZERO);
    let id = last_placed_id(&state);
    scene.take();

    send(
        &mut controller,
        &mut state,
        AppIntent::RenameElementRequested {
            id: id.clone(),
            name: "Obstregal".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ResizeElementRequested {
            id: id.clone(),
            width: 5.0,
            height: 80.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SetElementDepthRequested {
            id: id.clone(),
            depth: 90.0,
        },
    );

    let shelf = state.store.get(&id).expect("Regal fehlt");
    assert_eq!(shelf.name.as_deref(), Some("Obstregal"));
    assert_eq!((shelf.width, shelf.height, shelf.depth), (10.0, 80.0, 90.0));

    let names: Vec<&str> = scene.commands().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["update_size", "update_size"]);
}

#[test]
fn test_switch_to_3d_refreshes_scene_once() {
    let (mut controller, mut state, scene) = setup();
    place(&mut controller, &mut state, ElementKind::Bed, Vec2::ZERO);
    scene.take();

    for _ in 0..2 {
        send(
            &mut controller,
            &mut state,
            AppIntent::ViewModeChanged {
                mode: ViewMode::ThreeD,
            },
        );
    }

    assert!(matches!(
        scene.commands()[..],
        [SceneCommand::RefreshAll(ref els)] if els.len() == 1
    ));
}

#[test]
fn test_commands_are_logged_in_order() {
    let (mut controller, mut state, _scene) = setup();
    send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    send(&mut controller, &mut state, AppIntent::MoveModeToggled);

    match state.command_log.entries() {
        [AppCommand::ZoomIn, AppCommand::ToggleMoveMode] => {}
        other => panic!("Unerwartetes Command-Log: {other:?}"),
    }
}

#[test]
fn test_edits_without_scene_do_not_fail() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    place(&mut controller, &mut state, ElementKind::Counter, Vec2::ZERO);
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert!(state.store.is_empty());
}

#[test]
fn test_detached_scene_receives_nothing_and_capture_needs_scene() {
    let (mut controller, mut state, scene) = setup();

    assert!(controller.bridge_mut().capture().is_none());
    assert_eq!(scene.render_count(), 1);

    assert!(controller.detach_scene().is_some());
    place(&mut controller, &mut state, ElementKind::Fridge, Vec2::ZERO);

    assert_eq!(state.element_count(), 1);
    assert!(scene.commands().is_empty());
    assert!(controller.bridge_mut().capture().is_none());
    assert_eq!(scene.render_count(), 1);
}
