use floor_plan_editor::app::NoticeKind;
use floor_plan_editor::{
    export_json, parse_elements, AppController, AppIntent, AppState, ElementKind, RecordingScene,
    SceneCommand,
};
use glam::Vec2;
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("floor_plan_editor_{}_{name}", std::process::id()))
}

const SHOP_PLAN: &str = r#"[
    {"id":"w1","type":"wall","x":0,"y":0,"width":400,"height":10,"depth":100,"rotation":0,"name":"Nordwand"},
    {"id":"s1","type":"shelf","x":40,"y":60,"width":120,"height":40,"depth":60,"rotation":90},
    {"id":"x1","type":"hologram","x":300,"y":200,"width":50,"height":50}
]"#;

#[test]
fn test_export_then_import_file_restores_plan() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (kind, pos) in [
        (ElementKind::Wall, Vec2::ZERO),
        (ElementKind::Gondola, Vec2::new(0.0, 100.0)),
        (ElementKind::Cashier, Vec2::new(300.0, 200.0)),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::SelectToolRequested { kind })
            .expect("Werkzeugwahl fehlgeschlagen");
        controller
            .handle_intent(&mut state, AppIntent::PlaceElementRequested { plan_pos: pos })
            .expect("Platzierung fehlgeschlagen");
    }

    let path = temp_file("roundtrip.json");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                path: path.display().to_string(),
            },
        )
        .expect("Export sollte funktionieren");

    let mut restored = AppState::new();
    let scene = RecordingScene::new();
    let mut other = AppController::new();
    other.attach_scene(&restored, Box::new(scene.clone()));
    scene.take();
    other
        .handle_intent(
            &mut restored,
            AppIntent::ImportFileSelected {
                path: path.display().to_string(),
            },
        )
        .expect("Import sollte funktionieren");
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored.store.to_vec(), state.store.to_vec());
    assert!(restored.ui.notice.is_none());
    assert!(restored.ui.pending_import_path.is_none());
    assert!(matches!(
        scene.commands()[..],
        [SceneCommand::RefreshAll(ref els)] if els.len() == 3
    ));
}

#[test]
fn test_import_contents_keeps_order_and_unknown_types() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.selection.select("stale".into());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportContentsReceived {
                contents: SHOP_PLAN.to_string(),
            },
        )
        .expect("Import sollte funktionieren");

    let ids: Vec<&str> = state.store.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "s1", "x1"]);
    assert!(state.selection.selected.is_none());

    let unknown = state.store.iter().last().expect("Element fehlt");
    assert_eq!(unknown.kind, ElementKind::Unknown);
    assert_eq!(unknown.depth, 0.0);
    assert_eq!(unknown.display_name(), "Element");
    assert_eq!(unknown.unknown_type.as_deref(), Some("hologram"));
}

#[test]
fn test_export_keeps_unrecognized_type_tag() {
    let mut state = AppState::new();
    let json = r#"[{"id":"q1","type":"aquarium","x":10,"y":10,"width":80,"height":40,"depth":50}]"#;
    AppController::new()
        .handle_intent(
            &mut state,
            AppIntent::ImportContentsReceived {
                contents: json.to_string(),
            },
        )
        .expect("Import sollte funktionieren");

    let exported = export_json(&state).expect("Export fehlgeschlagen");

    assert!(exported.contains("\"type\": \"aquarium\""));
    assert!(!exported.contains("\"unknown\""));
    assert_eq!(
        parse_elements(&exported).expect("Export nicht lesbar"),
        state.store.to_vec()
    );
}

#[test]
fn test_malformed_import_keeps_plan_and_reports_notice() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportContentsReceived {
                contents: SHOP_PLAN.to_string(),
            },
        )
        .expect("Import sollte funktionieren");
    let before = state.store.to_vec();

    for broken in ["not json", "{\"id\":\"a\"}", "[{\"id\":\"a\",\"type\":\"wall\"}]"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ImportContentsReceived {
                    contents: broken.to_string(),
                },
            )
            .expect("Fehlerhafter Import darf keinen Fehler liefern");

        assert_eq!(state.store.to_vec(), before);
        let notice = state.ui.notice.as_ref().expect("Hinweis erwartet");
        assert_eq!(notice.kind, NoticeKind::ImportFailed);
        assert!(notice.message.starts_with("Fehler beim Importieren der Datei"));
    }
}

#[test]
fn test_export_to_missing_directory_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = temp_file("no_such_dir").join("plan.json");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ExportRequested {
            path: path.display().to_string(),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_export_json_uses_camel_case_and_type_tag() {
    let mut state = AppState::new();
    let wall = state.store.create(ElementKind::Wall, Vec2::ZERO);
    let window = state.store.create(ElementKind::Window, Vec2::new(40.0, 0.0));
    state.store.mount_window(&window.id, &wall.id, 20.0);

    let json = export_json(&state).expect("Export fehlgeschlagen");

    assert!(json.contains("\"type\": \"window\""));
    assert!(json.contains("\"windowTopDistance\": 20.0"));
    assert!(!json.contains("parent_wall_id"));
    assert_eq!(
        parse_elements(&json).expect("Export nicht lesbar"),
        state.store.to_vec()
    );
}
