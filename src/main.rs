//! Grundriss-Editor (headless).
//!
//! Lädt Optionen und optional einen Plan (`floor-plan-editor [plan.json]`),
//! zentriert die Ansicht und gibt eine Zusammenfassung der Szene aus.
//! Die 3D-Ansicht wird durch einen protokollierenden Kollaborateur ersetzt.

use floor_plan_editor::shared::LEGEND_MAX_LINES;
use floor_plan_editor::{
    AppController, AppIntent, AppState, EditorOptions, Element, ElementId, Scene3D,
};

/// Standard-Canvas-Größe ohne Host-Fenster.
const CANVAS_SIZE: [f32; 2] = [1280.0, 720.0];

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Grundriss-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut session = EditorSession::new();
        let mut events = vec![AppIntent::CanvasResized { size: CANVAS_SIZE }];
        if let Some(path) = std::env::args().nth(1) {
            events.push(AppIntent::ImportFileSelected { path });
        }
        events.push(AppIntent::CenterViewRequested);
        session.process_events(events);

        session.print_summary();
        Ok(())
    }
}

/// Eine Editor-Sitzung ohne GUI.
struct EditorSession {
    state: AppState,
    controller: AppController,
}

impl EditorSession {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        let mut controller = AppController::new();
        controller.attach_scene(&state, Box::new(LoggingScene));

        Self { state, controller }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn print_summary(&self) {
        if let Some(notice) = &self.state.ui.notice {
            log::warn!("Hinweis: {}", notice.message);
        }

        let scene = self.controller.build_plan_scene(&self.state);
        let bounds = scene.export_bounds();
        println!(
            "{} Elemente, Export-Ausschnitt {:.0} × {:.0}, Zoom {:.1}",
            scene.elements.len(),
            bounds.width(),
            bounds.height(),
            scene.viewport.zoom
        );
        for line in scene.legend_lines(LEGEND_MAX_LINES) {
            println!("  {line}");
        }
    }
}

/// 3D-Kollaborateur, der nur protokolliert.
struct LoggingScene;

impl Scene3D for LoggingScene {
    fn add(&mut self, element: &Element) {
        log::info!("3D: + {} ({})", element.display_name(), element.id);
    }

    fn remove(&mut self, id: &ElementId) {
        log::info!("3D: − {}", id);
    }

    fn update_position(&mut self, element: &Element) {
        log::debug!("3D: {} → ({}, {})", element.id, element.x, element.y);
    }

    fn update_size(&mut self, element: &Element) {
        log::debug!(
            "3D: {} Größe {} × {} × {}",
            element.id,
            element.width,
            element.height,
            element.depth
        );
    }

    fn update_rotation(&mut self, element: &Element) {
        log::debug!("3D: {} Rotation {}°", element.id, element.rotation_normalized());
    }

    fn refresh_all(&mut self, elements: &[Element]) {
        log::info!("3D: Szene neu aufgebaut ({} Elemente)", elements.len());
    }
}
