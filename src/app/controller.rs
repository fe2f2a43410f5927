//! Application Controller für zentrale Event-Verarbeitung.

use super::plan_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PlanScene;
use crate::sync::{Scene3D, SceneCommand, SyncBridge};

/// Orchestriert Host-Events und Use-Cases auf den AppState und hält die
/// Sync-Bridge zur 3D-Ansicht.
#[derive(Debug, Default)]
pub struct AppController {
    bridge: SyncBridge,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne 3D-Ansicht.
    pub fn new() -> Self {
        Self {
            bridge: SyncBridge::new(),
        }
    }

    /// Bindet eine 3D-Ansicht an und baut sie aus dem aktuellen Plan auf.
    pub fn attach_scene(&mut self, state: &AppState, scene: Box<dyn Scene3D>) {
        self.bridge.attach(scene);
        self.bridge
            .send(SceneCommand::RefreshAll(state.store.to_vec()));
    }

    /// Löst die 3D-Ansicht (z.B. beim Schließen des 3D-Tabs).
    pub fn detach_scene(&mut self) -> Option<Box<dyn Scene3D>> {
        self.bridge.detach()
    }

    /// Zugriff auf die Bridge (z.B. für Surface-Captures beim Export).
    pub fn bridge_mut(&mut self) -> &mut SyncBridge {
        &mut self.bridge
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let bridge = &mut self.bridge;

        match command {
            // === Platzierung ===
            AppCommand::SelectTool { kind } => handlers::interaction::select_tool(state, kind),
            AppCommand::UpdatePlacementPreview { plan_pos } => {
                handlers::interaction::update_preview(state, plan_pos)
            }
            AppCommand::PlaceElement { plan_pos } => {
                handlers::interaction::place(state, bridge, plan_pos)
            }

            // === Selektion & Manipulation ===
            AppCommand::ClearSelection => handlers::interaction::clear_selection(state),
            AppCommand::BeginPan { screen_pos } => {
                handlers::interaction::begin_pan(state, screen_pos)
            }
            AppCommand::UpdatePan { screen_pos } => {
                handlers::interaction::update_pan(state, screen_pos)
            }
            AppCommand::BeginDrag { id, plan_pos } => {
                handlers::interaction::begin_drag(state, id, plan_pos)
            }
            AppCommand::UpdateDrag { plan_pos } => {
                handlers::interaction::update_drag(state, bridge, plan_pos)
            }
            AppCommand::BeginResize {
                id,
                handle,
                plan_pos,
            } => handlers::interaction::begin_resize(state, id, handle, plan_pos),
            AppCommand::UpdateResize { plan_pos } => {
                handlers::interaction::update_resize(state, bridge, plan_pos)
            }
            AppCommand::BeginRotate { id } => handlers::interaction::begin_rotate(state, id),
            AppCommand::UpdateRotate { plan_pos } => {
                handlers::interaction::update_rotate(state, bridge, plan_pos)
            }
            AppCommand::EndInteraction => handlers::interaction::end(state),
            AppCommand::Cancel => handlers::interaction::cancel(state),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state, bridge),

            // === Ansicht ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::CenterView => handlers::view::center(state, bridge),
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),
            AppCommand::SetViewMode { mode } => handlers::view::set_view_mode(state, bridge, mode),
            AppCommand::ToggleMoveMode => handlers::view::toggle_move_mode(state),
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::SaveOptions => handlers::options::save(state)?,

            // === Datei-I/O ===
            AppCommand::ImportFromFile { path } => {
                handlers::file_io::import_file(state, bridge, path)
            }
            AppCommand::ImportFromJson { contents } => {
                handlers::file_io::import_json(state, bridge, &contents)
            }
            AppCommand::ExportToFile { path } => handlers::file_io::export(state, &path)?,

            // === Eigenschaften ===
            AppCommand::RenameElement { id, name } => handlers::editing::rename(state, id, name),
            AppCommand::ResizeElement { id, width, height } => {
                handlers::editing::resize(state, bridge, id, width, height)
            }
            AppCommand::SetElementDepth { id, depth } => {
                handlers::editing::set_depth(state, bridge, id, depth)
            }
            AppCommand::SetWindowDistances { id, top, bottom } => {
                handlers::editing::set_window_distances(state, bridge, id, top, bottom)
            }
            AppCommand::DismissNotice => handlers::options::dismiss_notice(state),
        }

        Ok(())
    }

    /// Baut die Plan-Szene aus dem aktuellen AppState.
    pub fn build_plan_scene(&self, state: &AppState) -> PlanScene {
        plan_scene::build(state)
    }
}
