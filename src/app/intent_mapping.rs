//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectToolRequested { kind } => vec![AppCommand::SelectTool { kind }],
        AppIntent::PlacementPreviewRequested { plan_pos } => {
            if state.interaction.active_tool().is_some() {
                vec![AppCommand::UpdatePlacementPreview { plan_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PlaceElementRequested { plan_pos } => {
            if state.interaction.active_tool().is_some() {
                vec![AppCommand::PlaceElement { plan_pos }]
            } else {
                vec![]
            }
        }

        AppIntent::CanvasPressed { screen_pos } => {
            // Im Verschiebe-Modus bleibt die Selektion erhalten
            if state.view.move_mode {
                vec![AppCommand::BeginPan { screen_pos }]
            } else {
                vec![AppCommand::ClearSelection, AppCommand::BeginPan { screen_pos }]
            }
        }
        AppIntent::PanUpdated { screen_pos } => vec![AppCommand::UpdatePan { screen_pos }],
        AppIntent::ElementPressed { id, plan_pos } => vec![AppCommand::BeginDrag { id, plan_pos }],
        AppIntent::ElementDragUpdated { plan_pos } => vec![AppCommand::UpdateDrag { plan_pos }],
        AppIntent::ResizeHandlePressed {
            id,
            handle,
            plan_pos,
        } => vec![AppCommand::BeginResize {
            id,
            handle,
            plan_pos,
        }],
        AppIntent::ResizeUpdated { plan_pos } => vec![AppCommand::UpdateResize { plan_pos }],
        AppIntent::RotateHandlePressed { id } => vec![AppCommand::BeginRotate { id }],
        AppIntent::RotateUpdated { plan_pos } => vec![AppCommand::UpdateRotate { plan_pos }],
        AppIntent::PointerReleased => {
            if state.interaction.is_manipulating() {
                vec![AppCommand::EndInteraction]
            } else {
                vec![]
            }
        }

        AppIntent::CancelRequested => vec![AppCommand::Cancel],
        AppIntent::DeleteSelectedRequested => {
            if state.selection.selected.is_some() {
                vec![AppCommand::DeleteSelected]
            } else {
                vec![]
            }
        }

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::CenterViewRequested => vec![AppCommand::CenterView],
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::ViewModeChanged { mode } => {
            if state.view.view_mode == mode {
                vec![]
            } else {
                vec![AppCommand::SetViewMode { mode }]
            }
        }
        AppIntent::MoveModeToggled => vec![AppCommand::ToggleMoveMode],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],

        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportFromFile { path }],
        AppIntent::ImportContentsReceived { contents } => {
            vec![AppCommand::ImportFromJson { contents }]
        }
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportToFile { path }],

        AppIntent::RenameElementRequested { id, name } => {
            vec![AppCommand::RenameElement { id, name }]
        }
        AppIntent::ResizeElementRequested { id, width, height } => {
            vec![AppCommand::ResizeElement { id, width, height }]
        }
        AppIntent::SetElementDepthRequested { id, depth } => {
            vec![AppCommand::SetElementDepth { id, depth }]
        }
        AppIntent::SetWindowDistancesRequested { id, top, bottom } => {
            vec![AppCommand::SetWindowDistances { id, top, bottom }]
        }
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
    }
}

#[cfg(test)]
mod tests;
