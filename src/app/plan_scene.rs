//! Builder für Plan-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::PlanScene;

/// Baut eine PlanScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PlanScene {
    PlanScene {
        elements: state.store.to_vec(),
        ghost: state.interaction.ghost().cloned(),
        selected: state.selection.selected.clone(),
        viewport: state.view.viewport,
        canvas_size: state.view.canvas_size,
        view_mode: state.view.view_mode,
        options: state.options.clone(),
        bounds: state.store.bounds(),
    }
}
