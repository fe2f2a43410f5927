use crate::app::CommandLog;
use crate::core::{Element, ElementStore};
use crate::shared::EditorOptions;

use super::{InteractionMode, SelectionState, UiState, ViewState};

/// Hauptzustand einer Editor-Sitzung
pub struct AppState {
    /// Alle platzierten Elemente (einzige Quelle der Wahrheit)
    pub store: ElementStore,
    /// View-State (Viewport, Canvas, Ansichtsmodus)
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Aktiver Interaktionsmodus (nie persistiert)
    pub interaction: InteractionMode,
    /// UI-State (Hinweise, offener Import)
    pub ui: UiState,
    /// Laufzeit-Optionen (Raster, Einheit, Zoom-Grenzen)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt eine neue, leere Sitzung
    pub fn new() -> Self {
        Self {
            store: ElementStore::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            interaction: InteractionMode::Idle,
            ui: UiState::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Elemente zurück (für Statusanzeige)
    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    /// Das aktuell selektierte Element, falls vorhanden.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection
            .selected
            .as_ref()
            .and_then(|id| self.store.get(id))
    }

    /// Aktives Raster laut Optionen.
    pub fn grid(&self) -> Option<f32> {
        self.options.grid()
    }

    /// Berechnet die Planmitte nach strukturellen Änderungen neu.
    pub fn recompute_plan_center(&mut self) {
        self.view.plan_center = self.store.bounds().center();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
