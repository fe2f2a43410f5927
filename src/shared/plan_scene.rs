//! Plan-Szene als expliziter Übergabevertrag zwischen App und Exportern.
//!
//! Lebt im shared-Modul, da `app` sie baut und Raster-/PDF-Exporter bzw.
//! Canvas-Hosts sie konsumieren.

use super::options::{EditorOptions, EXPORT_MARGIN};
use super::units::format_dimension;
use super::ViewMode;
use crate::core::{Element, ElementId, GhostElement, PlanBounds, Viewport};

/// Read-only Daten für einen Zeichen- oder Export-Durchlauf.
#[derive(Debug, Clone)]
pub struct PlanScene {
    /// Alle Elemente in Planreihenfolge
    pub elements: Vec<Element>,
    /// Platzierungs-Vorschau (nur im Placing-Modus)
    pub ghost: Option<GhostElement>,
    /// Aktuell selektiertes Element
    pub selected: Option<ElementId>,
    /// Viewport-Zustand
    pub viewport: Viewport,
    /// Canvas-Größe in Pixeln
    pub canvas_size: [f32; 2],
    pub view_mode: ViewMode,
    /// Laufzeit-Optionen (Raster, Einheit, Maßanzeige)
    pub options: EditorOptions,
    /// Bounding Box aller Elemente
    pub bounds: PlanBounds,
}

impl PlanScene {
    /// Gibt zurück, ob der Plan Elemente enthält.
    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Export-Ausschnitt: Bounding Box plus Rand.
    pub fn export_bounds(&self) -> PlanBounds {
        self.bounds.expanded(EXPORT_MARGIN)
    }

    /// Legendenzeilen `"<Name>: B × H × T"` in der aktiven Einheit, höchstens `limit`.
    pub fn legend_lines(&self, limit: usize) -> Vec<String> {
        let unit = self.options.unit_system;
        self.elements
            .iter()
            .take(limit)
            .map(|el| {
                format!(
                    "{}: {} × {} × {}",
                    el.display_name(),
                    format_dimension(el.width, unit),
                    format_dimension(el.height, unit),
                    format_dimension(el.depth, unit),
                )
            })
            .collect()
    }
}
