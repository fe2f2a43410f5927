use crate::core::{ElementId, ElementKind, ResizeHandle};
use crate::shared::{EditorOptions, ViewMode};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/Router ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Werkzeuge & Platzierung ─────────────────────────────────
    /// Platzierungs-Werkzeug gewählt
    SelectToolRequested { kind: ElementKind },
    /// Zeiger bewegt sich im Placing-Modus (Plan-Koordinaten)
    PlacementPreviewRequested { plan_pos: glam::Vec2 },
    /// Klick auf die Canvas im Placing-Modus
    PlaceElementRequested { plan_pos: glam::Vec2 },

    // ── Pointer ─────────────────────────────────────────────────
    /// Klick auf leere Canvas (oder Verschiebe-Modus)
    CanvasPressed { screen_pos: glam::Vec2 },
    /// Pan-Bewegung (Screen-Koordinaten)
    PanUpdated { screen_pos: glam::Vec2 },
    /// Klick auf ein Element
    ElementPressed {
        id: ElementId,
        plan_pos: glam::Vec2,
    },
    ElementDragUpdated { plan_pos: glam::Vec2 },
    /// Klick auf einen Resize-Griff
    ResizeHandlePressed {
        id: ElementId,
        handle: ResizeHandle,
        plan_pos: glam::Vec2,
    },
    ResizeUpdated { plan_pos: glam::Vec2 },
    /// Klick auf den Rotations-Griff
    RotateHandlePressed { id: ElementId },
    RotateUpdated { plan_pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased,

    // ── Tastatur ────────────────────────────────────────────────
    /// Escape: zurück nach Idle
    CancelRequested,
    /// Entfernen-Taste
    DeleteSelectedRequested,

    // ── Ansicht ─────────────────────────────────────────────────
    ZoomInRequested,
    ZoomOutRequested,
    /// Viewport auf die Planmitte zentrieren
    CenterViewRequested,
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: [f32; 2] },
    ViewModeChanged { mode: ViewMode },
    /// Verschiebe-Modus umschalten
    MoveModeToggled,
    /// Optionen geändert (Einstellungs-Panel)
    OptionsChanged { options: EditorOptions },
    /// Optionen in TOML-Datei sichern
    SaveOptionsRequested,

    // ── Datei-I/O ───────────────────────────────────────────────
    /// Datei für Import gewählt
    ImportFileSelected { path: String },
    /// Dateiinhalt vom Host bereits gelesen
    ImportContentsReceived { contents: String },
    /// Plan als JSON exportieren
    ExportRequested { path: String },

    // ── Eigenschaften-Panel ─────────────────────────────────────
    RenameElementRequested { id: ElementId, name: String },
    ResizeElementRequested {
        id: ElementId,
        width: f32,
        height: f32,
    },
    SetElementDepthRequested { id: ElementId, depth: f32 },
    SetWindowDistancesRequested {
        id: ElementId,
        top: f32,
        bottom: f32,
    },
    /// Hinweis geschlossen
    NoticeDismissed,
}
