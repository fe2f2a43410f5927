use crate::core::{ElementId, ElementKind, ResizeHandle};
use crate::shared::{EditorOptions, ViewMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Platzierung ─────────────────────────────────────────────
    /// Platzierungs-Werkzeug aktivieren
    SelectTool { kind: ElementKind },
    /// Ghost an Planposition neu berechnen
    UpdatePlacementPreview { plan_pos: glam::Vec2 },
    /// Element des aktiven Werkzeugs platzieren
    PlaceElement { plan_pos: glam::Vec2 },

    // ── Selektion & Manipulation ────────────────────────────────
    ClearSelection,
    BeginPan { screen_pos: glam::Vec2 },
    UpdatePan { screen_pos: glam::Vec2 },
    BeginDrag {
        id: ElementId,
        plan_pos: glam::Vec2,
    },
    UpdateDrag { plan_pos: glam::Vec2 },
    BeginResize {
        id: ElementId,
        handle: ResizeHandle,
        plan_pos: glam::Vec2,
    },
    UpdateResize { plan_pos: glam::Vec2 },
    BeginRotate { id: ElementId },
    UpdateRotate { plan_pos: glam::Vec2 },
    /// Pan/Drag/Resize/Rotate beenden
    EndInteraction,
    /// Zurück nach Idle, Ghost/Selektion/Werkzeug verwerfen
    Cancel,
    /// Selektiertes Element löschen
    DeleteSelected,

    // ── Ansicht ─────────────────────────────────────────────────
    ZoomIn,
    ZoomOut,
    CenterView,
    SetCanvasSize { size: [f32; 2] },
    SetViewMode { mode: ViewMode },
    ToggleMoveMode,
    ApplyOptions { options: EditorOptions },
    SaveOptions,

    // ── Datei-I/O ───────────────────────────────────────────────
    /// Datei lesen und importieren
    ImportFromFile { path: String },
    /// JSON-Inhalt importieren
    ImportFromJson { contents: String },
    ExportToFile { path: String },

    // ── Eigenschaften ───────────────────────────────────────────
    RenameElement { id: ElementId, name: String },
    ResizeElement {
        id: ElementId,
        width: f32,
        height: f32,
    },
    SetElementDepth { id: ElementId, depth: f32 },
    SetWindowDistances {
        id: ElementId,
        top: f32,
        bottom: f32,
    },
    DismissNotice,
}
