use crate::core::{ElementId, ElementKind, GhostElement, PlanRect, ResizeHandle};
use glam::Vec2;

/// Aktiver Interaktionsmodus der Canvas.
///
/// Jede Variante trägt genau die Ankerdaten, die ihre Pointer-Moves brauchen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    /// Nichts aktiv
    #[default]
    Idle,
    /// Platzierungs-Werkzeug aktiv, Ghost folgt dem Zeiger
    Placing {
        tool: ElementKind,
        ghost: Option<GhostElement>,
    },
    /// Canvas wird verschoben
    PanningCanvas {
        /// Letzte Zeigerposition (Screen)
        last_screen: Vec2,
    },
    /// Element wird gezogen
    DraggingElement {
        id: ElementId,
        /// Zeigerposition beim Drücken (Plan)
        anchor_pointer: Vec2,
        /// Elementposition beim Drücken (Plan)
        anchor_origin: Vec2,
    },
    /// Element wird über einen Griff skaliert
    Resizing {
        id: ElementId,
        handle: ResizeHandle,
        anchor_pointer: Vec2,
        anchor_rect: PlanRect,
    },
    /// Element wird gedreht
    Rotating { id: ElementId },
}

impl InteractionMode {
    /// Kurzname für Logs und Listener-Schlüssel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Placing { .. } => "placing",
            Self::PanningCanvas { .. } => "panning",
            Self::DraggingElement { .. } => "dragging",
            Self::Resizing { .. } => "resizing",
            Self::Rotating { .. } => "rotating",
        }
    }

    /// Aktives Platzierungs-Werkzeug
    pub fn active_tool(&self) -> Option<ElementKind> {
        match self {
            Self::Placing { tool, .. } => Some(*tool),
            _ => None,
        }
    }

    pub fn ghost(&self) -> Option<&GhostElement> {
        match self {
            Self::Placing { ghost, .. } => ghost.as_ref(),
            _ => None,
        }
    }

    /// Pan, Drag, Resize oder Rotate aktiv (endet mit Pointer-Up).
    pub fn is_manipulating(&self) -> bool {
        matches!(
            self,
            Self::PanningCanvas { .. }
                | Self::DraggingElement { .. }
                | Self::Resizing { .. }
                | Self::Rotating { .. }
        )
    }
}
