//! Fensterweite Listener und der Schlüssel, an dem ihre Neuregistrierung hängt.

use crate::app::{AppState, InteractionMode};
use crate::core::{ElementId, ElementKind};
use glam::Vec2;

/// Art eines fensterweiten Listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    KeyDown,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::KeyDown,
    ];
}

/// Host (Fenster/Browser/Toolkit), bei dem fensterweite Listener registriert werden.
pub trait ListenerHost {
    fn register(&mut self, kind: ListenerKind);
    fn deregister(&mut self, kind: ListenerKind);
}

/// Von den fensterweiten Listenern erfasste Daten.
///
/// Ändert sich der Schlüssel, müssen die Listener neu registriert werden.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureKey {
    pub mode: &'static str,
    pub tool: Option<ElementKind>,
    pub element: Option<ElementId>,
    pub anchor: Option<Vec2>,
    pub offset: Vec2,
    pub zoom: f32,
}

impl CaptureKey {
    /// Leitet den Schlüssel aus Interaktionsmodus und Viewport ab.
    pub fn from_state(state: &AppState) -> Self {
        let (tool, element, anchor) = match &state.interaction {
            InteractionMode::Idle => (None, None, None),
            InteractionMode::Placing { tool, .. } => (Some(*tool), None, None),
            InteractionMode::PanningCanvas { last_screen } => (None, None, Some(*last_screen)),
            InteractionMode::DraggingElement {
                id, anchor_pointer, ..
            }
            | InteractionMode::Resizing {
                id, anchor_pointer, ..
            } => (None, Some(id.clone()), Some(*anchor_pointer)),
            InteractionMode::Rotating { id } => (None, Some(id.clone()), None),
        };

        Self {
            mode: state.interaction.name(),
            tool,
            element,
            anchor,
            offset: state.view.viewport.offset,
            zoom: state.view.viewport.zoom,
        }
    }
}
