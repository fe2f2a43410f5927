//! Router vom Host-Event zum `AppIntent`.

use super::keyboard::collect_keyboard_intents;
use super::{CaptureKey, ListenerHost, ListenerKind};
use crate::app::{AppIntent, AppState, InteractionMode};
use crate::core::{ElementId, ResizeHandle};
use glam::Vec2;

/// Was unter dem Zeiger lag, als die Taste gedrückt wurde.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    /// Leere Canvas
    Canvas,
    Element(ElementId),
    ResizeHandle(ElementId, ResizeHandle),
    RotateHandle(ElementId),
}

/// Für den Editor relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Delete,
    /// `+`
    ZoomIn,
    /// `-`
    ZoomOut,
    Home,
    Other,
}

/// Rohes Host-Event. Positionen sind Screen-Koordinaten relativ zur Canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    PointerDown { screen_pos: Vec2, target: HitTarget },
    PointerMove { screen_pos: Vec2 },
    PointerUp,
    KeyDown { key: Key },
}

/// Übersetzt Host-Events in Intents und verwaltet die fensterweiten Listener.
#[derive(Debug, Default)]
pub struct EventRouter {
    /// Schlüssel der aktuell registrierten Listener, `None` = nicht registriert
    registered: Option<CaptureKey>,
}

impl EventRouter {
    /// Erstellt einen Router ohne registrierte Listener.
    pub fn new() -> Self {
        Self { registered: None }
    }

    /// Sind die fensterweiten Listener registriert?
    pub fn is_listening(&self) -> bool {
        self.registered.is_some()
    }

    /// Registriert die fensterweiten Listener neu, falls sich der
    /// Erfassungsschlüssel geändert hat. Gibt `true` zurück, wenn neu registriert wurde.
    pub fn sync_listeners(&mut self, state: &AppState, host: &mut dyn ListenerHost) -> bool {
        let key = CaptureKey::from_state(state);
        if self.registered.as_ref() == Some(&key) {
            return false;
        }

        if self.registered.is_some() {
            for kind in ListenerKind::ALL {
                host.deregister(kind);
            }
        }
        for kind in ListenerKind::ALL {
            host.register(kind);
        }
        log::debug!("Fenster-Listener registriert (Modus: {})", key.mode);
        self.registered = Some(key);
        true
    }

    /// Entfernt alle fensterweiten Listener.
    pub fn teardown(&mut self, host: &mut dyn ListenerHost) {
        if self.registered.take().is_some() {
            for kind in ListenerKind::ALL {
                host.deregister(kind);
            }
            log::debug!("Fenster-Listener entfernt");
        }
    }

    /// Übersetzt ein Host-Event in Intents.
    ///
    /// Fensterweite Events ohne registrierte Listener werden verworfen.
    pub fn route(&self, state: &AppState, event: RawEvent) -> Vec<AppIntent> {
        match event {
            RawEvent::PointerDown { screen_pos, target } => {
                Self::pointer_down(state, screen_pos, target)
            }
            _ if !self.is_listening() => {
                log::trace!("Fenster-Event ohne Listener verworfen");
                vec![]
            }
            RawEvent::PointerMove { screen_pos } => Self::pointer_move(state, screen_pos),
            RawEvent::PointerUp => vec![AppIntent::PointerReleased],
            RawEvent::KeyDown { key } => collect_keyboard_intents(key, state),
        }
    }

    fn pointer_down(state: &AppState, screen_pos: Vec2, target: HitTarget) -> Vec<AppIntent> {
        let plan_pos = state.view.viewport.screen_to_plan(screen_pos);
        let placing = state.interaction.active_tool().is_some();

        // Im Placing-Modus platziert jeder Klick auf Canvas oder Element
        // (Türen und Fenster liegen immer über einer Wand)
        let intent = match target {
            HitTarget::Canvas | HitTarget::Element(_) if placing => {
                AppIntent::PlaceElementRequested { plan_pos }
            }
            HitTarget::Canvas => AppIntent::CanvasPressed { screen_pos },
            HitTarget::Element(_) if state.view.move_mode => AppIntent::CanvasPressed { screen_pos },
            HitTarget::Element(id) => AppIntent::ElementPressed { id, plan_pos },
            HitTarget::ResizeHandle(id, handle) => AppIntent::ResizeHandlePressed {
                id,
                handle,
                plan_pos,
            },
            HitTarget::RotateHandle(id) => AppIntent::RotateHandlePressed { id },
        };
        vec![intent]
    }

    /// Ein Pointer-Move: Modus lesen, eine Umrechnung, ein Intent.
    fn pointer_move(state: &AppState, screen_pos: Vec2) -> Vec<AppIntent> {
        let plan_pos = || state.view.viewport.screen_to_plan(screen_pos);
        let intent = match state.interaction {
            InteractionMode::Idle => return vec![],
            InteractionMode::Placing { .. } => AppIntent::PlacementPreviewRequested {
                plan_pos: plan_pos(),
            },
            InteractionMode::PanningCanvas { .. } => AppIntent::PanUpdated { screen_pos },
            InteractionMode::DraggingElement { .. } => AppIntent::ElementDragUpdated {
                plan_pos: plan_pos(),
            },
            InteractionMode::Resizing { .. } => AppIntent::ResizeUpdated {
                plan_pos: plan_pos(),
            },
            InteractionMode::Rotating { .. } => AppIntent::RotateUpdated {
                plan_pos: plan_pos(),
            },
        };
        vec![intent]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ElementKind;

    #[derive(Default)]
    struct CountingHost {
        registered: usize,
        deregistered: usize,
    }

    impl ListenerHost for CountingHost {
        fn register(&mut self, _kind: ListenerKind) {
            self.registered += 1;
        }

        fn deregister(&mut self, _kind: ListenerKind) {
            self.deregistered += 1;
        }
    }

    #[test]
    fn window_events_are_dropped_before_sync() {
        let state = AppState::new();
        let router = EventRouter::new();
        assert!(router.route(&state, RawEvent::PointerUp).is_empty());
        assert!(router
            .route(&state, RawEvent::KeyDown { key: Key::Escape })
            .is_empty());
    }

    #[test]
    fn sync_registers_only_on_key_change() {
        let mut state = AppState::new();
        let mut host = CountingHost::default();
        let mut router = EventRouter::new();

        assert!(router.sync_listeners(&state, &mut host));
        assert!(!router.sync_listeners(&state, &mut host));
        assert_eq!((host.registered, host.deregistered), (3, 0));

        state.view.viewport.offset = Vec2::new(5.0, 0.0);
        assert!(router.sync_listeners(&state, &mut host));
        assert_eq!((host.registered, host.deregistered), (6, 3));

        router.teardown(&mut host);
        router.teardown(&mut host);
        assert_eq!(host.deregistered, 6);
        assert!(!router.is_listening());
    }

    #[test]
    fn canvas_click_while_placing_places() {
        let mut state = AppState::new();
        state.interaction = InteractionMode::Placing {
            tool: ElementKind::Table,
            ghost: None,
        };
        state.view.viewport.zoom = 2.0;
        let router = EventRouter::new();

        let intents = router.route(
            &state,
            RawEvent::PointerDown {
                screen_pos: Vec2::new(100.0, 60.0),
                target: HitTarget::Canvas,
            },
        );

        assert!(matches!(
            intents[..],
            [AppIntent::PlaceElementRequested { plan_pos }] if plan_pos == Vec2::new(50.0, 30.0)
        ));
    }

    #[test]
    fn element_click_while_placing_places() {
        let mut state = AppState::new();
        state.interaction = InteractionMode::Placing {
            tool: ElementKind::Window,
            ghost: None,
        };
        state.view.move_mode = true;
        let router = EventRouter::new();

        let intents = router.route(
            &state,
            RawEvent::PointerDown {
                screen_pos: Vec2::new(40.0, 0.0),
                target: HitTarget::Element(ElementId::new("wall")),
            },
        );

        assert!(matches!(
            intents[..],
            [AppIntent::PlaceElementRequested { plan_pos }] if plan_pos == Vec2::new(40.0, 0.0)
        ));
    }

    #[test]
    fn element_click_in_move_mode_pans() {
        let mut state = AppState::new();
        state.view.move_mode = true;
        let router = EventRouter::new();

        let intents = router.route(
            &state,
            RawEvent::PointerDown {
                screen_pos: Vec2::ZERO,
                target: HitTarget::Element(ElementId::new("a")),
            },
        );

        assert!(matches!(intents[..], [AppIntent::CanvasPressed { .. }]));
    }

    #[test]
    fn pointer_move_follows_mode() {
        let mut state = AppState::new();
        let mut host = CountingHost::default();
        let mut router = EventRouter::new();
        router.sync_listeners(&state, &mut host);
        let mv = RawEvent::PointerMove {
            screen_pos: Vec2::new(10.0, 10.0),
        };

        assert!(router.route(&state, mv.clone()).is_empty());

        state.interaction = InteractionMode::Rotating {
            id: ElementId::new("a"),
        };
        assert!(matches!(
            router.route(&state, mv)[..],
            [AppIntent::RotateUpdated { .. }]
        ));
    }
}
