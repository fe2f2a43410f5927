//! Bridge vom Element-Store zum optionalen 3D-Kollaborateur.

use super::{Scene3D, SceneCommand, SurfaceCapture};

/// Hält nur den Handle des 3D-Kollaborateurs, keinen eigenen Zustand.
#[derive(Default)]
pub struct SyncBridge {
    handle: Option<Box<dyn Scene3D>>,
}

impl SyncBridge {
    /// Erstellt eine Bridge ohne angebundene Szene.
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Bindet einen Kollaborateur an (ersetzt einen vorhandenen).
    pub fn attach(&mut self, scene: Box<dyn Scene3D>) {
        if self.handle.is_some() {
            log::debug!("3D-Szene wird ersetzt");
        }
        self.handle = Some(scene);
    }

    /// Löst den Kollaborateur und gibt ihn zurück.
    pub fn detach(&mut self) -> Option<Box<dyn Scene3D>> {
        self.handle.take()
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Leitet einen Command weiter. Ohne Handle: No-op.
    pub fn send(&mut self, command: SceneCommand) {
        match self.handle.as_deref_mut() {
            Some(scene) => {
                log::debug!("Sync → 3D: {}", command.name());
                command.apply(scene);
            }
            None => log::debug!("Keine 3D-Szene angebunden, {} verworfen", command.name()),
        }
    }

    /// Sendet einen optionalen Command (Ergebnis eines Use-Cases).
    pub fn send_opt(&mut self, command: Option<SceneCommand>) {
        if let Some(command) = command {
            self.send(command);
        }
    }

    /// Zeichnet einen Frame und liefert das Bild der Zeichenfläche.
    pub fn capture(&mut self) -> Option<SurfaceCapture> {
        let scene = self.handle.as_deref_mut()?;
        scene.render_once();
        scene.surface()
    }
}

impl std::fmt::Debug for SyncBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncBridge")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Element, ElementId, ElementKind};
    use crate::sync::RecordingScene;
    use glam::Vec2;

    #[test]
    fn test_send_without_handle_is_noop() {
        let mut bridge = SyncBridge::new();
        bridge.send(SceneCommand::Remove(ElementId::new("x")));
        assert!(!bridge.is_attached());
        assert!(bridge.capture().is_none());
    }

    #[test]
    fn test_send_forwards_to_attached_scene() {
        let scene = RecordingScene::new();
        let mut bridge = SyncBridge::new();
        bridge.attach(Box::new(scene.clone()));

        let el = Element::with_defaults(ElementId::new("a"), ElementKind::Table, Vec2::ZERO);
        bridge.send(SceneCommand::Add(el.clone()));
        bridge.send_opt(None);
        bridge.send(SceneCommand::UpdateRotation(el.clone()));

        assert_eq!(
            scene.commands(),
            vec![SceneCommand::Add(el.clone()), SceneCommand::UpdateRotation(el)]
        );
    }

    #[test]
    fn test_capture_renders_once() {
        let scene = RecordingScene::new();
        let mut bridge = SyncBridge::new();
        bridge.attach(Box::new(scene.clone()));
        assert!(bridge.capture().is_none());
        assert_eq!(scene.render_count(), 1);

        assert!(bridge.detach().is_some());
        bridge.send(SceneCommand::RefreshAll(Vec::new()));
        assert!(scene.commands().is_empty());
    }
}
