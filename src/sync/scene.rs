//! Schnittstelle zum 3D-Kollaborateur und die Sync-Nachrichten.

use crate::core::{Element, ElementId};
use std::cell::RefCell;
use std::rc::Rc;

/// Eine Änderung, die an die 3D-Ansicht weitergereicht wird.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Neues Element hinzugefügt
    Add(Element),
    /// Element entfernt
    Remove(ElementId),
    /// Position geändert
    UpdatePosition(Element),
    /// Größe oder Tiefe geändert
    UpdateSize(Element),
    /// Rotation geändert
    UpdateRotation(Element),
    /// Gesamte Szene neu aufbauen (Import, Wechsel in 3D, Zentrieren in 3D)
    RefreshAll(Vec<Element>),
}

impl SceneCommand {
    /// Kurzname für Logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::UpdatePosition(_) => "update_position",
            Self::UpdateSize(_) => "update_size",
            Self::UpdateRotation(_) => "update_rotation",
            Self::RefreshAll(_) => "refresh_all",
        }
    }

    /// Wendet den Command auf einen Kollaborateur an.
    pub fn apply(self, scene: &mut dyn Scene3D) {
        match self {
            Self::Add(el) => scene.add(&el),
            Self::Remove(id) => scene.remove(&id),
            Self::UpdatePosition(el) => scene.update_position(&el),
            Self::UpdateSize(el) => scene.update_size(&el),
            Self::UpdateRotation(el) => scene.update_rotation(&el),
            Self::RefreshAll(elements) => scene.refresh_all(&elements),
        }
    }
}

/// Opakes Abbild der 3D-Zeichenfläche (z.B. für PDF-Export).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCapture {
    pub width: u32,
    pub height: u32,
    /// RGBA8, zeilenweise
    pub pixels: Vec<u8>,
}

/// 3D-Kollaborateur, der die Elemente als extrudierte Körper darstellt.
///
/// Der Editor ruft diese Methoden nur auf und erwartet keine Rückmeldung.
pub trait Scene3D {
    fn add(&mut self, element: &Element);
    fn remove(&mut self, id: &ElementId);
    fn update_position(&mut self, element: &Element);
    fn update_size(&mut self, element: &Element);
    fn update_rotation(&mut self, element: &Element);
    fn refresh_all(&mut self, elements: &[Element]);

    /// Zeichnet einen einzelnen Frame (vor einem Surface-Capture).
    fn render_once(&mut self) {}

    /// Aktuelles Bild der Zeichenfläche, falls verfügbar.
    fn surface(&self) -> Option<SurfaceCapture> {
        None
    }
}

/// Zeichnet alle empfangenen Commands auf.
///
/// Klone teilen sich das Protokoll; ein Klon bleibt beim Aufrufer, während
/// der andere an die Bridge übergeben wird.
#[derive(Debug, Clone, Default)]
pub struct RecordingScene {
    log: Rc<RefCell<Vec<SceneCommand>>>,
    renders: Rc<RefCell<usize>>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kopie aller bisher empfangenen Commands.
    pub fn commands(&self) -> Vec<SceneCommand> {
        self.log.borrow().clone()
    }

    /// Entnimmt alle bisher empfangenen Commands.
    pub fn take(&self) -> Vec<SceneCommand> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn render_count(&self) -> usize {
        *self.renders.borrow()
    }

    fn push(&self, command: SceneCommand) {
        self.log.borrow_mut().push(command);
    }
}

impl Scene3D for RecordingScene {
    fn add(&mut self, element: &Element) {
        self.push(SceneCommand::Add(element.clone()));
    }

    fn remove(&mut self, id: &ElementId) {
        self.push(SceneCommand::Remove(id.clone()));
    }

    fn update_position(&mut self, element: &Element) {
        self.push(SceneCommand::UpdatePosition(element.clone()));
    }

    fn update_size(&mut self, element: &Element) {
        self.push(SceneCommand::UpdateSize(element.clone()));
    }

    fn update_rotation(&mut self, element: &Element) {
        self.push(SceneCommand::UpdateRotation(element.clone()));
    }

    fn refresh_all(&mut self, elements: &[Element]) {
        self.push(SceneCommand::RefreshAll(elements.to_vec()));
    }

    fn render_once(&mut self) {
        *self.renders.borrow_mut() += 1;
    }
}
