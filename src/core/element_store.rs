//! Geordnete Sammlung aller platzierten Elemente.

use super::geometry::{bounding_box, resize_rect, snap, PlanBounds, PlanRect, MIN_ELEMENT_SIZE};
use super::{Element, ElementId, ElementKind, ResizeHandle};
use anyhow::bail;
use glam::Vec2;
use indexmap::IndexMap;

/// Besitzt die Elementliste exklusiv. Die Einfügereihenfolge bleibt erhalten
/// (Zeichen- und Export-Reihenfolge).
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: IndexMap<ElementId, Element>,
    /// Zähler für generierte IDs (`element-<n>`)
    next_id: u64,
}

impl ElementStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Iteriert in Planreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }

    /// Kopie der Elementliste (Export, Bulk-Refresh)
    pub fn to_vec(&self) -> Vec<Element> {
        self.elements.values().cloned().collect()
    }

    /// Anzahl der Elemente eines Typs
    pub fn count_of_kind(&self, kind: ElementKind) -> usize {
        self.elements.values().filter(|el| el.kind == kind).count()
    }

    /// Bounding Box über alle Elemente — O(n)
    pub fn bounds(&self) -> PlanBounds {
        bounding_box(self.elements.values())
    }

    /// Liefert die nächste freie generierte ID.
    fn next_element_id(&mut self) -> ElementId {
        loop {
            self.next_id += 1;
            let id = ElementId::new(format!("element-{}", self.next_id));
            if !self.elements.contains_key(&id) {
                return id;
            }
        }
    }

    /// Legt ein Element mit Standardmaßen und Standardnamen an und hängt es an.
    ///
    /// Der Name lautet `"<Label> <n>"`, wobei `n` die Anzahl bereits
    /// vorhandener Elemente desselben Typs + 1 ist.
    pub fn create(&mut self, kind: ElementKind, position: Vec2) -> Element {
        let ordinal = self.count_of_kind(kind) + 1;
        let id = self.next_element_id();
        let mut element = Element::with_defaults(id.clone(), kind, position);
        element.name = Some(format!("{} {}", kind.label(), ordinal));
        self.elements.insert(id, element.clone());
        element
    }

    /// Verknüpft ein Fenster mit seiner Elternwand und setzt beide Abstände.
    pub fn mount_window(
        &mut self,
        window_id: &ElementId,
        wall_id: &ElementId,
        distance: f32,
    ) -> Option<&Element> {
        let window = self.elements.get_mut(window_id)?;
        window.parent_wall_id = Some(wall_id.clone());
        window.window_top_distance = Some(distance);
        window.window_bottom_distance = Some(distance);
        Some(window)
    }

    /// Verschiebt um ein Delta; mit Raster wird die absolute Position eingerastet.
    pub fn move_by(&mut self, id: &ElementId, delta: Vec2, grid: Option<f32>) -> Option<&Element> {
        let current = self.elements.get(id)?.position();
        self.move_to(id, current + delta, grid)
    }

    /// Setzt die Position; mit Raster wird eingerastet.
    pub fn move_to(&mut self, id: &ElementId, position: Vec2, grid: Option<f32>) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        let (x, y) = match grid {
            Some(g) => (snap(position.x, g), snap(position.y, g)),
            None => (position.x, position.y),
        };
        element.x = x;
        element.y = y;
        Some(element)
    }

    /// Zieht einen Resize-Griff um `delta` (siehe [`resize_rect`]).
    pub fn resize(
        &mut self,
        id: &ElementId,
        handle: ResizeHandle,
        delta: Vec2,
        grid: Option<f32>,
    ) -> Option<&Element> {
        let rect = self.elements.get(id)?.rect();
        self.set_rect(id, resize_rect(rect, handle, delta, grid))
    }

    /// Setzt Position und Größe; die Mindestgröße wird erzwungen.
    pub fn set_rect(&mut self, id: &ElementId, rect: PlanRect) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        element.set_rect(rect);
        Some(element)
    }

    /// Setzt nur die Größe (Eigenschaften-Panel), geklemmt auf die Mindestgröße.
    pub fn set_size(&mut self, id: &ElementId, width: f32, height: f32) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        element.width = width.max(MIN_ELEMENT_SIZE);
        element.height = height.max(MIN_ELEMENT_SIZE);
        Some(element)
    }

    pub fn set_depth(&mut self, id: &ElementId, depth: f32) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        element.depth = depth.max(0.0);
        Some(element)
    }

    pub fn set_name(&mut self, id: &ElementId, name: String) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        element.name = Some(name);
        Some(element)
    }

    /// Setzt die Fensterabstände. Nur für Fenster mit Elternwand.
    pub fn set_window_distances(
        &mut self,
        id: &ElementId,
        top: f32,
        bottom: f32,
    ) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        if element.kind != ElementKind::Window || element.parent_wall_id.is_none() {
            return None;
        }
        element.window_top_distance = Some(top.max(0.0));
        element.window_bottom_distance = Some(bottom.max(0.0));
        Some(element)
    }

    /// Setzt die Rotation in Grad.
    pub fn rotate(&mut self, id: &ElementId, angle: f32) -> Option<&Element> {
        let element = self.elements.get_mut(id)?;
        element.rotation = angle;
        Some(element)
    }

    /// Entfernt ein Element; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        self.elements.shift_remove(id)
    }

    /// Ersetzt den gesamten Inhalt atomar.
    ///
    /// Doppelte IDs führen zum Abbruch, bevor irgendetwas verändert wird.
    /// Maße unter der Mindestgröße werden angehoben.
    pub fn replace_all(&mut self, elements: Vec<Element>) -> anyhow::Result<()> {
        let mut next = IndexMap::with_capacity(elements.len());
        for mut element in elements {
            if next.contains_key(&element.id) {
                bail!("Doppelte Element-ID: {}", element.id);
            }
            if element.width < MIN_ELEMENT_SIZE || element.height < MIN_ELEMENT_SIZE {
                log::warn!(
                    "Element {} unter Mindestgröße ({}x{}), wird angehoben",
                    element.id,
                    element.width,
                    element.height
                );
                element.width = element.width.max(MIN_ELEMENT_SIZE);
                element.height = element.height.max(MIN_ELEMENT_SIZE);
            }
            next.insert(element.id.clone(), element);
        }
        self.elements = next;
        Ok(())
    }
}
