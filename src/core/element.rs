//! Platzierte Grundriss-Elemente, ihre Typen und die Standardmaße pro Typ.

use super::geometry::{PlanRect, MIN_ELEMENT_SIZE};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile Element-ID (im JSON als String, z.B. `"element-12"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Erstellt eine ID aus beliebigem Text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Breite, Höhe (2D-Grundfläche) und Tiefe (Extrusion in 3D).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Fallback-Maße für Typen ohne eigenen Tabelleneintrag.
pub const GENERIC_DIMENSIONS: Dimensions = Dimensions::new(100.0, 20.0, 40.0);

/// Geschlossene Menge der Elementtypen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    // Baukörper
    Wall,
    Door,
    Window,
    // Einrichtung
    Shelf,
    Display,
    Rack,
    Table,
    Chair,
    Sofa,
    Bed,
    Fridge,
    DairyFridge,
    Counter,
    Cashier,
    Mannequin,
    Plant,
    Gondola,
    Planogram,
    // Freihandformen
    Line,
    Rectangle,
    Circle,
    Cube,
    /// Unbekannter Typ aus einem Import
    #[serde(other)]
    Unknown,
}

impl ElementKind {
    /// Alle platzierbaren Typen (ohne `Unknown`)
    pub const PLACEABLE: [ElementKind; 22] = [
        ElementKind::Wall,
        ElementKind::Door,
        ElementKind::Window,
        ElementKind::Shelf,
        ElementKind::Display,
        ElementKind::Rack,
        ElementKind::Table,
        ElementKind::Chair,
        ElementKind::Sofa,
        ElementKind::Bed,
        ElementKind::Fridge,
        ElementKind::DairyFridge,
        ElementKind::Counter,
        ElementKind::Cashier,
        ElementKind::Mannequin,
        ElementKind::Plant,
        ElementKind::Gondola,
        ElementKind::Planogram,
        ElementKind::Line,
        ElementKind::Rectangle,
        ElementKind::Circle,
        ElementKind::Cube,
    ];

    /// Standardmaße beim Platzieren.
    pub const fn default_dimensions(self) -> Dimensions {
        match self {
            Self::Wall => Dimensions::new(200.0, 10.0, 100.0),
            Self::Door => Dimensions::new(80.0, 10.0, 10.0),
            Self::Window => Dimensions::new(100.0, 10.0, 10.0),
            Self::Shelf | Self::Display => Dimensions::new(120.0, 40.0, 60.0),
            Self::Rack => Dimensions::new(80.0, 80.0, 40.0),
            Self::Table => Dimensions::new(100.0, 100.0, 30.0),
            Self::Fridge => Dimensions::new(80.0, 60.0, 80.0),
            Self::DairyFridge => Dimensions::new(150.0, 60.0, 100.0),
            Self::Planogram => Dimensions::new(150.0, 40.0, 80.0),
            Self::Gondola => Dimensions::new(200.0, 60.0, 100.0),
            Self::Line => Dimensions::new(100.0, 2.0, 2.0),
            Self::Rectangle => Dimensions::new(80.0, 60.0, 2.0),
            Self::Circle => Dimensions::new(60.0, 60.0, 2.0),
            Self::Chair => Dimensions::new(40.0, 40.0, 40.0),
            Self::Sofa => Dimensions::new(120.0, 60.0, 40.0),
            Self::Bed => Dimensions::new(140.0, 200.0, 40.0),
            Self::Plant => Dimensions::new(40.0, 40.0, 80.0),
            Self::Counter => Dimensions::new(150.0, 60.0, 40.0),
            Self::Cashier => Dimensions::new(100.0, 80.0, 60.0),
            Self::Mannequin => Dimensions::new(40.0, 40.0, 180.0),
            Self::Cube => Dimensions::new(120.0, 120.0, 120.0),
            Self::Unknown => GENERIC_DIMENSIONS,
        }
    }

    /// Anzeigename des Typs (Basis für Standard-Elementnamen).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wall => "Wand",
            Self::Door => "Tür",
            Self::Window => "Fenster",
            Self::Shelf => "Regal",
            Self::Display => "Präsentationsständer",
            Self::Rack => "Kleiderständer",
            Self::Table => "Tisch",
            Self::Chair => "Stuhl",
            Self::Sofa => "Sofa",
            Self::Bed => "Bett",
            Self::Fridge => "Kühlschrank",
            Self::DairyFridge => "Molkerei-Kühlregal",
            Self::Counter => "Theke",
            Self::Cashier => "Kasse",
            Self::Mannequin => "Schaufensterpuppe",
            Self::Plant => "Pflanze",
            Self::Gondola => "Gondel",
            Self::Planogram => "Planogramm",
            Self::Line => "Linie",
            Self::Rectangle => "Rechteck",
            Self::Circle => "Kreis",
            Self::Cube => "Würfel",
            Self::Unknown => "Element",
        }
    }

    /// Typ-Tag im JSON-Format (`snake_case`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Shelf => "shelf",
            Self::Display => "display",
            Self::Rack => "rack",
            Self::Table => "table",
            Self::Chair => "chair",
            Self::Sofa => "sofa",
            Self::Bed => "bed",
            Self::Fridge => "fridge",
            Self::DairyFridge => "dairy_fridge",
            Self::Counter => "counter",
            Self::Cashier => "cashier",
            Self::Mannequin => "mannequin",
            Self::Plant => "plant",
            Self::Gondola => "gondola",
            Self::Planogram => "planogram",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Cube => "cube",
            Self::Unknown => "unknown",
        }
    }

    /// Typ zu einem JSON-Tag; unbekannte Tags ergeben `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        Self::PLACEABLE
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .unwrap_or(Self::Unknown)
    }

    /// Türen und Fenster müssen an bzw. in einer Wand platziert werden.
    pub fn requires_wall(self) -> bool {
        matches!(self, Self::Door | Self::Window)
    }
}

/// Ein platziertes Element des Grundrisses (JSON-Format: camelCase, siehe [`ElementRecord`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ElementRecord", into = "ElementRecord")]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Originaler Typ-Tag eines `Unknown`-Elements, wird beim Export zurückgeschrieben
    pub unknown_type: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Grad, beliebiger Wert (semantisch mod 360)
    pub rotation: f32,
    pub name: Option<String>,
    /// Nur Fenster: Wand, in der das Fenster sitzt
    pub parent_wall_id: Option<ElementId>,
    pub window_top_distance: Option<f32>,
    pub window_bottom_distance: Option<f32>,
}

/// Wire-Format eines Elements. `type` bleibt als Text erhalten.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementRecord {
    id: ElementId,
    #[serde(rename = "type")]
    type_tag: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default)]
    depth: f32,
    #[serde(default)]
    rotation: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_wall_id: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_top_distance: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_bottom_distance: Option<f32>,
}

impl From<ElementRecord> for Element {
    fn from(record: ElementRecord) -> Self {
        let kind = ElementKind::from_tag(&record.type_tag);
        Self {
            id: record.id,
            kind,
            unknown_type: (kind == ElementKind::Unknown).then_some(record.type_tag),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            depth: record.depth,
            rotation: record.rotation,
            name: record.name,
            parent_wall_id: record.parent_wall_id,
            window_top_distance: record.window_top_distance,
            window_bottom_distance: record.window_bottom_distance,
        }
    }
}

impl From<Element> for ElementRecord {
    fn from(element: Element) -> Self {
        let type_tag = match (element.kind, element.unknown_type) {
            (ElementKind::Unknown, Some(raw)) => raw,
            (kind, _) => kind.as_str().to_string(),
        };
        Self {
            id: element.id,
            type_tag,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            depth: element.depth,
            rotation: element.rotation,
            name: element.name,
            parent_wall_id: element.parent_wall_id,
            window_top_distance: element.window_top_distance,
            window_bottom_distance: element.window_bottom_distance,
        }
    }
}

impl Element {
    /// Baut ein Element mit den Standardmaßen seines Typs.
    ///
    /// Maße unterhalb der Mindestgröße werden angehoben.
    pub fn with_defaults(id: ElementId, kind: ElementKind, position: Vec2) -> Self {
        let dims = kind.default_dimensions();
        Self {
            id,
            kind,
            unknown_type: None,
            x: position.x,
            y: position.y,
            width: dims.width.max(MIN_ELEMENT_SIZE),
            height: dims.height.max(MIN_ELEMENT_SIZE),
            depth: dims.depth,
            rotation: 0.0,
            name: None,
            parent_wall_id: None,
            window_top_distance: None,
            window_bottom_distance: None,
        }
    }

    /// 2D-Grundfläche als Rechteck
    pub fn rect(&self) -> PlanRect {
        PlanRect::new(self.x, self.y, self.width, self.height)
    }

    /// Übernimmt Position und Größe aus einem Rechteck (mit Mindestgröße).
    pub fn set_rect(&mut self, rect: PlanRect) {
        let rect = rect.clamped();
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Rotation normalisiert auf `[0, 360)`.
    pub fn rotation_normalized(&self) -> f32 {
        self.rotation.rem_euclid(360.0)
    }

    /// Name oder, falls leer, das Typ-Label.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.kind.label(),
        }
    }
}

/// Nicht persistierte Vorschau des nächsten zu platzierenden Elements.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostElement {
    pub element: Element,
    /// Ob an dieser Stelle platziert werden darf
    pub valid: bool,
}

impl GhostElement {
    /// Feste ID der Vorschau
    pub const ID: &'static str = "ghost";

    /// Erstellt eine Vorschau mit Standardmaßen an `position`.
    pub fn new(kind: ElementKind, position: Vec2, valid: bool) -> Self {
        Self {
            element: Element::with_defaults(ElementId::new(Self::ID), kind, position),
            valid,
        }
    }
}
