//! Reine Geometrie-Funktionen: Koordinaten-Umrechnung, Snapping, Bounding Box
//! und die Wand-Adjazenz-Prädikate für Türen und Fenster.

use super::{Element, ElementKind, ResizeHandle};
use glam::Vec2;

/// Minimale Breite/Höhe eines Elements in Planeinheiten.
pub const MIN_ELEMENT_SIZE: f32 = 10.0;
/// Toleranz (Planeinheiten), innerhalb der eine Tür als an der Wand anliegend gilt.
pub const DOOR_WALL_TOLERANCE: f32 = 5.0;
/// Fester Rotationsschritt in Grad.
pub const ROTATION_SNAP_STEP: f32 = 15.0;
/// Anteil der Wandhöhe für die Standard-Fensterabstände.
pub const WINDOW_DISTANCE_RATIO: f32 = 0.2;
/// Obergrenze der Standard-Fensterabstände.
pub const WINDOW_DISTANCE_MAX: f32 = 20.0;

/// Achsenparalleles Rechteck im Plan-Koordinatensystem (x/y = linke obere Ecke).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlanRect {
    /// Erstellt ein Rechteck aus Position und Größe.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Linke obere Ecke
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Mittelpunkt des Rechtecks
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Erzwingt die Mindestgröße, ohne die Position zu verändern.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_ELEMENT_SIZE),
            height: self.height.max(MIN_ELEMENT_SIZE),
            ..self
        }
    }
}

/// Aggregierte Ausdehnung mehrerer Elemente.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl PlanBounds {
    /// Mittelpunkt der Bounding Box
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Vergrößert die Box auf allen Seiten um `margin` (z.B. Export-Rand).
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

/// Rechnet eine Screen-Position (relativ zur Canvas) in Plan-Koordinaten um.
pub fn to_plan(screen: Vec2, offset: Vec2, zoom: f32) -> Vec2 {
    (screen - offset) / zoom
}

/// Exakte Umkehrung von [`to_plan`].
pub fn to_screen(plan: Vec2, offset: Vec2, zoom: f32) -> Vec2 {
    plan * zoom + offset
}

/// Rastet einen Wert auf das nächste Vielfache von `grid` ein.
///
/// Ein nicht-positives Raster lässt den Wert unverändert.
pub fn snap(value: f32, grid: f32) -> f32 {
    if grid <= 0.0 || !grid.is_finite() {
        return value;
    }
    (value / grid).round() * grid
}

/// Rastet beide Achsen unabhängig voneinander ein.
pub fn snap_point(point: Vec2, grid: f32) -> Vec2 {
    Vec2::new(snap(point.x, grid), snap(point.y, grid))
}

/// Rastet einen Winkel (Grad) auf 15°-Schritte ein.
pub fn snap_angle(degrees: f32) -> f32 {
    snap(degrees, ROTATION_SNAP_STEP)
}

/// Winkel (Grad) vom Mittelpunkt zum Zeiger, `atan2`-Konvention.
pub fn angle_towards(center: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - center;
    d.y.atan2(d.x).to_degrees()
}

/// Bounding Box über alle Element-Rechtecke. Leere Menge → alles 0.
pub fn bounding_box<'a, I>(elements: I) -> PlanBounds
where
    I: IntoIterator<Item = &'a Element>,
{
    let mut iter = elements.into_iter();
    let Some(first) = iter.next() else {
        return PlanBounds::default();
    };

    let r = first.rect();
    let mut bounds = PlanBounds {
        min_x: r.left(),
        min_y: r.top(),
        max_x: r.right(),
        max_y: r.bottom(),
    };

    for element in iter {
        let r = element.rect();
        bounds.min_x = bounds.min_x.min(r.left());
        bounds.min_y = bounds.min_y.min(r.top());
        bounds.max_x = bounds.max_x.max(r.right());
        bounds.max_y = bounds.max_y.max(r.bottom());
    }

    bounds
}

/// Prüft, ob eine Tür an einer Wand "lehnt".
///
/// Eine Kante der Tür muss innerhalb von [`DOOR_WALL_TOLERANCE`] an einer
/// Wandkante liegen, und beide Rechtecke müssen sich entlang der
/// senkrechten Achse überlappen.
pub fn door_touches_wall(door: PlanRect, wall: PlanRect) -> bool {
    let touches_horizontally = (door.right() - wall.left()).abs() <= DOOR_WALL_TOLERANCE
        || (door.left() - wall.right()).abs() <= DOOR_WALL_TOLERANCE;
    let touches_vertically = (door.bottom() - wall.top()).abs() <= DOOR_WALL_TOLERANCE
        || (door.top() - wall.bottom()).abs() <= DOOR_WALL_TOLERANCE;

    let overlaps_horizontally = door.left() < wall.right() && door.right() > wall.left();
    let overlaps_vertically = door.top() < wall.bottom() && door.bottom() > wall.top();

    (touches_horizontally && overlaps_vertically) || (touches_vertically && overlaps_horizontally)
}

/// Prüft, ob ein Fenster vollständig innerhalb einer Wand liegt.
pub fn window_fits_wall(window: PlanRect, wall: PlanRect) -> bool {
    window.left() >= wall.left()
        && window.right() <= wall.right()
        && window.top() >= wall.top()
        && window.bottom() <= wall.bottom()
}

/// Tür-Prädikat gegen alle Wände des Plans.
pub fn door_has_adjacent_wall<'a, I>(door: PlanRect, elements: I) -> bool
where
    I: IntoIterator<Item = &'a Element>,
{
    elements
        .into_iter()
        .filter(|el| el.kind == ElementKind::Wall)
        .any(|wall| door_touches_wall(door, wall.rect()))
}

/// Erste Wand (in Planreihenfolge), die das Fenster vollständig enthält.
pub fn find_parent_wall<'a, I>(window: PlanRect, elements: I) -> Option<&'a Element>
where
    I: IntoIterator<Item = &'a Element>,
{
    elements
        .into_iter()
        .filter(|el| el.kind == ElementKind::Wall)
        .find(|wall| window_fits_wall(window, wall.rect()))
}

/// Standard-Abstand eines Fensters zur Wandober- und -unterkante.
pub fn default_window_distance(wall_depth: f32) -> f32 {
    (wall_depth * WINDOW_DISTANCE_RATIO).min(WINDOW_DISTANCE_MAX)
}

/// Wendet einen Resize-Zug auf ein Rechteck an.
///
/// Rechts/unten ändern nur die Größe. Links/oben verschieben zusätzlich die
/// Position, sodass die gegenüberliegende Kante fest bleibt. Mit Raster wird
/// der absolute Wert nach dem Delta eingerastet. Unterschreitet das Ergebnis
/// [`MIN_ELEMENT_SIZE`], wird geklemmt und die feste Kante beibehalten.
pub fn resize_rect(rect: PlanRect, handle: ResizeHandle, delta: Vec2, grid: Option<f32>) -> PlanRect {
    let snap_opt = |v: f32| grid.map_or(v, |g| snap(v, g));
    let mut out = rect;

    if handle.moves_right() {
        out.width = snap_opt(rect.width + delta.x);
    } else if handle.moves_left() {
        out.x = snap_opt(rect.x + delta.x);
        out.width = rect.right() - out.x;
    }
    if out.width < MIN_ELEMENT_SIZE {
        out.width = MIN_ELEMENT_SIZE;
        if handle.moves_left() {
            out.x = rect.right() - MIN_ELEMENT_SIZE;
        }
    }

    if handle.moves_bottom() {
        out.height = snap_opt(rect.height + delta.y);
    } else if handle.moves_top() {
        out.y = snap_opt(rect.y + delta.y);
        out.height = rect.bottom() - out.y;
    }
    if out.height < MIN_ELEMENT_SIZE {
        out.height = MIN_ELEMENT_SIZE;
        if handle.moves_top() {
            out.y = rect.bottom() - MIN_ELEMENT_SIZE;
        }
    }

    out
}

/// Vertikale Öffnung eines Fensters in seiner Wand (für die 3D-Ansicht).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOpening {
    /// Glashöhe = Wandhöhe − oberer − unterer Abstand
    pub height: f32,
    /// Höhe der Fenstermitte über dem Boden
    pub center_elevation: f32,
}

/// Berechnet die Fensteröffnung aus den Abständen zur Elternwand.
///
/// `None`, wenn das Fenster keine Abstände trägt.
pub fn window_opening(window: &Element, wall: &Element) -> Option<WindowOpening> {
    let top = window.window_top_distance?;
    let bottom = window.window_bottom_distance?;
    let height = wall.depth - top - bottom;
    Some(WindowOpening {
        height,
        center_elevation: bottom + height / 2.0,
    })
}
