//! 2D-Viewport für Pan und Zoom über der Zeichenfläche.

use super::geometry::{to_plan, to_screen};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport mit Pan-Offset (Screen-Pixel) und Zoom.
///
/// `screen = plan * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Verschiebung des Plan-Ursprungs in Screen-Pixeln
    pub offset: Vec2,
    /// Zoom-Level (1.0 = normal)
    pub zoom: f32,
}

impl Viewport {
    /// Erstellt einen Viewport ohne Verschiebung bei Zoom 1.0
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Screen-Position (relativ zur Canvas) → Plan-Koordinaten
    pub fn screen_to_plan(&self, screen: Vec2) -> Vec2 {
        to_plan(screen, self.offset, self.zoom)
    }

    /// Plan-Koordinaten → Screen-Position
    pub fn plan_to_screen(&self, plan: Vec2) -> Vec2 {
        to_screen(plan, self.offset, self.zoom)
    }

    /// Verschiebt die Ansicht um ein Screen-Delta (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Ändert den Zoom additiv und klemmt auf `[min, max]`.
    pub fn zoom_by_step_clamped(&mut self, step: f32, min: f32, max: f32) {
        self.zoom = (self.zoom + step).clamp(min, max);
    }

    /// Setzt den Offset so, dass `plan_point` in der Mitte der Canvas liegt.
    pub fn center_on(&mut self, plan_point: Vec2, canvas_size: Vec2) {
        self.offset = canvas_size / 2.0 - plan_point * self.zoom;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
