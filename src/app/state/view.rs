use crate::core::Viewport;
use crate::shared::ViewMode;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom der 2D-Canvas
    pub viewport: Viewport,
    /// Aktuelle Canvas-Größe in Pixel
    pub canvas_size: [f32; 2],
    /// 2D- oder 3D-Ansicht
    pub view_mode: ViewMode,
    /// Mitte der Element-Bounding-Box (nach strukturellen Änderungen neu berechnet)
    pub plan_center: Vec2,
    /// Verschiebe-Modus: jeder Pointer-Down startet ein Pan
    pub move_mode: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
            canvas_size: [0.0, 0.0],
            view_mode: ViewMode::TwoD,
            plan_center: Vec2::ZERO,
            move_mode: false,
        }
    }

    /// Canvas-Größe als Vektor
    pub fn canvas_vec(&self) -> Vec2 {
        Vec2::from(self.canvas_size)
    }
}
