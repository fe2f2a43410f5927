//! Ansichtsmodus des Editors (shared zwischen App und Exportern).

/// 2D-Grundriss oder 3D-Ansicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Grundriss-Canvas (Standard)
    #[default]
    TwoD,
    /// 3D-Ansicht über den angebundenen Kollaborateur
    ThreeD,
}

impl ViewMode {
    /// Kurzbezeichner (`"2d"` / `"3d"`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoD => "2d",
            Self::ThreeD => "3d",
        }
    }
}
