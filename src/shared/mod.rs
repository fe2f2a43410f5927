//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und Exportern bzw. dem 3D-Kollaborateur
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod plan_scene;
pub mod units;
mod view_mode;

pub use options::{EditorOptions, UnitSystem};
pub use options::{EXPORT_MARGIN, LEGEND_MAX_LINES};
pub use plan_scene::PlanScene;
pub use units::format_dimension;
pub use view_mode::ViewMode;
