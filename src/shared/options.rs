//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rasterweite in Planeinheiten.
pub const GRID_SIZE: f32 = 20.0;

// ── Viewport ────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 3.0;
/// Zoom-Schritt bei Buttons / Shortcuts.
pub const ZOOM_STEP: f32 = 0.1;

// ── Export ──────────────────────────────────────────────────────────

/// Rand um die Bounding Box beim Export (Planeinheiten).
pub const EXPORT_MARGIN: f32 = 50.0;
/// Maximale Anzahl Legendenzeilen im Export.
pub const LEGEND_MAX_LINES: usize = 15;

// ── Einheiten ───────────────────────────────────────────────────────

/// Anzeigeeinheit für Maße.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Meter
    M,
    /// Zentimeter
    #[default]
    Cm,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floor_plan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Positionen und Größen am Raster einrasten
    pub snap_to_grid: bool,
    /// Rasterweite in Planeinheiten
    pub grid_size: f32,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Einheit für Maßangaben
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Maße an Elementen anzeigen
    #[serde(default = "default_show_dimensions")]
    pub show_dimensions: bool,

    // ── Viewport ────────────────────────────────────────────────
    #[serde(default = "default_zoom_min")]
    pub zoom_min: f32,
    #[serde(default = "default_zoom_max")]
    pub zoom_max: f32,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            grid_size: GRID_SIZE,
            unit_system: UnitSystem::Cm,
            show_dimensions: true,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
        }
    }
}

/// Serde-Default für `show_dimensions` (Abwärtskompatibilität).
fn default_show_dimensions() -> bool {
    true
}

fn default_zoom_min() -> f32 {
    ZOOM_MIN
}

fn default_zoom_max() -> f32 {
    ZOOM_MAX
}

fn default_zoom_step() -> f32 {
    ZOOM_STEP
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floor-plan-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floor_plan_editor.toml")
    }

    /// Aktives Raster, `None` wenn Snapping aus ist.
    pub fn grid(&self) -> Option<f32> {
        (self.snap_to_grid && self.grid_size > 0.0).then_some(self.grid_size)
    }
}
