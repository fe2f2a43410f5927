//! Formatierung von Planmaßen in der gewählten Einheit.

use super::options::UnitSystem;

/// Planeinheiten pro Meter (1 Planeinheit = 1 cm).
pub const PLAN_UNITS_PER_METER: f32 = 100.0;

/// Formatiert einen Planwert: Meter mit zwei Nachkommastellen, Zentimeter ganzzahlig.
pub fn format_dimension(value: f32, unit: UnitSystem) -> String {
    match unit {
        UnitSystem::M => format!("{:.2}m", value / PLAN_UNITS_PER_METER),
        UnitSystem::Cm => format!("{:.0}cm", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_meters() {
        assert_eq!(format_dimension(250.0, UnitSystem::M), "2.50m");
        assert_eq!(format_dimension(5.0, UnitSystem::M), "0.05m");
    }

    #[test]
    fn test_format_centimeters() {
        assert_eq!(format_dimension(250.0, UnitSystem::Cm), "250cm");
        assert_eq!(format_dimension(12.4, UnitSystem::Cm), "12cm");
    }
}
