//! Resize-Griffe an den Kanten und Ecken eines Elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Einer der acht Resize-Griffe (Himmelsrichtungen aus left/right/top/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Alle Griffe in Zeichenreihenfolge
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
        ResizeHandle::Top,
        ResizeHandle::Bottom,
        ResizeHandle::Left,
        ResizeHandle::Right,
    ];

    pub fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    pub fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    /// Bezeichner wie im Import-/Host-Format (`"top-left"`, …)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unbekannter Resize-Griff: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_handles_move_two_edges() {
        assert!(ResizeHandle::TopLeft.moves_top() && ResizeHandle::TopLeft.moves_left());
        assert!(!ResizeHandle::TopLeft.moves_right());
        assert!(ResizeHandle::BottomRight.moves_bottom() && ResizeHandle::BottomRight.moves_right());
    }

    #[test]
    fn test_edge_handles_move_one_edge() {
        let r = ResizeHandle::Right;
        assert!(r.moves_right() && !r.moves_left() && !r.moves_top() && !r.moves_bottom());
    }

    #[test]
    fn test_parse_handle_names() {
        for handle in ResizeHandle::ALL {
            assert_eq!(handle.as_str().parse::<ResizeHandle>().unwrap(), handle);
        }
        assert!("middle".parse::<ResizeHandle>().is_err());
    }
}
