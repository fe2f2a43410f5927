//! Core-Domänentypen: Elemente, Element-Store, Geometrie, Viewport.

pub mod element;
pub mod element_store;
/// Reine Geometrie ohne Zustand
///
/// Koordinaten-Umrechnung, Snapping, Bounding Box, Resize-Arithmetik
/// und die Wand-Prädikate für Türen und Fenster.
pub mod geometry;
pub mod handle;
pub mod viewport;

pub use element::{Dimensions, Element, ElementId, ElementKind, GhostElement, GENERIC_DIMENSIONS};
pub use element_store::ElementStore;
pub use geometry::{PlanBounds, PlanRect, WindowOpening, MIN_ELEMENT_SIZE};
pub use handle::ResizeHandle;
pub use viewport::Viewport;
