//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Mutierende Use-Cases liefern den Sync-Command für die 3D-Ansicht zurück;
//! der Handler reicht ihn an die Bridge weiter.

pub mod editing;
pub mod file_io;
pub mod manipulate;
pub mod placement;
pub mod viewport;
