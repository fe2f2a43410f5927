//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion; Handler
//! reichen die Sync-Commands der Use-Cases an die Bridge weiter.

pub mod editing;
pub mod file_io;
pub mod interaction;
pub mod options;
pub mod view;
