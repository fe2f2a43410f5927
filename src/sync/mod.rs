//! Einseitige Synchronisation des Element-Stores zur 3D-Ansicht.
//!
//! Der Store ist die einzige Quelle der Wahrheit. Jede Mutation wird als
//! [`SceneCommand`] an einen optional angebundenen [`Scene3D`] gesendet;
//! zurück fließt nichts.

mod bridge;
mod scene;

pub use bridge::SyncBridge;
pub use scene::{RecordingScene, Scene3D, SceneCommand, SurfaceCapture};
