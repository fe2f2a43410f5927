//! Grundriss-Editor Library.
//! Core-Funktionalität als Library exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod input;
pub mod shared;
pub mod sync;

pub use app::use_cases::file_io::{export_json, parse_elements};
pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionMode, UiState, ViewState};
pub use core::{Element, ElementId, ElementKind, ElementStore, GhostElement, ResizeHandle, Viewport};
pub use core::{PlanBounds, PlanRect};
pub use input::{EventRouter, HitTarget, Key, ListenerHost, ListenerKind, RawEvent};
pub use shared::{EditorOptions, PlanScene, UnitSystem, ViewMode};
pub use sync::{RecordingScene, Scene3D, SceneCommand, SyncBridge};
