//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod plan_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand einer Editor-Sitzung
/// (Elemente, Viewport, Interaktionsmodus, Hinweise).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use plan_scene::build as build_plan_scene;
pub use state::{
    AppState, InteractionMode, NoticeKind, SelectionState, UiState, UserNotice, ViewState,
};
pub use use_cases::placement::PlacementRejection;
