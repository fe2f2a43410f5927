//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use interaction::InteractionMode;
pub use selection::SelectionState;
pub use ui::{NoticeKind, UiState, UserNotice};
pub use view::ViewState;
