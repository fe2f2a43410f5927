/// Art eines Hinweises an den Nutzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Tür/Fenster konnte nicht platziert werden
    PlacementRejected,
    /// Import-Datei war fehlerhaft
    ImportFailed,
    /// Allgemeine Information
    Info,
}

/// Ein vom Host anzuzeigender Hinweis.
#[derive(Debug, Clone, PartialEq)]
pub struct UserNotice {
    pub kind: NoticeKind,
    pub message: String,
}

impl UserNotice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Offener Hinweis (ersetzt den vorherigen)
    pub notice: Option<UserNotice>,
    /// Pfad des laufenden Imports; wird immer zurückgesetzt, damit dieselbe
    /// Datei erneut gewählt werden kann
    pub pending_import_path: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            notice: None,
            pending_import_path: None,
        }
    }

    /// Setzt einen Hinweis und loggt ihn.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let notice = UserNotice::new(kind, message);
        log::warn!("{}", notice.message);
        self.notice = Some(notice);
    }
}
