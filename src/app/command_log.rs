//! Verlauf der Editor-Commands einer Sitzung.
//!
//! Pointer-Updates (Ghost, Pan, Drag, Resize, Rotate) kommen bei jeder
//! Zeigerbewegung und landen nicht im Verlauf; Beginn und Ende einer
//! Interaktion schon.

use super::AppCommand;

/// Maximale Länge des Verlaufs; beim Überlauf fällt die ältere Hälfte weg.
const HISTORY_LIMIT: usize = 1000;

/// Begrenzter Verlauf der ausgeführten Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    skipped_updates: usize,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen ausgeführten Command in den Verlauf auf.
    pub fn record(&mut self, command: &AppCommand) {
        if is_pointer_update(command) {
            self.skipped_updates += 1;
            return;
        }
        if self.entries.len() >= HISTORY_LIMIT {
            self.entries.drain(..HISTORY_LIMIT / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl der verworfenen Pointer-Updates seit Sitzungsbeginn.
    pub fn skipped_updates(&self) -> usize {
        self.skipped_updates
    }

    /// Letzter Command, der den Planinhalt verändert hat.
    pub fn last_plan_edit(&self) -> Option<&AppCommand> {
        self.entries.iter().rev().find(|cmd| changes_plan(cmd))
    }
}

fn is_pointer_update(command: &AppCommand) -> bool {
    matches!(
        command,
        AppCommand::UpdatePlacementPreview { .. }
            | AppCommand::UpdatePan { .. }
            | AppCommand::UpdateDrag { .. }
            | AppCommand::UpdateResize { .. }
            | AppCommand::UpdateRotate { .. }
    )
}

fn changes_plan(command: &AppCommand) -> bool {
    matches!(
        command,
        AppCommand::PlaceElement { .. }
            | AppCommand::BeginDrag { .. }
            | AppCommand::BeginResize { .. }
            | AppCommand::BeginRotate { .. }
            | AppCommand::DeleteSelected
            | AppCommand::ImportFromFile { .. }
            | AppCommand::ImportFromJson { .. }
            | AppCommand::RenameElement { .. }
            | AppCommand::ResizeElement { .. }
            | AppCommand::SetElementDepth { .. }
            | AppCommand::SetWindowDistances { .. }
    )
}
