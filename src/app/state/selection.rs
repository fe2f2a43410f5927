use crate::core::ElementId;

/// Auswahlbezogener Anwendungszustand (Einfachauswahl)
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// ID des selektierten Elements
    pub selected: Option<ElementId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}
