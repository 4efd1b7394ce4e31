// Review editor state.
// Toggles the generated review between read-only display and in-place editing.

use super::form::{TextEdit, TextField};

/// Which surface owns the review text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Generated review text plus an optional in-progress draft.
///
/// While editing, the draft is the only writable copy; the saved content is
/// not touched until the toggle copies the draft back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewEditor {
    content: String,
    draft: Option<TextField>,
}

impl ReviewEditor {
    /// Replace the content with freshly generated text and go back to viewing.
    pub fn load(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.draft = None;
    }

    /// Saved review text, as shown by the read-only display.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_ref().map(TextField::value)
    }

    pub fn mode(&self) -> EditMode {
        if self.draft.is_some() {
            EditMode::Editing
        } else {
            EditMode::Viewing
        }
    }

    /// Switch between viewing and editing, returning the new mode.
    pub fn toggle(&mut self) -> EditMode {
        match self.draft.take() {
            Some(draft) => {
                self.content = draft.value().to_string();
                EditMode::Viewing
            }
            None => {
                let mut draft = TextField::default();
                draft.set(self.content.clone());
                self.draft = Some(draft);
                EditMode::Editing
            }
        }
    }

    /// Apply a keystroke to the draft. Ignored while viewing.
    pub fn edit(&mut self, edit: TextEdit) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Label of the toggle control for the current mode.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode() {
            EditMode::Viewing => "Edit Review",
            EditMode::Editing => "Save Changes",
        }
    }
}
