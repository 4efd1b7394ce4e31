// Free-text form fields and the submitted form snapshot.
// The feedback field carries a live character-count readout.

use serde::Serialize;

/// A single keyboard edit applied to a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// Plain editable text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::Insert(c) => self.value.push(c),
            TextEdit::Backspace => {
                self.value.pop();
            }
            TextEdit::Clear => self.value.clear(),
        }
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

/// Free-text feedback with a display-only length budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackField {
    text: TextField,
    budget: usize,
}

impl FeedbackField {
    pub fn new(budget: usize) -> Self {
        Self {
            text: TextField::default(),
            budget,
        }
    }

    pub fn value(&self) -> &str {
        self.text.value()
    }

    /// Input past the budget is still accepted.
    pub fn apply(&mut self, edit: TextEdit) {
        self.text.apply(edit);
    }

    pub fn char_count(&self) -> usize {
        self.text.char_count()
    }

    /// Readout such as `42/280`.
    pub fn readout(&self) -> String {
        format!("{}/{}", self.char_count(), self.budget)
    }

    pub fn over_budget(&self) -> bool {
        self.char_count() > self.budget
    }
}

/// Everything posted to the generation endpoint, in its form field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub business_name: String,
    pub business_address: String,
    pub google_url: String,
    pub food_rating: u8,
    pub service_rating: u8,
    pub atmosphere_rating: u8,
    pub recommend_rating: u8,
    pub tags: String,
    pub feedback: String,
    pub customer_name: String,
}
