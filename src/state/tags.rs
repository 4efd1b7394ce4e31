// Tag selection state.
// Tracks selected descriptive tags and the joined field submitted with the form.

/// Selectable descriptive tags with a keyboard cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelector {
    available: Vec<String>,
    /// Selected tags in the order they were (re-)selected.
    selected: Vec<String>,
    cursor: usize,
}

impl TagSelector {
    pub fn new(available: Vec<String>) -> Self {
        Self {
            available,
            selected: Vec::new(),
            cursor: 0,
        }
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Flip a tag's membership. Unknown tags are ignored.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if !self.available.iter().any(|t| t == tag) {
            return false;
        }

        if self.is_selected(tag) {
            self.selected.retain(|t| t != tag);
            false
        } else {
            self.selected.push(tag.to_string());
            true
        }
    }

    /// The submittable field: selected tags joined with ", ".
    pub fn field(&self) -> String {
        self.selected.join(", ")
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_tag(&self) -> Option<&str> {
        self.available.get(self.cursor).map(String::as_str)
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.available.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
