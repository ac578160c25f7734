//! Single-line text input state shared by the login and register forms.

/// An editable line of text. `masked` fields display bullets instead of
/// their contents.
#[derive(Debug, Clone)]
pub struct TextField {
    pub value: String,
    pub masked: bool,
    pub max_len: usize,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TextField {
    pub fn new(masked: bool) -> Self {
        Self {
            value: String::new(),
            masked,
            max_len: 20,
        }
    }

    /// Appends a character, ignoring whitespace and control characters so
    /// values stay valid as single whitespace-separated tokens on disk.
    pub fn push(&mut self, c: char) {
        if c.is_whitespace() || c.is_control() {
            return;
        }
        if self.value.chars().count() < self.max_len {
            self.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// What the scene renders: the raw value, or one bullet per character.
    pub fn display(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
