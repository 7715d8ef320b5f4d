use crate::data::{Locale, NoteTemplate};
use tracing::debug;

/// Multi-line session notes. An empty note offers templates; applying one
/// replaces the text with the template body.
#[derive(Debug, Clone)]
pub struct NotesInput {
    templates: Vec<NoteTemplate>,
}

impl NotesInput {
    /// Falls back to the stock templates when `templates` is empty.
    pub fn new(templates: Vec<NoteTemplate>) -> Self {
        let templates = if templates.is_empty() {
            NoteTemplate::defaults()
        } else {
            templates
        };
        NotesInput { templates }
    }

    pub fn templates(&self) -> &[NoteTemplate] {
        &self.templates
    }

    /// Templates are only offered while the note is empty.
    pub fn shows_templates(&self, value: &str) -> bool {
        value.is_empty()
    }

    pub fn apply_template(&self, index: usize) -> Option<String> {
        let template = self.templates.get(index)?;
        debug!(title = %template.title, "note template applied");
        Some(template.content.clone())
    }

    pub fn push_char(&self, value: &str, c: char) -> String {
        let mut next = value.to_string();
        next.push(c);
        next
    }

    pub fn backspace(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let mut next = value.to_string();
        next.pop();
        Some(next)
    }

    pub fn clear(&self) -> String {
        String::new()
    }
}

/// "42 caractères", counting characters rather than bytes.
pub fn counter_text(value: &str, locale: &Locale) -> String {
    format!("{} {}", value.chars().count(), locale.characters_suffix)
}

/// First non-blank line and the counter, or an empty string for an empty note.
pub fn summary(value: &str, locale: &Locale) -> String {
    if value.is_empty() {
        return String::new();
    }
    let first = value
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    if first.is_empty() {
        counter_text(value, locale)
    } else {
        format!("{first} ({})", counter_text(value, locale))
    }
}
