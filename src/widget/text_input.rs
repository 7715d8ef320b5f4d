use crate::data::TextTemplate;
use tracing::debug;

const MAX_SUGGESTIONS: usize = 5;
const MAX_RECENT: usize = 5;

/// Free-text field with suggestions, recent values and one-tap templates. The
/// text lives in the host; every edit returns the new text, or `None` when the
/// edit is refused.
#[derive(Debug, Clone)]
pub struct SmartTextInput {
    suggestions: Vec<String>,
    templates: Vec<TextTemplate>,
    max_length: Option<usize>,
}

/// What the list under the field offers for the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEntries<'a> {
    /// Text is empty: recent values first, then templates.
    Recent(Vec<&'a str>, &'a [TextTemplate]),
    /// Known values containing the text.
    Suggestions(Vec<&'a str>),
}

impl TextEntries<'_> {
    /// Entry texts in display order, as they would be committed.
    pub fn values(&self) -> Vec<&str> {
        match self {
            TextEntries::Recent(recent, templates) => recent
                .iter()
                .copied()
                .chain(templates.iter().map(|t| t.label.as_str()))
                .collect(),
            TextEntries::Suggestions(items) => items.clone(),
        }
    }
}

impl SmartTextInput {
    pub fn new(
        suggestions: Vec<String>,
        templates: Vec<TextTemplate>,
        max_length: Option<usize>,
    ) -> Self {
        SmartTextInput {
            suggestions,
            templates,
            max_length: max_length.filter(|n| *n > 0),
        }
    }

    pub fn templates(&self) -> &[TextTemplate] {
        &self.templates
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Cuts `raw` to the maximum length, counted in characters.
    pub fn edit(&self, raw: &str) -> String {
        match self.max_length {
            Some(max) if raw.chars().count() > max => raw.chars().take(max).collect(),
            _ => raw.to_string(),
        }
    }

    pub fn push_char(&self, value: &str, c: char) -> Option<String> {
        if self.max_length.is_some_and(|max| value.chars().count() >= max) {
            debug!(max = ?self.max_length, "text at maximum length");
            return None;
        }
        let mut next = value.to_string();
        next.push(c);
        Some(next)
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

    /// Known values containing `value`, ignoring case. Nothing for empty text.
    pub fn suggestions(&self, value: &str) -> Vec<&str> {
        if value.is_empty() {
            return Vec::new();
        }
        let needle = value.to_lowercase();
        self.suggestions
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }

    pub fn entries<'a>(&'a self, value: &str, recent: &'a [String]) -> TextEntries<'a> {
        if value.is_empty() {
            let recent = recent.iter().take(MAX_RECENT).map(String::as_str).collect();
            TextEntries::Recent(recent, &self.templates)
        } else {
            TextEntries::Suggestions(self.suggestions(value))
        }
    }

    /// The template's label as the new text.
    pub fn apply_template(&self, index: usize) -> Option<String> {
        self.templates.get(index).map(|t| self.edit(&t.label))
    }
}

/// Puts `value` at the front of `recent`, dropping duplicates and keeping the
/// newest five. Blank values leave the list unchanged.
pub fn remember(recent: &[String], value: &str) -> Vec<String> {
    let value = value.trim();
    if value.is_empty() {
        return recent.to_vec();
    }
    std::iter::once(value.to_string())
        .chain(recent.iter().filter(|r| r.as_str() != value).cloned())
        .take(MAX_RECENT)
        .collect()
}
