use crate::data::{Contact, Locale};
use tracing::debug;

/// Multi-select over a contact list. Selection is a list of contact ids owned
/// by the host.
#[derive(Debug, Clone)]
pub struct ContactPicker {
    contacts: Vec<Contact>,
}

impl ContactPicker {
    pub fn new(contacts: Vec<Contact>) -> Self {
        ContactPicker { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_selected(selected: &[String], id: &str) -> bool {
        selected.iter().any(|s| s == id)
    }

    /// Adds or removes `id`. Unknown ids leave the selection unchanged.
    pub fn toggle(&self, selected: &[String], id: &str) -> Option<Vec<String>> {
        if !self.contacts.iter().any(|c| c.id == id) {
            debug!(id, "toggle for unknown contact ignored");
            return None;
        }
        let next = if Self::is_selected(selected, id) {
            selected.iter().filter(|s| *s != id).cloned().collect()
        } else {
            let mut next = selected.to_vec();
            next.push(id.to_string());
            next
        };
        Some(next)
    }

    /// Selected contacts in list order.
    pub fn selected_contacts<'a>(&'a self, selected: &[String]) -> Vec<&'a Contact> {
        self.contacts
            .iter()
            .filter(|c| Self::is_selected(selected, &c.id))
            .collect()
    }
}

/// "1 participant sélectionné", "3 participants sélectionnés"; empty when none.
pub fn counter_text(count: usize, locale: &Locale) -> String {
    match count {
        0 => String::new(),
        1 => format!("1 {}", locale.participant_singular),
        n => format!("{n} {}", locale.participant_plural),
    }
}
