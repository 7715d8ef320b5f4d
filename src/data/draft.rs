use crate::data::persistence::{FileFormat, Persistable};
use crate::data::{Location, RecurrenceRule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The host form's state: every widget reads its current value from here and the
/// form writes back whatever the widget returns. Stored as draft.json.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FormDraft {
    /// `YYYY-MM-DD`, edited with the ISO date wheels.
    pub tournament_date: String,
    /// `DD/MM/YYYY`, edited with the French date wheels.
    pub birth_date: String,
    /// `HH:MM`, edited with the time wheels.
    pub start_time: String,
    /// Picked on the month calendar.
    pub session_date: Option<NaiveDate>,
    pub recurrence: RecurrenceRule,
    /// Value of the selected option wheel entry.
    pub surface: String,
    /// Selected contact ids.
    pub participants: Vec<String>,
    pub location: Option<Location>,
    pub amount: f64,
    pub match_count: i32,
    pub title: String,
    /// Titles committed earlier, newest first.
    pub recent_titles: Vec<String>,
    pub notes: String,
}

impl Persistable for FormDraft {
    fn filename() -> &'static str {
        "draft.json"
    }
    fn format() -> FileFormat {
        FileFormat::Json
    }
}
