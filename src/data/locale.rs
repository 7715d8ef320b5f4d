use serde::{Deserialize, Serialize};

/// Display labels handed to the formatters and widgets. Defaults are French,
/// matching the app's audience; every list is overridable from config.yaml.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Locale {
    /// Full month names, lowercase ("mars 2025").
    pub month_names: Vec<String>,
    /// Abbreviated month names used in prose dates ("5 mars 2025").
    pub month_abbrevs: Vec<String>,
    /// Short month labels shown on the month wheel.
    pub wheel_months: Vec<String>,
    /// Weekday names, Monday first.
    pub weekday_names: Vec<String>,
    /// One-letter weekday headers, Monday first.
    pub weekday_initials: Vec<String>,
    pub recurrence_none: String,
    pub recurrence_daily: String,
    pub recurrence_weekly: String,
    pub recurrence_monthly: String,
    /// Prefix for the weekly description ("Tous les lundi et mardi").
    pub every_prefix: String,
    /// Joins weekday names in the weekly description.
    pub list_joiner: String,
    pub never_label: String,
    pub times_suffix: String,
    pub today_label: String,
    pub tomorrow_label: String,
    pub weekend_label: String,
    pub next_week_label: String,
    pub now_label: String,
    pub in_one_hour_label: String,
    pub tonight_label: String,
    pub current_position_label: String,
    pub participant_singular: String,
    pub participant_plural: String,
    /// Flags on the session line.
    pub past_label: String,
    pub soon_label: String,
    /// Notes counter ("42 caractères").
    pub characters_suffix: String,
    pub recent_label: String,
    pub templates_label: String,
    pub free_note_label: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            month_names: strings(&[
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ]),
            month_abbrevs: strings(&[
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.",
                "oct.", "nov.", "déc.",
            ]),
            wheel_months: strings(&[
                "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov",
                "Déc",
            ]),
            weekday_names: strings(&[
                "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
            ]),
            weekday_initials: strings(&["L", "M", "M", "J", "V", "S", "D"]),
            recurrence_none: "Ne pas répéter".to_string(),
            recurrence_daily: "Tous les jours".to_string(),
            recurrence_weekly: "Toutes les semaines".to_string(),
            recurrence_monthly: "Tous les mois".to_string(),
            every_prefix: "Tous les".to_string(),
            list_joiner: " et ".to_string(),
            never_label: "Jamais".to_string(),
            times_suffix: "fois".to_string(),
            today_label: "Aujourd'hui".to_string(),
            tomorrow_label: "Demain".to_string(),
            weekend_label: "Ce week-end".to_string(),
            next_week_label: "Dans 1 semaine".to_string(),
            now_label: "Maintenant".to_string(),
            in_one_hour_label: "Dans 1h".to_string(),
            tonight_label: "Ce soir".to_string(),
            current_position_label: "Ma position actuelle".to_string(),
            participant_singular: "participant sélectionné".to_string(),
            participant_plural: "participants sélectionnés".to_string(),
            past_label: "passée".to_string(),
            soon_label: "bientôt".to_string(),
            characters_suffix: "caractères".to_string(),
            recent_label: "Récents".to_string(),
            templates_label: "Templates".to_string(),
            free_note_label: "Note libre...".to_string(),
        }
    }
}

impl Locale {
    /// Month label for 1-based `month`, or "?" when the table is short.
    pub fn month_name(&self, month: u32) -> &str {
        label_at(&self.month_names, month as usize)
    }

    pub fn month_abbrev(&self, month: u32) -> &str {
        label_at(&self.month_abbrevs, month as usize)
    }

    pub fn wheel_month(&self, month: u32) -> &str {
        label_at(&self.wheel_months, month as usize)
    }

    /// Weekday name for a Monday-first index (0 = Monday).
    pub fn weekday_name(&self, index: u8) -> &str {
        label_at(&self.weekday_names, index as usize + 1)
    }

    pub fn weekday_initial(&self, index: u8) -> &str {
        label_at(&self.weekday_initials, index as usize + 1)
    }
}

fn label_at(table: &[String], one_based: usize) -> &str {
    one_based
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .map(String::as_str)
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_complete() {
        let l = Locale::default();
        assert_eq!(l.month_names.len(), 12);
        assert_eq!(l.month_abbrevs.len(), 12);
        assert_eq!(l.wheel_months.len(), 12);
        assert_eq!(l.weekday_names.len(), 7);
        assert_eq!(l.weekday_initials.len(), 7);
    }

    #[test]
    fn test_month_lookup_is_one_based() {
        let l = Locale::default();
        assert_eq!(l.month_name(3), "mars");
        assert_eq!(l.month_abbrev(1), "janv.");
        assert_eq!(l.wheel_month(12), "Déc");
    }

    #[test]
    fn test_out_of_range_lookup_is_placeholder() {
        let l = Locale::default();
        assert_eq!(l.month_name(0), "?");
        assert_eq!(l.month_name(13), "?");
        assert_eq!(l.weekday_name(7), "?");
    }

    #[test]
    fn test_weekday_lookup_is_monday_first() {
        let l = Locale::default();
        assert_eq!(l.weekday_name(0), "lundi");
        assert_eq!(l.weekday_initial(6), "D");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "today_label: Today\n";
        let l: Locale = serde_norway::from_str(yaml).unwrap();
        assert_eq!(l.today_label, "Today");
        assert_eq!(l.tomorrow_label, "Demain");
    }
}
