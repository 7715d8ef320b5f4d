use crate::data::{Locale, RecurrenceEnd, RecurrenceKind, RecurrenceRule};
use crate::format::date::format_long;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

/// Edits a [`RecurrenceRule`]. Every operation takes the host's current rule and
/// returns the rule to commit; the editor holds no selection of its own.
#[derive(Debug, Clone)]
pub struct RecurrenceEditor {
    end_after_choices: Vec<u32>,
}

impl RecurrenceEditor {
    pub fn new(end_after_choices: Vec<u32>) -> Self {
        RecurrenceEditor { end_after_choices }
    }

    pub fn end_after_choices(&self) -> &[u32] {
        &self.end_after_choices
    }

    /// Switching to weekly keeps the rule's own weekdays when it has some,
    /// otherwise seeds Monday.
    pub fn set_kind(&self, rule: &RecurrenceRule, kind: RecurrenceKind) -> RecurrenceRule {
        let mut next = rule.clone();
        next.kind = kind;
        next.week_days = match kind {
            RecurrenceKind::Weekly => Some(
                rule.week_days
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| BTreeSet::from([0])),
            ),
            _ => None,
        };
        if kind != RecurrenceKind::Monthly {
            next.month_day = None;
        }
        debug!(?kind, week_days = ?next.week_days, "recurrence kind set");
        next
    }

    /// Flips `day` (0 = Monday) in a weekly rule. Returns `None` when nothing
    /// changes: the rule is not weekly, the index is out of range, or the toggle
    /// would empty the set.
    pub fn toggle_day(&self, rule: &RecurrenceRule, day: u8) -> Option<RecurrenceRule> {
        if rule.kind != RecurrenceKind::Weekly || day > 6 {
            return None;
        }
        let mut days = rule.week_days.clone().unwrap_or_default();
        if days.contains(&day) {
            if days.len() == 1 {
                debug!(day, "refusing to clear the last weekday");
                return None;
            }
            days.remove(&day);
        } else {
            days.insert(day);
        }
        Some(RecurrenceRule {
            week_days: Some(days),
            ..rule.clone()
        })
    }

    pub fn set_end_after(&self, rule: &RecurrenceRule, count: u32) -> RecurrenceRule {
        RecurrenceRule {
            end: RecurrenceEnd::After(count),
            ..rule.clone()
        }
    }

    pub fn set_end_date(&self, rule: &RecurrenceRule, date: NaiveDate) -> RecurrenceRule {
        RecurrenceRule {
            end: RecurrenceEnd::On(date),
            ..rule.clone()
        }
    }

    pub fn set_never_ends(&self, rule: &RecurrenceRule) -> RecurrenceRule {
        RecurrenceRule {
            end: RecurrenceEnd::Never,
            ..rule.clone()
        }
    }
}

pub fn kind_label(kind: RecurrenceKind, locale: &Locale) -> &str {
    match kind {
        RecurrenceKind::None => &locale.recurrence_none,
        RecurrenceKind::Daily => &locale.recurrence_daily,
        RecurrenceKind::Weekly => &locale.recurrence_weekly,
        RecurrenceKind::Monthly => &locale.recurrence_monthly,
    }
}

/// Short prose summary: "Tous les lundi et mercredi", "Tous les jours, 10 fois".
pub fn describe(rule: &RecurrenceRule, locale: &Locale) -> String {
    let head = match (rule.kind, rule.week_days.as_ref()) {
        (RecurrenceKind::Weekly, Some(days)) if !days.is_empty() => {
            let names: Vec<&str> = days.iter().map(|d| locale.weekday_name(*d)).collect();
            format!("{} {}", locale.every_prefix, join_names(&names, &locale.list_joiner))
        }
        (kind, _) => kind_label(kind, locale).to_string(),
    };
    if rule.kind == RecurrenceKind::None {
        return head;
    }
    match rule.end {
        RecurrenceEnd::Never => head,
        RecurrenceEnd::After(n) => format!("{head}, {n} {}", locale.times_suffix),
        RecurrenceEnd::On(date) => format!("{head}, {}", format_long(date, locale)),
    }
}

/// "a", "a et b", "a, b et c"
fn join_names(names: &[&str], joiner: &str) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{}{joiner}{last}", init.join(", ")),
    }
}
