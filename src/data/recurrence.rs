use crate::error::FormatError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceKind {
    pub const ALL: [RecurrenceKind; 4] = [
        RecurrenceKind::None,
        RecurrenceKind::Daily,
        RecurrenceKind::Weekly,
        RecurrenceKind::Monthly,
    ];
}

/// When a recurring event stops. Count and date are exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecurrenceEnd {
    #[default]
    Never,
    After(u32),
    On(NaiveDate),
}

/// How an event repeats. `week_days` holds Monday-first indices (0 = Monday) and is
/// only present for weekly rules.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "RawRecurrence", into = "RawRecurrence")]
pub struct RecurrenceRule {
    pub kind: RecurrenceKind,
    pub week_days: Option<BTreeSet<u8>>,
    pub month_day: Option<u32>,
    pub end: RecurrenceEnd,
}

impl RecurrenceRule {
    pub fn weekly(days: impl IntoIterator<Item = u8>) -> Self {
        RecurrenceRule {
            kind: RecurrenceKind::Weekly,
            week_days: Some(days.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn end_after(&self) -> Option<u32> {
        match self.end {
            RecurrenceEnd::After(n) => Some(n),
            _ => None,
        }
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        match self.end {
            RecurrenceEnd::On(d) => Some(d),
            _ => None,
        }
    }

    pub fn has_week_day(&self, day: u8) -> bool {
        self.week_days.as_ref().is_some_and(|d| d.contains(&day))
    }
}

/// JSON shape shared with the backend: `{ type, weekDays?, monthDay?, endAfter?, endDate? }`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawRecurrence {
    #[serde(rename = "type")]
    kind: RecurrenceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    week_days: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    month_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl TryFrom<RawRecurrence> for RecurrenceRule {
    type Error = FormatError;

    fn try_from(raw: RawRecurrence) -> Result<Self, Self::Error> {
        let end = match (raw.end_after, raw.end_date) {
            (Some(_), Some(_)) => return Err(FormatError::ConflictingEnd),
            (Some(n), None) => RecurrenceEnd::After(n),
            (None, Some(d)) => RecurrenceEnd::On(d),
            (None, None) => RecurrenceEnd::Never,
        };
        if let Some(bad) = raw.week_days.iter().flatten().find(|d| **d > 6) {
            return Err(FormatError::WeekdayOutOfRange(*bad));
        }
        let week_days = match raw.kind {
            RecurrenceKind::Weekly => {
                let days: BTreeSet<u8> = raw.week_days.unwrap_or_default().into_iter().collect();
                if days.is_empty() {
                    return Err(FormatError::EmptyWeekDays);
                }
                Some(days)
            }
            // Stale weekday data on a non-weekly rule is dropped.
            _ => None,
        };
        Ok(RecurrenceRule {
            kind: raw.kind,
            week_days,
            month_day: raw.month_day,
            end,
        })
    }
}

impl From<RecurrenceRule> for RawRecurrence {
    fn from(rule: RecurrenceRule) -> Self {
        let end_after = rule.end_after();
        let end_date = rule.end_date();
        RawRecurrence {
            kind: rule.kind,
            week_days: rule.week_days.map(|d| d.into_iter().collect()),
            month_day: rule.month_day,
            end_after,
            end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_is_none_never() {
        let r = RecurrenceRule::default();
        assert_eq!(r.kind, RecurrenceKind::None);
        assert_eq!(r.end, RecurrenceEnd::Never);
        assert!(r.week_days.is_none());
    }

    #[test]
    fn test_weekly_json_shape() {
        let mut r = RecurrenceRule::weekly([2, 0]);
        r.end = RecurrenceEnd::After(10);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "weekly", "weekDays": [0, 2], "endAfter": 10 })
        );
    }

    #[test]
    fn test_end_date_serializes_as_iso() {
        let r = RecurrenceRule {
            kind: RecurrenceKind::Daily,
            end: RecurrenceEnd::On(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
            ..Default::default()
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"endDate\":\"2025-06-30\""));
        assert!(!json.contains("endAfter"));
    }

    #[test]
    fn test_rejects_both_end_conditions() {
        let err = serde_json::from_str::<RecurrenceRule>(
            r#"{"type":"daily","endAfter":5,"endDate":"2025-06-30"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("endAfter and endDate"));
    }

    #[test]
    fn test_rejects_weekly_without_days() {
        assert!(serde_json::from_str::<RecurrenceRule>(r#"{"type":"weekly"}"#).is_err());
        assert!(
            serde_json::from_str::<RecurrenceRule>(r#"{"type":"weekly","weekDays":[]}"#).is_err()
        );
    }

    #[test]
    fn test_rejects_weekday_out_of_range() {
        assert!(
            serde_json::from_str::<RecurrenceRule>(r#"{"type":"weekly","weekDays":[7]}"#).is_err()
        );
    }

    #[test]
    fn test_drops_week_days_on_non_weekly_rule() {
        let r: RecurrenceRule =
            serde_json::from_str(r#"{"type":"daily","weekDays":[1,2]}"#).unwrap();
        assert!(r.week_days.is_none());
    }

    #[test]
    fn test_has_week_day() {
        let r = RecurrenceRule::weekly([0, 4]);
        assert!(r.has_week_day(0));
        assert!(r.has_week_day(4));
        assert!(!r.has_week_day(1));
        assert!(!RecurrenceRule::default().has_week_day(0));
    }
}
