//! Date codecs: the two wheel formats (`YYYY-MM-DD`, `DD/MM/YYYY`) and the prose
//! formats shown on cards and lists.

use crate::data::{DateValue, Locale};
use crate::error::FormatError;
use chrono::{Datelike, NaiveDate};

pub const ISO_SEPARATOR: char = '-';
pub const FRENCH_SEPARATOR: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD/MM/YYYY`
    French,
}

impl DateFormat {
    pub fn format(self, value: DateValue) -> String {
        match self {
            DateFormat::Iso => format_iso(value),
            DateFormat::French => format_french(value),
        }
    }

    pub fn parse(self, raw: &str) -> Result<DateValue, FormatError> {
        match self {
            DateFormat::Iso => parse_iso(raw),
            DateFormat::French => parse_french(raw),
        }
    }

    /// Lenient parse: empty input yields `fallback`; with the right shape each
    /// unparsable field is taken from `fallback`; any other shape yields `fallback`.
    /// The result is always clamped to a real date.
    pub fn parse_or(self, raw: &str, fallback: DateValue) -> DateValue {
        let raw = raw.trim();
        if raw.is_empty() || raw == "--" {
            return fallback;
        }
        let (sep, year_at, day_at) = match self {
            DateFormat::Iso => (ISO_SEPARATOR, 0, 2),
            DateFormat::French => (FRENCH_SEPARATOR, 2, 0),
        };
        let parts: Vec<&str> = raw.split(sep).collect();
        if parts.len() != 3 {
            return fallback;
        }
        // Years chrono cannot represent count as unparsable.
        let year = parts[year_at]
            .trim()
            .parse()
            .ok()
            .filter(|y| NaiveDate::from_ymd_opt(*y, 1, 1).is_some())
            .unwrap_or(fallback.year);
        let month = parts[1].trim().parse().unwrap_or(fallback.month);
        let day = parts[day_at].trim().parse().unwrap_or(fallback.day);
        DateValue::new(year, month, day)
    }
}

pub fn format_iso(value: DateValue) -> String {
    format!("{:04}-{:02}-{:02}", value.year, value.month, value.day)
}

pub fn format_french(value: DateValue) -> String {
    format!("{:02}/{:02}/{:04}", value.day, value.month, value.year)
}

pub fn parse_iso(raw: &str) -> Result<DateValue, FormatError> {
    let [year, month, day] = split3(raw, ISO_SEPARATOR)?;
    checked(raw, year, month, day)
}

pub fn parse_french(raw: &str) -> Result<DateValue, FormatError> {
    let [day, month, year] = split3(raw, FRENCH_SEPARATOR)?;
    checked(raw, year, month, day)
}

fn split3(raw: &str, sep: char) -> Result<[&str; 3], FormatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormatError::Empty);
    }
    let parts: Vec<&str> = raw.split(sep).collect();
    <[&str; 3]>::try_from(parts).map_err(|_| FormatError::MalformedDate(raw.to_string()))
}

fn checked(raw: &str, year: &str, month: &str, day: &str) -> Result<DateValue, FormatError> {
    let malformed = || FormatError::MalformedDate(raw.trim().to_string());
    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(DateValue::from_naive)
        .ok_or(FormatError::InvalidDate { year, month, day })
}

/// `5 mars 2025`
pub fn format_long(date: NaiveDate, locale: &Locale) -> String {
    format!(
        "{} {} {}",
        date.day(),
        locale.month_abbrev(date.month()),
        date.year()
    )
}

/// `5 mars`
pub fn format_short(date: NaiveDate, locale: &Locale) -> String {
    format!("{} {}", date.day(), locale.month_abbrev(date.month()))
}

/// `5 - 12 mars 2025`; only the end date carries month and year.
pub fn format_range(start: NaiveDate, end: NaiveDate, locale: &Locale) -> String {
    format!("{} - {}", start.day(), format_long(end, locale))
}

/// `mars 2025`
pub fn format_month_year(year: i32, month: u32, locale: &Locale) -> String {
    format!("{} {}", locale.month_name(month), year)
}

pub fn weekday_name(date: NaiveDate, locale: &Locale) -> &str {
    locale.weekday_name(date.weekday().num_days_from_monday() as u8)
}

/// Prose form of an ISO string, or the input unchanged when it does not parse.
pub fn describe_iso(raw: &str, locale: &Locale) -> String {
    match parse_iso(raw).ok().and_then(DateValue::to_naive) {
        Some(date) => format_long(date, locale),
        None => raw.to_string(),
    }
}

/// Whole days from `today` to `target`; negative when `target` is past.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// True when `deadline` is today or within `hours_threshold` hours of today.
pub fn is_deadline_soon(deadline: NaiveDate, today: NaiveDate, hours_threshold: u32) -> bool {
    let days = days_until(deadline, today);
    days >= 0 && days as f64 <= f64::from(hours_threshold) / 24.0
}

pub fn is_expired(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// A session within this many hours is flagged as coming up.
pub const SOON_HOURS: u32 = 48;

/// `12 mars 2025`, or the period up to `until` when a recurrence ends on a later
/// date, flagged once the last day is past or when the start is near.
pub fn describe_session(
    start: NaiveDate,
    until: Option<NaiveDate>,
    today: NaiveDate,
    locale: &Locale,
) -> String {
    let last = until.filter(|end| *end > start);
    let base = match last {
        Some(end) if (end.year(), end.month()) == (start.year(), start.month()) => {
            format_range(start, end, locale)
        }
        Some(end) => format!("{} - {}", format_long(start, locale), format_long(end, locale)),
        None => format_long(start, locale),
    };
    if is_expired(last.unwrap_or(start), today) {
        format!("{base} ({})", locale.past_label)
    } else if is_deadline_soon(start, today, SOON_HOURS) {
        format!("{base} ({})", locale.soon_label)
    } else {
        base
    }
}
