use crate::data::{Locale, PickerSettings};
use crate::error::FormatError;
use crate::format::date::{format_short, parse_iso};
use crate::widget::calendar_picker::{CalendarCell, CalendarPicker};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{self, Write};

pub fn run(month: Option<&str>, min_date: Option<&str>) -> Result<()> {
    let settings = PickerSettings::load_validated()?;
    let today = Local::now().date_naive();
    let view = match month {
        Some(raw) => Some(parse_month(raw).with_context(|| format!("invalid month '{raw}'"))?),
        None => None,
    };
    let min_date = match min_date {
        Some(raw) => Some(parse_date(raw).with_context(|| format!("invalid --min-date '{raw}'"))?),
        None => None,
    };
    let mut out = io::stdout().lock();
    write_calendar(&mut out, today, view, min_date, &settings.locale)
}

/// `YYYY-MM` → first day of that month.
fn parse_month(raw: &str) -> Result<NaiveDate, FormatError> {
    parse_date(&format!("{}-01", raw.trim()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormatError> {
    let value = parse_iso(raw)?;
    value.to_naive().ok_or(FormatError::InvalidDate {
        year: value.year,
        month: value.month,
        day: value.day,
    })
}

/// Prints the Monday-first grid of `view` (today's month when absent). Today is
/// bracketed and days before `min_date` are shown as `--`.
pub(crate) fn write_calendar<W: Write>(
    out: &mut W,
    today: NaiveDate,
    view: Option<NaiveDate>,
    min_date: Option<NaiveDate>,
    locale: &Locale,
) -> Result<()> {
    let picker = CalendarPicker::new(today, view, min_date, locale);
    writeln!(out, "{:^28}", picker.title(locale))?;
    let header: Vec<String> = (0..7)
        .map(|i| format!("{:>3} ", locale.weekday_initial(i)))
        .collect();
    writeln!(out, "{}", header.concat().trim_end())?;
    for week in picker.cells(None).chunks(7) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Empty => "    ".to_string(),
                CalendarCell::Day(day) if day.is_disabled => " -- ".to_string(),
                CalendarCell::Day(day) if day.is_today => format!("[{:>2}]", day.day),
                CalendarCell::Day(day) => format!(" {:>2} ", day.day),
            })
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    let shortcuts: Vec<String> = picker
        .shortcuts()
        .iter()
        .map(|s| format!("{}: {}", s.label, format_short(s.date, locale)))
        .collect();
    writeln!(out)?;
    writeln!(out, "{}", shortcuts.join("  |  "))?;
    Ok(())
}
