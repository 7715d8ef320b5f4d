use crate::calc::days_in_month;
use crate::data::{DateValue, Locale};
use crate::format::DateFormat;
use crate::widget::wheel::{numeric_items, ScrollEvent, WheelItem, WheelSelector};
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateColumn {
    Day,
    Month,
    Year,
}

impl DateColumn {
    pub const ORDER: [DateColumn; 3] = [DateColumn::Day, DateColumn::Month, DateColumn::Year];
}

/// Day / month / year wheels editing one date string. Every change produces a
/// complete, valid date in the picker's format.
#[derive(Debug, Clone)]
pub struct DatePicker {
    format: DateFormat,
    /// Stands in for empty or malformed input; captured at construction.
    fallback: DateValue,
    days: WheelSelector<u32>,
    months: WheelSelector<u32>,
    years: WheelSelector<i32>,
}

fn day_items(year: i32, month: u32) -> Vec<WheelItem<u32>> {
    numeric_items(1, days_in_month(year, month), 1)
}

impl DatePicker {
    pub fn new(
        format: DateFormat,
        min_year: i32,
        max_year: i32,
        locale: &Locale,
        today: NaiveDate,
    ) -> Self {
        let fallback = DateValue::from_naive(today);
        let months = (1..=12)
            .map(|m| WheelItem::new(locale.wheel_month(m), m))
            .collect();
        let years = (min_year..=max_year)
            .map(|y| WheelItem::new(y.to_string(), y))
            .collect();
        DatePicker {
            format,
            fallback,
            days: WheelSelector::new(day_items(fallback.year, fallback.month)),
            months: WheelSelector::new(months),
            years: WheelSelector::new(years),
        }
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// The date the wheels show for `raw`.
    pub fn value_of(&self, raw: &str) -> DateValue {
        self.format.parse_or(raw, self.fallback)
    }

    /// Points the three wheels at `raw`, regenerating the day list for its month.
    pub fn sync(&mut self, raw: &str) {
        let value = self.value_of(raw);
        let dim = value.days_in_month();
        if self.days.items().len() != dim as usize {
            self.days.set_items(day_items(value.year, value.month));
        }
        self.days.sync(&value.day.min(dim));
        self.months.sync(&value.month);
        self.years.sync(&value.year);
    }

    pub fn set_year(&self, raw: &str, year: i32) -> String {
        self.format.format(self.value_of(raw).with_year(year))
    }

    pub fn set_month(&self, raw: &str, month: u32) -> String {
        self.format.format(self.value_of(raw).with_month(month))
    }

    pub fn set_day(&self, raw: &str, day: u32) -> String {
        self.format.format(self.value_of(raw).with_day(day))
    }

    /// Routes a gesture to one wheel. Returns the new date string when that wheel
    /// commits a value.
    pub fn handle(&mut self, raw: &str, column: DateColumn, event: ScrollEvent) -> Option<String> {
        let next = match column {
            DateColumn::Day => {
                let day = self.days.handle(event).value?;
                self.set_day(raw, day)
            }
            DateColumn::Month => {
                let month = self.months.handle(event).value?;
                self.set_month(raw, month)
            }
            DateColumn::Year => {
                let year = self.years.handle(event).value?;
                self.set_year(raw, year)
            }
        };
        debug!(?column, from = raw, to = %next, "date picker change");
        Some(next)
    }

    /// Moves one wheel by `rows` (keyboard host). Returns the new date string.
    pub fn nudge(&mut self, raw: &str, column: DateColumn, rows: i32) -> Option<String> {
        let next = match column {
            DateColumn::Day => {
                let day = self.days.nudge(rows)?;
                self.set_day(raw, day)
            }
            DateColumn::Month => {
                let month = self.months.nudge(rows)?;
                self.set_month(raw, month)
            }
            DateColumn::Year => {
                let year = self.years.nudge(rows)?;
                self.set_year(raw, year)
            }
        };
        debug!(?column, rows, from = raw, to = %next, "date picker nudge");
        Some(next)
    }

    pub fn days(&self) -> &WheelSelector<u32> {
        &self.days
    }

    pub fn months(&self) -> &WheelSelector<u32> {
        &self.months
    }

    pub fn years(&self) -> &WheelSelector<i32> {
        &self.years
    }
}
