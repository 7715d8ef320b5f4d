use crate::data::{Locale, MinuteRounding, TimeValue};
use crate::format::{format_time, parse_time_or_default};
use crate::widget::wheel::{numeric_items, ScrollEvent, WheelSelector};
use chrono::{NaiveTime, Timelike};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    Hour,
    Minute,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeShortcut {
    pub label: String,
    pub value: TimeValue,
}

/// Hour and minute wheels editing an `HH:MM` string. The axes are independent:
/// changing one keeps the caller's value on the other.
#[derive(Debug, Clone)]
pub struct TimePicker {
    step: u32,
    rounding: MinuteRounding,
    hours: WheelSelector<u32>,
    minutes: WheelSelector<u32>,
}

impl TimePicker {
    /// `step` must divide 60; settings validation guarantees it for configured steps.
    pub fn new(step: u32, rounding: MinuteRounding) -> Self {
        let step = if step == 0 || 60 % step != 0 { 5 } else { step };
        TimePicker {
            step,
            rounding,
            hours: WheelSelector::new(numeric_items(0, 23, 1)),
            minutes: WheelSelector::new(numeric_items(0, 59, step)),
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// What the wheels show for `raw`: the minute is step-aligned for display only.
    pub fn displayed(&self, raw: &str) -> TimeValue {
        let value = parse_time_or_default(raw);
        TimeValue {
            hour: value.hour,
            minute: self.rounding.align(value.minute, self.step),
        }
    }

    pub fn sync(&mut self, raw: &str) {
        let shown = self.displayed(raw);
        self.hours.sync(&shown.hour);
        self.minutes.sync(&shown.minute);
    }

    pub fn set_hour(&self, raw: &str, hour: u32) -> String {
        format_time(parse_time_or_default(raw).with_hour(hour))
    }

    pub fn set_minute(&self, raw: &str, minute: u32) -> String {
        format_time(parse_time_or_default(raw).with_minute(minute))
    }

    pub fn handle(&mut self, raw: &str, column: TimeColumn, event: ScrollEvent) -> Option<String> {
        let next = match column {
            TimeColumn::Hour => {
                let hour = self.hours.handle(event).value?;
                self.set_hour(raw, hour)
            }
            TimeColumn::Minute => {
                let minute = self.minutes.handle(event).value?;
                self.set_minute(raw, minute)
            }
        };
        debug!(?column, from = raw, to = %next, "time picker change");
        Some(next)
    }

    pub fn nudge(&mut self, raw: &str, column: TimeColumn, rows: i32) -> Option<String> {
        match column {
            TimeColumn::Hour => {
                let hour = self.hours.nudge(rows)?;
                Some(self.set_hour(raw, hour))
            }
            TimeColumn::Minute => {
                let minute = self.minutes.nudge(rows)?;
                Some(self.set_minute(raw, minute))
            }
        }
    }

    /// One-tap times: now (step-aligned), in one hour, tonight.
    pub fn shortcuts(&self, now: NaiveTime, locale: &Locale) -> Vec<TimeShortcut> {
        vec![
            TimeShortcut {
                label: locale.now_label.clone(),
                value: TimeValue::new(now.hour(), self.rounding.align(now.minute(), self.step)),
            },
            TimeShortcut {
                label: locale.in_one_hour_label.clone(),
                value: TimeValue::new((now.hour() + 1) % 24, 0),
            },
            TimeShortcut {
                label: locale.tonight_label.clone(),
                value: TimeValue::new(18, 0),
            },
        ]
    }

    pub fn hours(&self) -> &WheelSelector<u32> {
        &self.hours
    }

    pub fn minutes(&self) -> &WheelSelector<u32> {
        &self.minutes
    }
}

/// Usual session start times offered next to the wheels.
pub fn common_times() -> Vec<TimeValue> {
    [9, 10, 12, 14, 16, 18]
        .into_iter()
        .map(|h| TimeValue::new(h, 0))
        .collect()
}
