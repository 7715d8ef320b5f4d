use crate::calc::days_in_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar date split into wheel components. The day is always clamped into
/// the valid range for (year, month); changing the month or year may lower it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateValue {
    /// Builds a value with month clamped to 1..=12 and day clamped to the month.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        let day = day.clamp(1, days_in_month(year, month));
        DateValue { year, month, day }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        DateValue {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn with_year(self, year: i32) -> Self {
        DateValue::new(year, self.month, self.day)
    }

    pub fn with_month(self, month: u32) -> Self {
        DateValue::new(self.year, month, self.day)
    }

    pub fn with_day(self, day: u32) -> Self {
        DateValue::new(self.year, self.month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_day_down() {
        let v = DateValue::new(2023, 2, 31);
        assert_eq!(v.day, 28);
    }

    #[test]
    fn test_new_clamps_month_and_zero_day() {
        let v = DateValue::new(2025, 14, 0);
        assert_eq!(v.month, 12);
        assert_eq!(v.day, 1);
    }

    #[test]
    fn test_with_month_leap_year() {
        let v = DateValue::new(2024, 1, 31).with_month(2);
        assert_eq!(v, DateValue::new(2024, 2, 29));
    }

    #[test]
    fn test_with_year_off_leap_day() {
        let v = DateValue::new(2024, 2, 29).with_year(2025);
        assert_eq!(v.day, 28);
    }

    #[test]
    fn test_with_month_never_raises_day() {
        let v = DateValue::new(2025, 2, 28).with_month(3);
        assert_eq!(v.day, 28);
    }

    #[test]
    fn test_clamp_property_across_all_months() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 1..=12 {
                let v = DateValue::new(year, 1, 31).with_month(month);
                assert_eq!(v.day, days_in_month(year, month).min(31));
                assert!(v.to_naive().is_some());
            }
        }
    }

    #[test]
    fn test_naive_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        assert_eq!(DateValue::from_naive(date).to_naive(), Some(date));
    }
}
