use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`, i.e. the last day of that month.
/// Out-of-range months are clamped into 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = month.clamp(1, 12);
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year.checked_add(1) } else { Some(year) };
    match (
        next_year.and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1)),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        // Outside chrono's supported range: fall back to the arithmetic rule.
        _ => match month {
            2 if is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        },
    }
}

pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let (new_year, new_month) = shift_month(date.year(), date.month(), months);
    let new_day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

/// Moves a (year, month) pair by `months`, rolling the year at the boundaries.
/// The year saturates at the ends of `i32`.
pub fn shift_month(year: i32, month: u32, months: i32) -> (i32, u32) {
    let total = (month.clamp(1, 12) as i32 - 1).saturating_add(months);
    let new_month = (total.rem_euclid(12) + 1) as u32;
    (year.saturating_add(total.div_euclid(12)), new_month)
}

/// Empty cells before day 1 in a Monday-first week.
pub fn leading_blanks(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_monday() as usize)
        .unwrap_or(0)
}

/// Monday-first month layout: `None` for padding, `Some(day)` for real days.
/// Trailing padding completes the last row so the length is a multiple of 7.
pub fn month_cells(year: i32, month: u32) -> Vec<Option<u32>> {
    let blanks = leading_blanks(year, month);
    let days = days_in_month(year, month);
    let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_n(None, blanks));
    cells.extend((1..=days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// Next Saturday, or today when today is already Saturday.
pub fn this_weekend(today: NaiveDate) -> NaiveDate {
    let from_sunday = today.weekday().num_days_from_sunday() as u64;
    today
        .checked_add_days(Days::new(6 - from_sunday))
        .unwrap_or(today)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_in_month_leap_februaries() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_month_every_month_of_2025() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2025, i as u32 + 1), *days, "month {}", i + 1);
        }
    }

    #[test]
    fn test_days_in_month_matches_leap_rule() {
        for year in 1890..=2110 {
            let feb = days_in_month(year, 2);
            assert_eq!(feb == 29, is_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(d(2025, 11, 15), 3), d(2026, 2, 15));
        assert_eq!(add_months(d(2025, 2, 15), -3), d(2024, 11, 15));
    }

    #[test]
    fn test_shift_month_rolls_year_both_ways() {
        assert_eq!(shift_month(2025, 12, 1), (2026, 1));
        assert_eq!(shift_month(2025, 1, -1), (2024, 12));
        assert_eq!(shift_month(2025, 6, 0), (2025, 6));
    }

    #[test]
    fn test_days_in_month_at_i32_limits() {
        assert_eq!(days_in_month(i32::MAX, 12), 31);
        assert_eq!(days_in_month(i32::MAX, 2), 28);
        assert_eq!(days_in_month(i32::MIN, 1), 31);
    }

    #[test]
    fn test_shift_month_saturates_year() {
        assert_eq!(shift_month(i32::MAX, 12, 1), (i32::MAX, 1));
        assert_eq!(shift_month(i32::MIN, 1, -1), (i32::MIN, 12));
        // The month offset saturates to i32::MAX, which is 7 mod 12.
        assert_eq!(shift_month(2025, 3, i32::MAX), (2025 + 178_956_970, 8));
    }

    #[test]
    fn test_leading_blanks_march_2025_starts_saturday() {
        // 2025-03-01 is a Saturday: Mon..Fri are blank.
        assert_eq!(leading_blanks(2025, 3), 5);
    }

    #[test]
    fn test_leading_blanks_monday_start_is_zero() {
        // 2025-09-01 is a Monday.
        assert_eq!(leading_blanks(2025, 9), 0);
    }

    #[test]
    fn test_leading_blanks_sunday_start_is_six() {
        // 2025-06-01 is a Sunday.
        assert_eq!(leading_blanks(2025, 6), 6);
    }

    #[test]
    fn test_month_cells_is_whole_rows() {
        for month in 1..=12 {
            let cells = month_cells(2025, month);
            assert_eq!(cells.len() % 7, 0);
            let days = cells.iter().filter(|c| c.is_some()).count() as u32;
            assert_eq!(days, days_in_month(2025, month));
        }
    }

    #[test]
    fn test_month_cells_march_2025_layout() {
        let cells = month_cells(2025, 3);
        assert!(cells[..5].iter().all(|c| c.is_none()));
        assert_eq!(cells[5], Some(1));
        // 5 blanks + 31 days = 36 → padded to 42.
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[35], Some(31));
    }

    #[test]
    fn test_month_cells_february_2021_fits_four_rows() {
        // 2021-02-01 is a Monday, 28 days.
        assert_eq!(month_cells(2021, 2).len(), 28);
    }

    #[test]
    fn test_this_weekend_from_weekday() {
        // Wednesday 2025-03-05 → Saturday 2025-03-08
        assert_eq!(this_weekend(d(2025, 3, 5)), d(2025, 3, 8));
    }

    #[test]
    fn test_this_weekend_on_saturday_is_today() {
        assert_eq!(this_weekend(d(2025, 3, 8)), d(2025, 3, 8));
    }

    #[test]
    fn test_this_weekend_on_sunday_is_next_saturday() {
        assert_eq!(this_weekend(d(2025, 3, 9)), d(2025, 3, 15));
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(d(2025, 3, 8)));
        assert!(is_weekend(d(2025, 3, 9)));
        assert!(!is_weekend(d(2025, 3, 10)));
    }
}
