use crate::calc::calendar::{is_weekend, this_weekend};
use crate::calc::{month_cells, shift_month};
use crate::data::Locale;
use crate::format::date::format_month_year;
use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateShortcut {
    pub label: String,
    pub date: NaiveDate,
}

/// Today, tomorrow, this weekend and in one week, relative to `today`.
pub fn default_shortcuts(today: NaiveDate, locale: &Locale) -> Vec<DateShortcut> {
    let plus = |n: u64| today.checked_add_days(Days::new(n)).unwrap_or(today);
    vec![
        DateShortcut {
            label: locale.today_label.clone(),
            date: today,
        },
        DateShortcut {
            label: locale.tomorrow_label.clone(),
            date: plus(1),
        },
        DateShortcut {
            label: locale.weekend_label.clone(),
            date: this_weekend(today),
        },
        DateShortcut {
            label: locale.next_week_label.clone(),
            date: plus(7),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    pub is_weekend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Empty,
    Day(DayCell),
}

/// Month grid navigator. Holds only the month being viewed; the selected date
/// belongs to the host and is passed into [`CalendarPicker::cells`].
#[derive(Debug, Clone)]
pub struct CalendarPicker {
    view_year: i32,
    view_month: u32,
    today: NaiveDate,
    min_date: Option<NaiveDate>,
    shortcuts: Vec<DateShortcut>,
}

impl CalendarPicker {
    /// Opens on the month of `selected`, or of `today` when nothing is selected.
    pub fn new(
        today: NaiveDate,
        selected: Option<NaiveDate>,
        min_date: Option<NaiveDate>,
        locale: &Locale,
    ) -> Self {
        let shown = selected.unwrap_or(today);
        CalendarPicker {
            view_year: shown.year(),
            view_month: shown.month(),
            today,
            min_date,
            shortcuts: default_shortcuts(today, locale),
        }
    }

    pub fn view(&self) -> (i32, u32) {
        (self.view_year, self.view_month)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn shortcuts(&self) -> &[DateShortcut] {
        &self.shortcuts
    }

    pub fn prev_month(&mut self) {
        self.move_view(-1);
    }

    pub fn next_month(&mut self) {
        self.move_view(1);
    }

    fn move_view(&mut self, months: i32) {
        (self.view_year, self.view_month) = shift_month(self.view_year, self.view_month, months);
        debug!(year = self.view_year, month = self.view_month, "calendar view moved");
    }

    /// Day granularity: the minimum date itself stays selectable.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min)
    }

    pub fn cells(&self, selected: Option<NaiveDate>) -> Vec<CalendarCell> {
        month_cells(self.view_year, self.view_month)
            .into_iter()
            .map(|cell| {
                let Some(date) = cell
                    .and_then(|day| NaiveDate::from_ymd_opt(self.view_year, self.view_month, day))
                else {
                    return CalendarCell::Empty;
                };
                CalendarCell::Day(DayCell {
                    day: date.day(),
                    date,
                    is_today: date == self.today,
                    is_selected: Some(date) == selected,
                    is_disabled: self.is_disabled(date),
                    is_weekend: is_weekend(date),
                })
            })
            .collect()
    }

    /// Tapping a day of the viewed month. Disabled or nonexistent days select nothing.
    pub fn select_day(&self, day: u32) -> Option<NaiveDate> {
        let date = NaiveDate::from_ymd_opt(self.view_year, self.view_month, day)?;
        if self.is_disabled(date) {
            debug!(%date, "calendar day disabled");
            return None;
        }
        Some(date)
    }

    /// Keyboard selection of any date: refused when disabled, otherwise the view
    /// follows it to its month.
    pub fn focus_date(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        if self.is_disabled(date) {
            return None;
        }
        self.view_year = date.year();
        self.view_month = date.month();
        Some(date)
    }

    /// Selects shortcut `index` and moves the view to its month.
    pub fn select_shortcut(&mut self, index: usize) -> Option<NaiveDate> {
        let date = self.shortcuts.get(index)?.date;
        self.view_year = date.year();
        self.view_month = date.month();
        Some(date)
    }

    /// Index of the shortcut matching `selected`, for highlighting.
    pub fn active_shortcut(&self, selected: Option<NaiveDate>) -> Option<usize> {
        let selected = selected?;
        self.shortcuts.iter().position(|s| s.date == selected)
    }

    pub fn title(&self, locale: &Locale) -> String {
        format_month_year(self.view_year, self.view_month, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn picker(today: NaiveDate, min_date: Option<NaiveDate>) -> CalendarPicker {
        CalendarPicker::new(today, None, min_date, &Locale::default())
    }

    fn day_cells(cells: &[CalendarCell]) -> Vec<DayCell> {
        cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day(day) => Some(*day),
                CalendarCell::Empty => None,
            })
            .collect()
    }

    #[test]
    fn test_march_2025_layout() {
        let p = picker(d(2025, 3, 10), None);
        let cells = p.cells(None);
        let blanks = cells
            .iter()
            .take_while(|c| **c == CalendarCell::Empty)
            .count();
        assert_eq!(blanks, 5);
        assert_eq!(cells.len() % 7, 0);
        let days = day_cells(&cells);
        assert_eq!(days.len(), 31);
        assert!(days[0].is_weekend && days[1].is_weekend);
        assert!(!days[2].is_weekend);
    }

    #[test]
    fn test_navigation_rolls_year() {
        let mut p = picker(d(2024, 12, 15), None);
        p.next_month();
        assert_eq!(p.view(), (2025, 1));
        p.prev_month();
        p.prev_month();
        assert_eq!(p.view(), (2024, 11));
    }

    #[test]
    fn test_opens_on_selected_month() {
        let p = CalendarPicker::new(d(2025, 3, 10), Some(d(2026, 8, 1)), None, &Locale::default());
        assert_eq!(p.view(), (2026, 8));
    }

    #[test]
    fn test_days_before_min_are_disabled() {
        let p = picker(d(2025, 3, 10), Some(d(2025, 3, 10)));
        let days = day_cells(&p.cells(None));
        assert!(days[8].is_disabled);
        assert!(!days[9].is_disabled);
        assert_eq!(p.select_day(9), None);
        assert_eq!(p.select_day(10), Some(d(2025, 3, 10)));
    }

    #[test]
    fn test_select_nonexistent_day() {
        let mut p = picker(d(2025, 2, 1), None);
        assert_eq!(p.select_day(30), None);
        p.next_month();
        assert_eq!(p.select_day(30), Some(d(2025, 3, 30)));
    }

    #[test]
    fn test_today_and_selected_are_independent() {
        let p = picker(d(2025, 3, 10), None);
        let days = day_cells(&p.cells(Some(d(2025, 3, 12))));
        assert!(days[9].is_today && !days[9].is_selected);
        assert!(days[11].is_selected && !days[11].is_today);

        let days = day_cells(&p.cells(Some(d(2025, 3, 10))));
        assert!(days[9].is_today && days[9].is_selected);
    }

    #[test]
    fn test_shortcuts_from_wednesday() {
        let p = picker(d(2025, 3, 12), None);
        let dates: Vec<NaiveDate> = p.shortcuts().iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![d(2025, 3, 12), d(2025, 3, 13), d(2025, 3, 15), d(2025, 3, 19)]
        );
        assert_eq!(p.shortcuts()[2].label, "Ce week-end");
    }

    #[test]
    fn test_weekend_shortcut_on_saturday_is_today() {
        let shortcuts = default_shortcuts(d(2025, 3, 15), &Locale::default());
        assert_eq!(shortcuts[2].date, d(2025, 3, 15));
    }

    #[test]
    fn test_shortcut_recenters_view() {
        let mut p = picker(d(2025, 1, 28), None);
        p.prev_month();
        assert_eq!(p.view(), (2024, 12));
        assert_eq!(p.select_shortcut(3), Some(d(2025, 2, 4)));
        assert_eq!(p.view(), (2025, 2));
        assert_eq!(p.active_shortcut(Some(d(2025, 2, 4))), Some(3));
        assert_eq!(p.select_shortcut(9), None);
    }

    #[test]
    fn test_focus_date_follows_month() {
        let mut p = picker(d(2025, 3, 10), Some(d(2025, 3, 10)));
        assert_eq!(p.focus_date(d(2025, 3, 9)), None);
        assert_eq!(p.view(), (2025, 3));
        assert_eq!(p.focus_date(d(2025, 4, 1)), Some(d(2025, 4, 1)));
        assert_eq!(p.view(), (2025, 4));
    }

    #[test]
    fn test_title() {
        let p = picker(d(2025, 3, 10), None);
        assert_eq!(p.title(&Locale::default()), "mars 2025");
    }
}
