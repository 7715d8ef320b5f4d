use crate::calc::calendar::add_months;
use crate::calc::days_in_month;
use crate::data::{FormDraft, Location, PickerSettings, RecurrenceKind};
use crate::format::date::{describe_iso, describe_session, format_long};
use crate::format::{format_time, DateFormat};
use crate::ui::theme::Theme;
use crate::widget::calendar_picker::CalendarCell;
use crate::widget::contact_picker::counter_text;
use crate::widget::notes_input::{self, summary};
use crate::widget::text_input::{remember, TextEntries};
use crate::widget::recurrence_editor::{describe, kind_label};
use crate::widget::time_picker::{common_times, TimeShortcut};
use crate::widget::wheel::{ScrollEvent, WheelSelector};
use crate::widget::{
    CalendarPicker, ContactPicker, CurrencyInput, DateColumn, DatePicker, LocationInput,
    NotesInput, OptionPicker, RecurrenceEditor, SmartTextInput, Stepper, TimeColumn, TimePicker,
};
use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use crossterm::event::{
    self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::fmt::Debug;
use std::io::Stdout;
use std::time::Duration as StdDuration;
use tracing::debug;

/// Birth dates are offered over this many years back from today.
const BIRTH_YEAR_SPAN: i32 = 100;

const TIME_COLUMNS: [TimeColumn; 2] = [TimeColumn::Hour, TimeColumn::Minute];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TournamentDate,
    BirthDate,
    StartTime,
    SessionDate,
    Recurrence,
    Surface,
    Participants,
    Location,
    Amount,
    MatchCount,
    Title,
    Notes,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::TournamentDate,
        Field::BirthDate,
        Field::StartTime,
        Field::SessionDate,
        Field::Recurrence,
        Field::Surface,
        Field::Participants,
        Field::Location,
        Field::Amount,
        Field::MatchCount,
        Field::Title,
        Field::Notes,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::TournamentDate => "Tournoi",
            Field::BirthDate => "Naissance",
            Field::StartTime => "Heure",
            Field::SessionDate => "Séance",
            Field::Recurrence => "Répétition",
            Field::Surface => "Surface",
            Field::Participants => "Participants",
            Field::Location => "Lieu",
            Field::Amount => "Montant",
            Field::MatchCount => "Matchs",
            Field::Title => "Titre",
            Field::Notes => "Notes",
        }
    }

    /// Fields where printable keys are typed into the value.
    fn takes_text(self) -> bool {
        matches!(
            self,
            Field::Location | Field::Amount | Field::Title | Field::Notes
        )
    }

    fn shifted(self, delta: i32) -> Field {
        let idx = Field::ALL.iter().position(|f| *f == self).unwrap_or(0) as i32;
        let len = Field::ALL.len() as i32;
        Field::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

/// Moves within `order` by `delta`, stopping at the ends.
fn step_in<T: Copy + PartialEq>(order: &[T], current: T, delta: i32) -> T {
    let idx = order.iter().position(|c| *c == current).unwrap_or(0) as i32;
    let last = order.len() as i32 - 1;
    order[(idx + delta).clamp(0, last) as usize]
}

/// `'1'` → 0, `'9'` → 8.
fn digit_index(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| *d > 0)
        .map(|d| d as usize - 1)
}

/// A left-button drag in progress on the focused wheel.
#[derive(Debug, Clone, Copy)]
struct Drag {
    start_row: u16,
    start_offset: f32,
    row_height: f32,
    offset: f32,
}

fn metrics<V: Clone + PartialEq + Debug>(wheel: &WheelSelector<V>) -> (f32, f32) {
    (wheel.offset(), wheel.row_height())
}

pub struct App<'a> {
    draft: &'a mut FormDraft,
    settings: PickerSettings,
    theme: Theme,
    today: NaiveDate,
    focus: Field,
    date_column: DateColumn,
    time_column: TimeColumn,
    tournament: DatePicker,
    birth: DatePicker,
    time: TimePicker,
    time_shortcuts: Vec<TimeShortcut>,
    calendar: CalendarPicker,
    recurrence: RecurrenceEditor,
    weekday_cursor: u8,
    surfaces: OptionPicker,
    contacts: ContactPicker,
    contact_cursor: usize,
    location: LocationInput,
    location_query: String,
    location_cursor: usize,
    amount: CurrencyInput,
    stepper: Stepper,
    title: SmartTextInput,
    title_cursor: usize,
    notes: NotesInput,
    note_cursor: usize,
    drag: Option<Drag>,
}

impl<'a> App<'a> {
    pub fn new(
        draft: &'a mut FormDraft,
        settings: PickerSettings,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Self {
        let locale = &settings.locale;
        let tournament = DatePicker::new(
            DateFormat::Iso,
            settings.min_year,
            settings.max_year,
            locale,
            today,
        );
        let birth = DatePicker::new(
            DateFormat::French,
            today.year() - BIRTH_YEAR_SPAN,
            today.year(),
            locale,
            today,
        );
        let time = TimePicker::new(settings.minute_step, settings.minute_rounding);
        let time_shortcuts = time.shortcuts(now, locale);
        // Sessions cannot be booked in the past.
        let calendar = CalendarPicker::new(today, draft.session_date, Some(today), locale);
        let contacts = ContactPicker::new(
            settings
                .staff
                .iter()
                .chain(&settings.frequent_partners)
                .cloned()
                .collect(),
        );
        let mut app = App {
            recurrence: RecurrenceEditor::new(settings.end_after_choices.clone()),
            surfaces: OptionPicker::new(settings.options.clone()),
            location: LocationInput::new(
                settings.current_position.clone(),
                settings.frequent_places.clone(),
            ),
            amount: CurrencyInput::new(
                draft.amount,
                &settings.currency,
                settings.frequent_amounts.clone(),
            ),
            stepper: Stepper::new(&settings.stepper),
            title: SmartTextInput::new(
                settings.title_suggestions.clone(),
                settings.title_templates.clone(),
                settings.title_max_length,
            ),
            notes: NotesInput::new(settings.note_templates.clone()),
            draft,
            theme: Theme::default(),
            today,
            focus: Field::TournamentDate,
            date_column: DateColumn::Day,
            time_column: TimeColumn::Hour,
            tournament,
            birth,
            time,
            time_shortcuts,
            calendar,
            weekday_cursor: 0,
            contacts,
            contact_cursor: 0,
            location_query: String::new(),
            location_cursor: 0,
            title_cursor: 0,
            note_cursor: 0,
            drag: None,
            settings,
        };
        app.sync_widgets();
        app
    }

    /// Hands the current draft values back to the wheels.
    fn sync_widgets(&mut self) {
        self.tournament.sync(&self.draft.tournament_date);
        self.birth.sync(&self.draft.birth_date);
        self.time.sync(&self.draft.start_time);
        self.surfaces.sync(&self.draft.surface);
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            return true;
        }
        if matches!(
            code,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right
        ) {
            self.end_drag();
        }
        match code {
            KeyCode::Tab => {
                self.focus = self.focus.shifted(1);
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.shifted(-1);
                return false;
            }
            KeyCode::Char('q') if !self.focus.takes_text() => return true,
            _ => {}
        }

        match self.focus {
            Field::TournamentDate | Field::BirthDate => self.handle_date_key(code),
            Field::StartTime => self.handle_time_key(code),
            Field::SessionDate => self.handle_calendar_key(code),
            Field::Recurrence => self.handle_recurrence_key(code),
            Field::Surface => self.handle_surface_key(code),
            Field::Participants => self.handle_participants_key(code),
            Field::Location => self.handle_location_key(code),
            Field::Amount => self.handle_amount_key(code),
            Field::MatchCount => self.handle_match_count_key(code),
            Field::Title => self.handle_title_key(code),
            Field::Notes => self.handle_notes_key(code),
        }
        self.sync_widgets();
        false
    }

    /// Releases a drag on the wheel it started on, before focus or column moves
    /// away from that wheel.
    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(offset = drag.offset, "drag ended by focus change");
            self.apply_scroll(ScrollEvent::MomentumEnd {
                offset: drag.offset,
            });
            self.sync_widgets();
        }
    }

    /// Left-button drags on a wheel field become a scroll gesture, one terminal row
    /// per wheel row; dragging up moves forward. The mouse wheel steps like Up/Down.
    pub fn handle_mouse(&mut self, kind: MouseEventKind, row: u16) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((offset, row_height)) = self.focused_wheel() else {
                    return;
                };
                self.drag = Some(Drag {
                    start_row: row,
                    start_offset: offset,
                    row_height,
                    offset,
                });
                self.apply_scroll(ScrollEvent::BeginDrag);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(drag) = self.drag.as_mut() else {
                    return;
                };
                drag.offset = drag.start_offset
                    + (f32::from(drag.start_row) - f32::from(row)) * drag.row_height;
                let offset = drag.offset;
                self.apply_scroll(ScrollEvent::Scroll { offset });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(drag) = self.drag.take() else {
                    return;
                };
                self.apply_scroll(ScrollEvent::MomentumEnd {
                    offset: drag.offset,
                });
            }
            MouseEventKind::ScrollUp => {
                self.handle_key(KeyCode::Up, KeyModifiers::empty());
                return;
            }
            MouseEventKind::ScrollDown => {
                self.handle_key(KeyCode::Down, KeyModifiers::empty());
                return;
            }
            _ => return,
        }
        self.sync_widgets();
    }

    /// Offset and row height of the wheel column under focus, if the field is a wheel.
    fn focused_wheel(&self) -> Option<(f32, f32)> {
        match self.focus {
            Field::TournamentDate | Field::BirthDate => {
                let picker = if self.focus == Field::BirthDate {
                    &self.birth
                } else {
                    &self.tournament
                };
                Some(match self.date_column {
                    DateColumn::Day => metrics(picker.days()),
                    DateColumn::Month => metrics(picker.months()),
                    DateColumn::Year => metrics(picker.years()),
                })
            }
            Field::StartTime => Some(match self.time_column {
                TimeColumn::Hour => metrics(self.time.hours()),
                TimeColumn::Minute => metrics(self.time.minutes()),
            }),
            Field::Surface => Some(metrics(self.surfaces.wheel())),
            _ => None,
        }
    }

    fn apply_scroll(&mut self, event: ScrollEvent) {
        match self.focus {
            Field::TournamentDate | Field::BirthDate => {
                let (picker, raw) = if self.focus == Field::BirthDate {
                    (&mut self.birth, &mut self.draft.birth_date)
                } else {
                    (&mut self.tournament, &mut self.draft.tournament_date)
                };
                if let Some(next) = picker.handle(raw, self.date_column, event) {
                    *raw = next;
                }
            }
            Field::StartTime => {
                let raw = &mut self.draft.start_time;
                if let Some(next) = self.time.handle(raw, self.time_column, event) {
                    *raw = next;
                }
            }
            Field::Surface => {
                if let Some(value) = self.surfaces.handle(event) {
                    self.draft.surface = value;
                }
            }
            _ => {}
        }
    }

    fn handle_date_key(&mut self, code: KeyCode) {
        let (picker, raw) = if self.focus == Field::BirthDate {
            (&mut self.birth, &mut self.draft.birth_date)
        } else {
            (&mut self.tournament, &mut self.draft.tournament_date)
        };
        let rows = match code {
            KeyCode::Left => {
                self.date_column = step_in(&DateColumn::ORDER, self.date_column, -1);
                return;
            }
            KeyCode::Right => {
                self.date_column = step_in(&DateColumn::ORDER, self.date_column, 1);
                return;
            }
            KeyCode::Up => -1,
            KeyCode::Down => 1,
            KeyCode::Delete => {
                raw.clear();
                return;
            }
            _ => return,
        };
        if let Some(next) = picker.nudge(raw, self.date_column, rows) {
            *raw = next;
        }
    }

    fn handle_time_key(&mut self, code: KeyCode) {
        let raw = &mut self.draft.start_time;
        match code {
            KeyCode::Left => self.time_column = step_in(&TIME_COLUMNS, self.time_column, -1),
            KeyCode::Right => self.time_column = step_in(&TIME_COLUMNS, self.time_column, 1),
            KeyCode::Up | KeyCode::Down => {
                let rows = if code == KeyCode::Up { -1 } else { 1 };
                if let Some(next) = self.time.nudge(raw, self.time_column, rows) {
                    *raw = next;
                }
            }
            // 1-3: shortcuts, 4-9: common times.
            KeyCode::Char(c) => {
                let Some(idx) = digit_index(c) else { return };
                let value = match self.time_shortcuts.get(idx) {
                    Some(shortcut) => Some(shortcut.value),
                    None => common_times().get(idx - self.time_shortcuts.len()).copied(),
                };
                if let Some(value) = value {
                    *raw = format_time(value);
                }
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, code: KeyCode) {
        let current = self.draft.session_date.unwrap_or(self.today);
        let candidate = match code {
            KeyCode::Left => current.checked_sub_days(Days::new(1)),
            KeyCode::Right => current.checked_add_days(Days::new(1)),
            KeyCode::Up => current.checked_sub_days(Days::new(7)),
            KeyCode::Down => current.checked_add_days(Days::new(7)),
            KeyCode::PageUp | KeyCode::Char('<') => {
                self.calendar.prev_month();
                None
            }
            KeyCode::PageDown | KeyCode::Char('>') => {
                self.calendar.next_month();
                None
            }
            KeyCode::Delete => {
                self.draft.session_date = None;
                None
            }
            KeyCode::Home | KeyCode::End => {
                let (year, month) = self.calendar.view();
                let last = days_in_month(year, month);
                let pick = |day: u32| self.calendar.select_day(day);
                let first_open = if code == KeyCode::Home {
                    (1..=last).find_map(pick)
                } else {
                    (1..=last).rev().find_map(pick)
                };
                if first_open.is_some() {
                    self.draft.session_date = first_open;
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(date) = digit_index(c).and_then(|i| self.calendar.select_shortcut(i)) {
                    self.draft.session_date = Some(date);
                }
                None
            }
            _ => None,
        };
        if let Some(date) = candidate.and_then(|d| self.calendar.focus_date(d)) {
            self.draft.session_date = Some(date);
        }
    }

    fn handle_recurrence_key(&mut self, code: KeyCode) {
        let rule = &self.draft.recurrence;
        let next = match code {
            KeyCode::Up | KeyCode::Down => {
                let delta = if code == KeyCode::Up { -1 } else { 1 };
                let kind = step_in(&RecurrenceKind::ALL, rule.kind, delta);
                Some(self.recurrence.set_kind(rule, kind))
            }
            KeyCode::Left => {
                self.weekday_cursor = self.weekday_cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.weekday_cursor = (self.weekday_cursor + 1).min(6);
                None
            }
            KeyCode::Char(' ') => self.recurrence.toggle_day(rule, self.weekday_cursor),
            _ if rule.kind == RecurrenceKind::None => None,
            KeyCode::Char('e') => {
                let choices = self.recurrence.end_after_choices();
                let count = match rule.end_after() {
                    Some(n) => choices
                        .iter()
                        .position(|c| *c == n)
                        .and_then(|i| choices.get(i + 1))
                        .copied(),
                    None => choices.first().copied(),
                };
                Some(match count {
                    Some(n) => self.recurrence.set_end_after(rule, n),
                    None => self.recurrence.set_never_ends(rule),
                })
            }
            KeyCode::Char('d') => {
                let until = self
                    .draft
                    .session_date
                    .map(|d| add_months(d, 1))
                    .unwrap_or_else(|| add_months(self.today, 1));
                Some(self.recurrence.set_end_date(rule, until))
            }
            KeyCode::Char('n') => Some(self.recurrence.set_never_ends(rule)),
            _ => None,
        };
        if let Some(rule) = next {
            debug!(?rule, "recurrence updated");
            self.draft.recurrence = rule;
        }
    }

    fn handle_surface_key(&mut self, code: KeyCode) {
        let rows = match code {
            KeyCode::Up => -1,
            KeyCode::Down => 1,
            _ => return,
        };
        if let Some(value) = self.surfaces.nudge(rows) {
            self.draft.surface = value;
        }
    }

    fn handle_participants_key(&mut self, code: KeyCode) {
        let count = self.contacts.contacts().len();
        match code {
            KeyCode::Up => self.contact_cursor = self.contact_cursor.saturating_sub(1),
            KeyCode::Down if self.contact_cursor + 1 < count => self.contact_cursor += 1,
            KeyCode::Char(' ') | KeyCode::Enter => {
                let Some(contact) = self.contacts.contacts().get(self.contact_cursor) else {
                    return;
                };
                if let Some(next) = self.contacts.toggle(&self.draft.participants, &contact.id) {
                    self.draft.participants = next;
                }
            }
            _ => {}
        }
    }

    /// Current-position entry first, then frequent places matching the query.
    fn location_entries(&self) -> Vec<Location> {
        self.location
            .use_current()
            .into_iter()
            .chain(self.location.suggestions(&self.location_query).into_iter().cloned())
            .collect()
    }

    fn handle_location_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.location_query.push(c);
                self.location_cursor = 0;
            }
            KeyCode::Backspace => {
                self.location_query.pop();
                self.location_cursor = 0;
            }
            KeyCode::Up => self.location_cursor = self.location_cursor.saturating_sub(1),
            KeyCode::Down => {
                let count = self.location_entries().len();
                if self.location_cursor + 1 < count {
                    self.location_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self.location_entries().into_iter().nth(self.location_cursor) {
                    self.draft.location = Some(entry);
                    self.location_query.clear();
                    self.location_cursor = 0;
                }
            }
            KeyCode::Delete => self.draft.location = Some(self.location.clear()),
            _ => {}
        }
    }

    fn handle_amount_key(&mut self, code: KeyCode) {
        let value = match code {
            KeyCode::Char(c) => self.amount.push_char(c),
            KeyCode::Backspace => self.amount.backspace(),
            KeyCode::Up | KeyCode::Down => {
                let amounts = self.amount.frequent_amounts();
                if amounts.is_empty() {
                    return;
                }
                let idx = amounts
                    .iter()
                    .position(|a| *a == self.draft.amount)
                    .map(|i| {
                        if code == KeyCode::Down {
                            (i + 1).min(amounts.len() - 1)
                        } else {
                            i.saturating_sub(1)
                        }
                    })
                    .unwrap_or(0);
                self.amount.select_amount(idx)
            }
            _ => None,
        };
        if let Some(value) = value {
            self.draft.amount = value;
        }
    }

    fn handle_match_count_key(&mut self, code: KeyCode) {
        let value = self.draft.match_count;
        let next = match code {
            KeyCode::Up | KeyCode::Char('+') => self.stepper.increment(value),
            KeyCode::Down | KeyCode::Char('-') => self.stepper.decrement(value),
            KeyCode::Char(c) => digit_index(c).and_then(|i| self.stepper.select_quick(i)),
            _ => None,
        };
        if let Some(next) = next {
            self.draft.match_count = next;
        }
    }

    fn handle_title_key(&mut self, code: KeyCode) {
        let value = &self.draft.title;
        let next = match code {
            KeyCode::Char(c) => {
                self.title_cursor = 0;
                self.title.push_char(value, c)
            }
            KeyCode::Backspace => {
                self.title_cursor = 0;
                self.title.backspace(value)
            }
            KeyCode::Up => {
                self.title_cursor = self.title_cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let count = self
                    .title
                    .entries(value, &self.draft.recent_titles)
                    .values()
                    .len();
                if self.title_cursor + 1 < count {
                    self.title_cursor += 1;
                }
                None
            }
            // Picks the highlighted entry, or keeps the typed text, and records it.
            KeyCode::Enter => {
                let picked = self
                    .title
                    .entries(value, &self.draft.recent_titles)
                    .values()
                    .get(self.title_cursor)
                    .map(|v| self.title.edit(v))
                    .unwrap_or_else(|| value.clone());
                self.draft.recent_titles = remember(&self.draft.recent_titles, &picked);
                self.title_cursor = 0;
                Some(picked)
            }
            KeyCode::Delete => {
                self.title_cursor = 0;
                Some(self.title.clear())
            }
            _ => None,
        };
        if let Some(next) = next {
            self.draft.title = next;
        }
    }

    fn handle_notes_key(&mut self, code: KeyCode) {
        let value = &self.draft.notes;
        let picking = self.notes.shows_templates(value);
        let next = match code {
            KeyCode::Up if picking => {
                self.note_cursor = self.note_cursor.saturating_sub(1);
                None
            }
            KeyCode::Down if picking => {
                if self.note_cursor + 1 < self.notes.templates().len() {
                    self.note_cursor += 1;
                }
                None
            }
            KeyCode::Enter if picking => self.notes.apply_template(self.note_cursor),
            KeyCode::Enter => Some(self.notes.push_char(value, '\n')),
            KeyCode::Char(c) => Some(self.notes.push_char(value, c)),
            KeyCode::Backspace => self.notes.backspace(value),
            KeyCode::Delete => Some(self.notes.clear()),
            _ => None,
        };
        if let Some(next) = next {
            self.draft.notes = next;
            self.note_cursor = 0;
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn render(&self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(14),   // fields + editor
                Constraint::Length(3), // key help
            ])
            .split(f.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(48), Constraint::Min(30)])
            .split(rows[0]);

        self.render_fields(f, columns[0]);
        self.render_editor(f, columns[1]);
        self.render_help(f, rows[1]);
    }

    fn field_value(&self, field: Field) -> String {
        let locale = &self.settings.locale;
        let or_dash = |s: &str| {
            if s.is_empty() {
                "--".to_string()
            } else {
                s.to_string()
            }
        };
        match field {
            Field::TournamentDate => or_dash(&describe_iso(&self.draft.tournament_date, locale)),
            Field::BirthDate => or_dash(&self.draft.birth_date),
            Field::StartTime => or_dash(&self.draft.start_time),
            Field::SessionDate => self
                .draft
                .session_date
                .map(|d| {
                    describe_session(d, self.draft.recurrence.end_date(), self.today, locale)
                })
                .unwrap_or_else(|| "--".to_string()),
            Field::Recurrence => describe(&self.draft.recurrence, locale),
            Field::Surface => or_dash(self.surfaces.label_for(&self.draft.surface).unwrap_or("")),
            Field::Participants => or_dash(&counter_text(self.draft.participants.len(), locale)),
            Field::Location => match self.draft.location.as_ref().filter(|l| !l.is_empty()) {
                None => "--".to_string(),
                Some(loc) => match self.location.distance_from_current(loc) {
                    Some(est) if !self.location.is_current(loc) => format!(
                        "{} ({}, {})",
                        loc.name, est.distance_label, est.duration_label
                    ),
                    _ => loc.name.clone(),
                },
            },
            Field::Amount => self.amount.display(self.draft.amount),
            Field::MatchCount => self.stepper.display(self.draft.match_count),
            Field::Title => or_dash(&self.draft.title),
            Field::Notes => or_dash(&summary(&self.draft.notes, locale)),
        }
    }

    fn render_fields(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = Field::ALL
            .iter()
            .map(|field| {
                let focused = *field == self.focus;
                let marker = if focused { "▶ " } else { "  " };
                Line::from(vec![
                    Span::styled(
                        format!("{marker}{:<13}", field.label()),
                        self.theme.label(focused),
                    ),
                    Span::raw(self.field_value(*field)),
                ])
            })
            .collect();
        let block = Block::default().borders(Borders::ALL).title(" Formulaire ");
        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_editor(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.focus.label()));
        let inner = block.inner(area);
        f.render_widget(block, area);
        match self.focus {
            Field::TournamentDate => self.render_date_wheels(f, inner, &self.tournament),
            Field::BirthDate => self.render_date_wheels(f, inner, &self.birth),
            Field::StartTime => self.render_time(f, inner),
            Field::SessionDate => self.render_calendar(f, inner),
            Field::Recurrence => self.render_recurrence(f, inner),
            Field::Surface => {
                let lines = wheel_lines(self.surfaces.wheel(), &self.theme, true);
                f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            }
            Field::Participants => self.render_participants(f, inner),
            Field::Location => self.render_location(f, inner),
            Field::Amount => self.render_amount(f, inner),
            Field::MatchCount => self.render_match_count(f, inner),
            Field::Title => self.render_title(f, inner),
            Field::Notes => self.render_notes(f, inner),
        }
    }

    fn render_date_wheels(&self, f: &mut Frame, area: Rect, picker: &DatePicker) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Min(0),
            ])
            .split(area);
        let focused = |c: DateColumn| c == self.date_column;
        let wheels = [
            wheel_lines(picker.days(), &self.theme, focused(DateColumn::Day)),
            wheel_lines(picker.months(), &self.theme, focused(DateColumn::Month)),
            wheel_lines(picker.years(), &self.theme, focused(DateColumn::Year)),
        ];
        for (lines, rect) in wheels.into_iter().zip(cols.iter()) {
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *rect);
        }
    }

    fn render_time(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(rows[0]);
        let hour = wheel_lines(
            self.time.hours(),
            &self.theme,
            self.time_column == TimeColumn::Hour,
        );
        let minute = wheel_lines(
            self.time.minutes(),
            &self.theme,
            self.time_column == TimeColumn::Minute,
        );
        f.render_widget(Paragraph::new(hour).alignment(Alignment::Center), cols[0]);
        f.render_widget(Paragraph::new(minute).alignment(Alignment::Center), cols[1]);

        let current = self.time.displayed(&self.draft.start_time);
        let mut chips: Vec<Span> = Vec::new();
        let labels = self
            .time_shortcuts
            .iter()
            .map(|s| (s.label.clone(), s.value))
            .chain(common_times().into_iter().map(|t| (format_time(t), t)));
        for (i, (label, value)) in labels.enumerate() {
            let active = !self.draft.start_time.is_empty() && value == current;
            chips.push(Span::styled(format!(" {}:{label} ", i + 1), self.theme.chip(active)));
        }
        f.render_widget(Paragraph::new(Line::from(chips)), rows[1]);
    }

    fn render_calendar(&self, f: &mut Frame, area: Rect) {
        let locale = &self.settings.locale;
        let selected = self.draft.session_date;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{:^21}", self.calendar.title(locale)),
                self.theme.header(),
            )),
            Line::from(
                (0..7)
                    .map(|i| format!("{:>2} ", locale.weekday_initial(i)))
                    .collect::<String>(),
            ),
        ];
        for week in self.calendar.cells(selected).chunks(7) {
            let spans: Vec<Span> = week
                .iter()
                .flat_map(|cell| match cell {
                    CalendarCell::Empty => vec![Span::raw("   ")],
                    CalendarCell::Day(day) => vec![
                        Span::styled(format!("{:>2}", day.day), self.theme.day_cell(day)),
                        Span::raw(" "),
                    ],
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        let active = self.calendar.active_shortcut(selected);
        let chips: Vec<Span> = self
            .calendar
            .shortcuts()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Span::styled(
                    format!(" {}:{} ", i + 1, s.label),
                    self.theme.chip(active == Some(i)),
                )
            })
            .collect();
        lines.push(Line::from(chips));
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_recurrence(&self, f: &mut Frame, area: Rect) {
        let locale = &self.settings.locale;
        let rule = &self.draft.recurrence;
        let mut lines: Vec<Line> = RecurrenceKind::ALL
            .iter()
            .map(|kind| {
                let active = *kind == rule.kind;
                let marker = if active { "(•) " } else { "( ) " };
                Line::from(Span::styled(
                    format!("{marker}{}", kind_label(*kind, locale)),
                    self.theme.label(active),
                ))
            })
            .collect();
        lines.push(Line::from(""));
        if rule.kind == RecurrenceKind::Weekly {
            let days: Vec<Span> = (0..7u8)
                .map(|d| {
                    let mut style = self.theme.chip(rule.has_week_day(d));
                    if d == self.weekday_cursor {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    Span::styled(format!(" {} ", locale.weekday_initial(d)), style)
                })
                .collect();
            lines.push(Line::from(days));
        }
        if rule.kind != RecurrenceKind::None {
            let end = match (rule.end_after(), rule.end_date()) {
                (Some(n), _) => format!("{n} {}", locale.times_suffix),
                (None, Some(date)) => format_long(date, locale),
                (None, None) => locale.never_label.clone(),
            };
            lines.push(Line::from(format!("Fin : {end}")));
            let choices: Vec<Span> = self
                .recurrence
                .end_after_choices()
                .iter()
                .map(|n| Span::styled(format!(" {n} "), self.theme.chip(rule.end_after() == Some(*n))))
                .collect();
            lines.push(Line::from(choices));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_participants(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .contacts
            .contacts()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let checked = ContactPicker::is_selected(&self.draft.participants, &c.id);
                let mark = if checked { "[x]" } else { "[ ]" };
                let role = c.role.as_deref().map(|r| format!(" · {r}")).unwrap_or_default();
                Line::from(Span::styled(
                    format!("{mark} {:<2} {}{role}", c.initials(), c.name),
                    self.theme.label(i == self.contact_cursor),
                ))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_location(&self, f: &mut Frame, area: Rect) {
        let locale = &self.settings.locale;
        let mut lines = vec![Line::from(format!("> {}_", self.location_query)), Line::from("")];
        for (i, entry) in self.location_entries().iter().enumerate() {
            let name = if self.location.is_current(entry) {
                format!("📍 {} ({})", locale.current_position_label, entry.name)
            } else {
                entry.name.clone()
            };
            lines.push(Line::from(Span::styled(
                name,
                self.theme.label(i == self.location_cursor),
            )));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_amount(&self, f: &mut Frame, area: Rect) {
        let chips: Vec<Span> = self
            .amount
            .frequent_amounts()
            .iter()
            .map(|a| {
                Span::styled(
                    format!(" {} ", self.amount.display(*a)),
                    self.theme.chip(*a == self.draft.amount),
                )
            })
            .collect();
        let lines = vec![
            Line::from(format!("> {}_", self.amount.text())),
            Line::from(Span::styled(
                self.amount.display(self.draft.amount),
                self.theme.muted(),
            )),
            Line::from(""),
            Line::from(chips),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_match_count(&self, f: &mut Frame, area: Rect) {
        let value = self.draft.match_count;
        let minus = self.theme.chip(self.stepper.can_decrement(value));
        let plus = self.theme.chip(self.stepper.can_increment(value));
        let quick: Vec<Span> = self
            .stepper
            .quick_values()
            .into_iter()
            .enumerate()
            .map(|(i, v)| Span::styled(format!(" {}:{v} ", i + 1), self.theme.chip(v == value)))
            .collect();
        let lines = vec![
            Line::from(vec![
                Span::styled(" - ", minus),
                Span::raw(format!("  {}  ", self.stepper.display(value))),
                Span::styled(" + ", plus),
            ]),
            Line::from(""),
            Line::from(quick),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let locale = &self.settings.locale;
        let value = &self.draft.title;
        let limit = self
            .title
            .max_length()
            .map(|max| format!("  {}/{max}", value.chars().count()))
            .unwrap_or_default();
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(vec![
                Span::raw(format!("> {value}_")),
                Span::styled(limit, self.theme.muted()),
            ]),
            Line::from(""),
        ];
        let mut row = 0;
        let mut entry = |lines: &mut Vec<Line<'static>>, text: String| {
            lines.push(Line::from(Span::styled(
                text,
                self.theme.label(row == self.title_cursor),
            )));
            row += 1;
        };
        match self.title.entries(value, &self.draft.recent_titles) {
            TextEntries::Recent(recent, templates) => {
                if !recent.is_empty() {
                    lines.push(Line::from(Span::styled(
                        locale.recent_label.clone(),
                        self.theme.muted(),
                    )));
                    for item in recent {
                        entry(&mut lines, format!("🕐 {item}"));
                    }
                }
                if !templates.is_empty() {
                    lines.push(Line::from(Span::styled(
                        locale.templates_label.clone(),
                        self.theme.muted(),
                    )));
                    for t in templates {
                        entry(&mut lines, format!("{} {}", t.emoji, t.label));
                    }
                }
            }
            TextEntries::Suggestions(items) => {
                for item in items {
                    entry(&mut lines, item.to_string());
                }
            }
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_notes(&self, f: &mut Frame, area: Rect) {
        let locale = &self.settings.locale;
        let value = &self.draft.notes;
        let mut lines: Vec<Line> = Vec::new();
        if self.notes.shows_templates(value) {
            lines.push(Line::from(Span::styled(
                locale.templates_label.to_uppercase(),
                self.theme.muted(),
            )));
            for (i, t) in self.notes.templates().iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("{} {}", t.emoji, t.title),
                    self.theme.label(i == self.note_cursor),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("✏️ {}", locale.free_note_label),
                self.theme.muted(),
            )));
        } else {
            let mut body: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
            if let Some(last) = body.last_mut() {
                last.push_span(Span::raw("_"));
            }
            lines.extend(body);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                notes_input::counter_text(value, locale),
                self.theme.muted(),
            )));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let keys = match self.focus {
            Field::TournamentDate | Field::BirthDate => "←/→ colonne  ↑/↓ défiler  Suppr vider",
            Field::StartTime => "←/→ colonne  ↑/↓ défiler  1-9 raccourcis",
            Field::SessionDate => "flèches jour  </> mois  Début/Fin  1-4 raccourcis  Suppr vider",
            Field::Recurrence => "↑/↓ type  ←/→ jour  Espace cocher  e nombre  d date  n jamais",
            Field::Surface => "↑/↓ défiler",
            Field::Participants => "↑/↓ choisir  Espace cocher",
            Field::Location => "taper pour filtrer  ↑/↓ choisir  Entrée valider  Suppr vider",
            Field::Amount => "taper le montant  ↑/↓ montants fréquents",
            Field::MatchCount => "+/- ajuster  1-9 valeurs rapides",
            Field::Title => "taper le titre  ↑/↓ choisir  Entrée valider  Suppr vider",
            Field::Notes if self.notes.shows_templates(&self.draft.notes) => {
                "↑/↓ modèle  Entrée appliquer  taper pour une note libre"
            }
            Field::Notes => "taper la note  Entrée nouvelle ligne  Suppr effacer",
        };
        let help = Line::from(vec![
            Span::styled(format!(" {keys} "), self.theme.muted()),
            Span::raw(" Tab champ suivant  Échap enregistrer et quitter"),
        ]);
        f.render_widget(
            Paragraph::new(help).block(Block::default().borders(Borders::TOP)),
            area,
        );
    }
}

/// Three-row wheel window; a blank line keeps the centered row in the middle
/// when the wheel sits on its first item.
fn wheel_lines<V: Clone + PartialEq + Debug>(
    wheel: &WheelSelector<V>,
    theme: &Theme,
    focused: bool,
) -> Vec<Line<'static>> {
    let rows = wheel.visible_rows();
    let mut lines = Vec::with_capacity(3);
    if rows.first().is_some_and(|r| r.centered) {
        lines.push(Line::from(""));
    }
    for row in &rows {
        lines.push(Line::from(Span::styled(
            format!(" {} ", row.label),
            theme.wheel_row(row, focused),
        )));
    }
    lines
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) => {
                    if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) => app.handle_mouse(mouse.kind, mouse.row),
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::init::sample_settings;
    use crate::data::RecurrenceEnd;
    use ratatui::backend::TestBackend;
    use std::collections::BTreeSet;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_test_app(draft: &mut FormDraft, today: NaiveDate) -> App<'_> {
        App::new(
            draft,
            sample_settings(),
            today,
            NaiveTime::from_hms_opt(10, 7, 0).unwrap(),
        )
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(*code, KeyModifiers::empty());
        }
    }

    fn focus(app: &mut App, field: Field) {
        while app.focus != field {
            app.handle_key(KeyCode::Tab, KeyModifiers::empty());
        }
    }

    // ── navigation ────────────────────────────────────────────────────────────

    #[test]
    fn test_tab_cycles_fields() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        assert_eq!(app.focus, Field::TournamentDate);
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.focus, Field::StartTime);
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.focus, Field::Notes);
    }

    #[test]
    fn test_quit_keys() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        assert!(app.handle_key(KeyCode::Char('q'), KeyModifiers::empty()));
        assert!(app.handle_key(KeyCode::Esc, KeyModifiers::empty()));
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_q_is_typed_in_text_fields() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Location);
        assert!(!app.handle_key(KeyCode::Char('q'), KeyModifiers::empty()));
        assert_eq!(app.location_query, "q");
    }

    // ── dates ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_date_starts_from_today() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.draft.tournament_date, "2025-03-09");
    }

    #[test]
    fn test_month_change_clamps_day_in_leap_year() {
        let mut draft = FormDraft {
            tournament_date: "2024-01-31".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        press(&mut app, &[KeyCode::Right, KeyCode::Down]);
        assert_eq!(app.draft.tournament_date, "2024-02-29");
        assert_eq!(app.tournament.days().items().len(), 29);
    }

    #[test]
    fn test_birth_date_uses_french_format() {
        let mut draft = FormDraft {
            birth_date: "15/06/2010".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::BirthDate);
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Up]);
        assert_eq!(app.draft.birth_date, "15/06/2009");
    }

    #[test]
    fn test_delete_clears_date() {
        let mut draft = FormDraft {
            tournament_date: "2025-05-01".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        press(&mut app, &[KeyCode::Delete]);
        assert!(app.draft.tournament_date.is_empty());
    }

    // ── time ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_unaligned_minute_then_wheel_moves() {
        let mut draft = FormDraft {
            start_time: "10:37".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::StartTime);
        assert_eq!(app.draft.start_time, "10:37");
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.draft.start_time, "11:37");
        press(&mut app, &[KeyCode::Right, KeyCode::Down]);
        assert_eq!(app.draft.start_time, "11:45");
    }

    #[test]
    fn test_time_shortcuts_and_common_times() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::StartTime);
        press(&mut app, &[KeyCode::Char('1')]);
        assert_eq!(app.draft.start_time, "10:00");
        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.draft.start_time, "11:00");
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.draft.start_time, "18:00");
        press(&mut app, &[KeyCode::Char('4')]);
        assert_eq!(app.draft.start_time, "09:00");
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.draft.start_time, "18:00");
    }

    // ── calendar ──────────────────────────────────────────────────────────────

    #[test]
    fn test_calendar_arrows_respect_min_date() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::SessionDate);
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 9)));
        press(&mut app, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 8)));
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.draft.session_date, Some(d(2025, 4, 5)));
        assert_eq!(app.calendar.view(), (2025, 4));
    }

    #[test]
    fn test_calendar_shortcut_recenters() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::SessionDate);
        press(&mut app, &[KeyCode::Char('>'), KeyCode::Char('>')]);
        assert_eq!(app.calendar.view(), (2025, 5));
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 8)));
        assert_eq!(app.calendar.view(), (2025, 3));
    }

    #[test]
    fn test_calendar_home_end_pick_open_days_of_viewed_month() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::SessionDate);
        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 8)));
        press(&mut app, &[KeyCode::End]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 31)));
        press(&mut app, &[KeyCode::Char('<'), KeyCode::Home]);
        assert_eq!(app.draft.session_date, Some(d(2025, 3, 31)));
    }

    #[test]
    fn test_session_value_is_flagged_when_near() {
        let mut draft = FormDraft {
            session_date: Some(d(2025, 3, 9)),
            ..Default::default()
        };
        let app = make_test_app(&mut draft, d(2025, 3, 8));
        assert_eq!(app.field_value(Field::SessionDate), "9 mars 2025 (bientôt)");
    }

    // ── mouse ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_mouse_drag_scrolls_hour_wheel() {
        let mut draft = FormDraft {
            start_time: "10:00".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::StartTime);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 10);
        app.handle_mouse(MouseEventKind::Drag(MouseButton::Left), 9);
        assert_eq!(app.draft.start_time, "11:00");
        app.handle_mouse(MouseEventKind::Drag(MouseButton::Left), 8);
        app.handle_mouse(MouseEventKind::Up(MouseButton::Left), 8);
        assert_eq!(app.draft.start_time, "12:00");
        assert_eq!(app.time.hours().offset(), 12.0 * app.time.hours().row_height());
    }

    #[test]
    fn test_mouse_drag_past_the_end_snaps_to_last_surface() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Surface);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 20);
        app.handle_mouse(MouseEventKind::Drag(MouseButton::Left), 0);
        app.handle_mouse(MouseEventKind::Up(MouseButton::Left), 0);
        assert_eq!(app.draft.surface, "indoor");
    }

    #[test]
    fn test_tab_mid_drag_commits_on_the_dragged_wheel() {
        let mut draft = FormDraft {
            start_time: "10:00".to_string(),
            surface: "clay".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::StartTime);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 10);
        app.handle_mouse(MouseEventKind::Drag(MouseButton::Left), 9);
        assert!(app.time.hours().is_dragging());
        press(&mut app, &[KeyCode::Tab]);
        assert!(app.drag.is_none());
        assert!(!app.time.hours().is_dragging());
        assert_eq!(app.draft.start_time, "11:00");

        // The release lands on the new field and is ignored.
        app.handle_mouse(MouseEventKind::Up(MouseButton::Left), 0);
        assert_eq!(app.draft.surface, "clay");
        assert_eq!(app.draft.start_time, "11:00");
    }

    #[test]
    fn test_column_change_mid_drag_ends_drag() {
        let mut draft = FormDraft {
            start_time: "10:00".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::StartTime);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 10);
        app.handle_mouse(MouseEventKind::Drag(MouseButton::Left), 8);
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.time_column, TimeColumn::Minute);
        assert!(!app.time.hours().is_dragging());
        assert_eq!(app.time.hours().offset(), 12.0 * app.time.hours().row_height());
        press(&mut app, &[KeyCode::Left, KeyCode::Down]);
        assert_eq!(app.draft.start_time, "13:00");
    }

    #[test]
    fn test_mouse_ignored_outside_wheels() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Participants);
        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), 5);
        assert!(app.drag.is_none());
        app.handle_mouse(MouseEventKind::ScrollDown, 5);
        assert_eq!(app.contact_cursor, 1);
    }

    // ── recurrence ────────────────────────────────────────────────────────────

    #[test]
    fn test_recurrence_weekly_flow() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Recurrence);
        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.draft.recurrence.kind, RecurrenceKind::Weekly);
        assert_eq!(app.draft.recurrence.week_days, Some(BTreeSet::from([0])));

        press(&mut app, &[KeyCode::Char(' ')]);
        assert_eq!(app.draft.recurrence.week_days, Some(BTreeSet::from([0])));

        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Char(' ')]);
        assert_eq!(app.draft.recurrence.week_days, Some(BTreeSet::from([0, 2])));

        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.draft.recurrence.kind, RecurrenceKind::Daily);
        assert_eq!(app.draft.recurrence.week_days, None);
    }

    #[test]
    fn test_recurrence_end_cycle() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Recurrence);
        press(&mut app, &[KeyCode::Char('e')]);
        assert_eq!(app.draft.recurrence.end, RecurrenceEnd::Never);

        press(&mut app, &[KeyCode::Down, KeyCode::Char('e')]);
        assert_eq!(app.draft.recurrence.end, RecurrenceEnd::After(5));
        press(&mut app, &[KeyCode::Char('e'), KeyCode::Char('e')]);
        assert_eq!(app.draft.recurrence.end, RecurrenceEnd::After(20));
        press(&mut app, &[KeyCode::Char('e')]);
        assert_eq!(app.draft.recurrence.end, RecurrenceEnd::Never);
        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.draft.recurrence.end, RecurrenceEnd::On(d(2025, 4, 8)));
    }

    // ── other inputs ──────────────────────────────────────────────────────────

    #[test]
    fn test_surface_wheel() {
        let mut draft = FormDraft {
            surface: "clay".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Surface);
        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.draft.surface, "grass");
        assert_eq!(app.field_value(Field::Surface), "Gazon");
    }

    #[test]
    fn test_participants_toggle() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Participants);
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(app.draft.participants, vec!["staff-1", "staff-2"]);
        press(&mut app, &[KeyCode::Up, KeyCode::Char(' ')]);
        assert_eq!(app.draft.participants, vec!["staff-2"]);
        assert_eq!(app.field_value(Field::Participants), "1 participant sélectionné");
    }

    #[test]
    fn test_location_filter_and_pick() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Location);
        for c in "lyon".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.draft.location.as_ref().unwrap().name, "TC Lyon");
        assert!(app.location_query.is_empty());
        assert!(app.field_value(Field::Location).starts_with("TC Lyon ("));

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.draft.location.as_ref().unwrap().name, "Paris, France");
        press(&mut app, &[KeyCode::Delete]);
        assert!(app.draft.location.as_ref().unwrap().is_empty());
        assert_eq!(app.field_value(Field::Location), "--");
    }

    #[test]
    fn test_amount_typing() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Amount);
        for c in "12,5".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        assert_eq!(app.draft.amount, 12.5);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.draft.amount, 15.0);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.draft.amount, 25.0);
    }

    #[test]
    fn test_match_count_stepper() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::MatchCount);
        press(&mut app, &[KeyCode::Char('-')]);
        assert_eq!(app.draft.match_count, 0);
        press(&mut app, &[KeyCode::Char('+'), KeyCode::Up]);
        assert_eq!(app.draft.match_count, 2);
        press(&mut app, &[KeyCode::Char('4')]);
        assert_eq!(app.draft.match_count, 10);
        assert_eq!(app.field_value(Field::MatchCount), "10 matchs");
    }

    #[test]
    fn test_title_suggestions_and_recent() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Title);
        for c in "MATCH".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.draft.title, "Match de tournoi");
        assert_eq!(app.draft.recent_titles, vec!["Match de tournoi"]);

        press(&mut app, &[KeyCode::Delete]);
        assert_eq!(app.field_value(Field::Title), "--");
        // Empty text: recent first, then templates.
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.draft.title, "Entraînement");
        assert_eq!(app.draft.recent_titles, vec!["Entraînement", "Match de tournoi"]);
    }

    #[test]
    fn test_title_keeps_typed_text_and_max_length() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Title);
        for c in "Qx".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.draft.title, "Qx");
        for _ in 0..80 {
            press(&mut app, &[KeyCode::Char('a')]);
        }
        assert_eq!(app.draft.title.chars().count(), 60);
        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.draft.title.chars().count(), 59);
    }

    #[test]
    fn test_notes_template_then_free_editing() {
        let mut draft = FormDraft::default();
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        focus(&mut app, Field::Notes);
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.draft.notes, "1. \n2. \n3. ");
        press(&mut app, &[KeyCode::Char('x'), KeyCode::Enter]);
        assert_eq!(app.draft.notes, "1. \n2. \n3. x\n");
        assert_eq!(app.field_value(Field::Notes), "1. (13 caractères)");

        press(&mut app, &[KeyCode::Delete]);
        assert!(app.draft.notes.is_empty());
        assert_eq!(app.field_value(Field::Notes), "--");
        press(&mut app, &[KeyCode::Char('q')]);
        assert_eq!(app.draft.notes, "q");
    }

    // ── rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_render_every_field() {
        let mut draft = FormDraft {
            tournament_date: "2025-03-05".to_string(),
            ..Default::default()
        };
        let mut app = make_test_app(&mut draft, d(2025, 3, 8));
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        for _ in Field::ALL {
            terminal.draw(|f| app.render(f)).unwrap();
            press(&mut app, &[KeyCode::Tab]);
        }
        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tournoi"));
        assert!(text.contains("5 mars 2025"));
    }
}
