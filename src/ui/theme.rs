use crate::widget::calendar_picker::DayCell;
use crate::widget::WheelRow;
use ratatui::style::{Color, Modifier, Style};

/// Colors for every widget in the form, as plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub section_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: Color::Indexed(208),
            text: Color::White,
            muted: Color::DarkGray,
            selected_fg: Color::Black,
            selected_bg: Color::Indexed(208),
            section_bg: Color::Rgb(40, 44, 52),
        }
    }
}

impl Theme {
    pub fn label(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .bg(self.section_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Chip style for shortcuts, toggles and quick values.
    pub fn chip(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// The centered row is highlighted; the selected row is bold even when the
    /// wheel is mid-drag elsewhere.
    pub fn wheel_row(&self, row: &WheelRow, column_focused: bool) -> Style {
        let mut style = if row.centered {
            Style::default().fg(self.text)
        } else {
            Style::default().fg(self.muted)
        };
        if row.selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        if row.centered && column_focused {
            style = style.fg(self.selected_fg).bg(self.selected_bg);
        }
        style
    }

    /// Priority: selected, disabled, today, weekend, plain.
    pub fn day_cell(&self, cell: &DayCell) -> Style {
        if cell.is_selected {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if cell.is_disabled {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        } else if cell.is_today {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else if cell.is_weekend {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.text)
        }
    }
}
