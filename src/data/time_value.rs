use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    pub hour: u32,
    pub minute: u32,
}

impl Default for TimeValue {
    /// 09:00, the picker's fallback when no time has been chosen yet.
    fn default() -> Self {
        TimeValue { hour: 9, minute: 0 }
    }
}

impl TimeValue {
    /// Clamps hour to 0..=23 and minute to 0..=59.
    pub fn new(hour: u32, minute: u32) -> Self {
        TimeValue {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    pub fn with_hour(self, hour: u32) -> Self {
        TimeValue::new(hour, self.minute)
    }

    pub fn with_minute(self, minute: u32) -> Self {
        TimeValue::new(self.hour, minute)
    }
}

/// How an externally supplied minute that is off the wheel's step is shown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MinuteRounding {
    /// `round(minute / step) * step`, halves rounding up.
    #[default]
    Nearest,
    /// `floor(minute / step) * step`.
    Down,
}

impl MinuteRounding {
    /// Step-aligned minute for display. A result of 60 maps to the last slot so the
    /// displayed hour never changes.
    pub fn align(self, minute: u32, step: u32) -> u32 {
        if step == 0 {
            return minute.min(59);
        }
        let minute = minute.min(59);
        let slots = match self {
            MinuteRounding::Nearest => (minute + step / 2) / step,
            MinuteRounding::Down => minute / step,
        };
        (slots * step).min(60 - step)
    }
}
