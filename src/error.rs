use thiserror::Error;

/// Errors raised by the strict value parsers. Widgets never surface these; they
/// use the lenient wrappers which fall back to a sensible default instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("empty input")]
    Empty,

    #[error("malformed date '{0}'")]
    MalformedDate(String),

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("malformed time '{0}'")]
    MalformedTime(String),

    #[error("time out of range {hour:02}:{minute:02}")]
    TimeOutOfRange { hour: u32, minute: u32 },

    #[error("malformed amount '{0}'")]
    MalformedAmount(String),

    #[error("malformed coordinates '{0}'")]
    MalformedCoordinates(String),

    #[error("recurrence rule sets both endAfter and endDate")]
    ConflictingEnd,

    #[error("weekly recurrence needs at least one weekday")]
    EmptyWeekDays,

    #[error("weekday index {0} out of range (0 = Monday .. 6 = Sunday)")]
    WeekdayOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message_is_zero_padded() {
        let err = FormatError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date 2023-02-30");
    }

    #[test]
    fn test_time_out_of_range_message() {
        let err = FormatError::TimeOutOfRange { hour: 24, minute: 5 };
        assert_eq!(err.to_string(), "time out of range 24:05");
    }
}
