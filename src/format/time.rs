use crate::data::TimeValue;
use crate::error::FormatError;

pub fn format_time(value: TimeValue) -> String {
    format!("{:02}:{:02}", value.hour, value.minute)
}

/// Strict `HH:MM` (one or two digits per field).
pub fn parse_time(raw: &str) -> Result<TimeValue, FormatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormatError::Empty);
    }
    let malformed = || FormatError::MalformedTime(raw.to_string());
    let (h, m) = raw.split_once(':').ok_or_else(malformed)?;
    let hour: u32 = h.parse().map_err(|_| malformed())?;
    let minute: u32 = m.parse().map_err(|_| malformed())?;
    if hour > 23 || minute > 59 {
        return Err(FormatError::TimeOutOfRange { hour, minute });
    }
    Ok(TimeValue { hour, minute })
}

/// Lenient parse used by the picker: anything unparsable shows 09:00.
pub fn parse_time_or_default(raw: &str) -> TimeValue {
    parse_time(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads() {
        assert_eq!(format_time(TimeValue::new(7, 5)), "07:05");
    }

    #[test]
    fn test_parse_accepts_single_digits() {
        assert_eq!(parse_time("9:5").unwrap(), TimeValue::new(9, 5));
        assert_eq!(parse_time(" 18:30 ").unwrap(), TimeValue::new(18, 30));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            parse_time("24:00"),
            Err(FormatError::TimeOutOfRange { hour: 24, minute: 0 })
        );
        assert!(parse_time("12:60").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(parse_time("noon"), Err(FormatError::MalformedTime(_))));
        assert!(matches!(parse_time("12:3x"), Err(FormatError::MalformedTime(_))));
        assert_eq!(parse_time(""), Err(FormatError::Empty));
    }

    #[test]
    fn test_lenient_parse_defaults_to_nine() {
        assert_eq!(parse_time_or_default(""), TimeValue::new(9, 0));
        assert_eq!(parse_time_or_default("bad"), TimeValue::new(9, 0));
        assert_eq!(parse_time_or_default("14:15"), TimeValue::new(14, 15));
    }
}
