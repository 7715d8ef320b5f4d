use crate::error::FormatError;

/// Keeps digits and decimal separators, turning the first comma into a dot
/// (`"12,50 €"` → `"12.50"`).
pub fn sanitize_amount(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    kept.replacen(',', ".", 1)
}

/// Parses sanitized input. Empty input is zero; a leading number is accepted even
/// when trailing junk follows (`"12.5.3"` → 12.5).
pub fn parse_amount(text: &str) -> Result<f64, FormatError> {
    let clean = sanitize_amount(text);
    if clean.is_empty() {
        return Ok(0.0);
    }
    let mut seen_dot = false;
    let prefix: String = clean
        .chars()
        .take_while(|c| {
            if *c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
            }
            c.is_ascii_digit() || *c == '.'
        })
        .collect();
    prefix
        .parse()
        .map_err(|_| FormatError::MalformedAmount(text.to_string()))
}

/// French display: narrow no-break space for thousands, comma for decimals, at most
/// three fraction digits, symbol after the amount (`1 234,5 €`). Zero and negative
/// amounts display as `0 €`.
pub fn format_amount(value: f64, currency: &str) -> String {
    if !(value > 0.0) {
        return format!("0 {currency}");
    }
    let fixed = format!("{value:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202F}');
        }
        grouped.push(*c);
    }
    if frac.is_empty() {
        format!("{grouped} {currency}")
    } else {
        format!("{grouped},{frac} {currency}")
    }
}
