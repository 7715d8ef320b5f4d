use crate::format::currency::{format_amount, parse_amount, sanitize_amount};
use tracing::debug;

/// Amount field. Keeps the text as typed (sanitized) so partial input such as
/// "12," survives re-rendering; the host stores the parsed number.
#[derive(Debug, Clone)]
pub struct CurrencyInput {
    text: String,
    currency: String,
    frequent_amounts: Vec<f64>,
}

impl CurrencyInput {
    pub fn new(value: f64, currency: &str, frequent_amounts: Vec<f64>) -> Self {
        CurrencyInput {
            text: initial_text(value),
            currency: currency.to_string(),
            frequent_amounts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frequent_amounts(&self) -> &[f64] {
        &self.frequent_amounts
    }

    /// Replaces the text. Returns the parsed amount, or `None` when the text has
    /// no usable number yet (the host keeps its previous value).
    pub fn edit(&mut self, raw: &str) -> Option<f64> {
        self.text = sanitize_amount(raw);
        match parse_amount(&self.text) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(text = %self.text, %err, "amount not parsed yet");
                None
            }
        }
    }

    pub fn push_char(&mut self, c: char) -> Option<f64> {
        let mut raw = self.text.clone();
        raw.push(c);
        self.edit(&raw)
    }

    pub fn backspace(&mut self) -> Option<f64> {
        let mut raw = self.text.clone();
        raw.pop();
        self.edit(&raw)
    }

    pub fn select_amount(&mut self, index: usize) -> Option<f64> {
        let value = *self.frequent_amounts.get(index)?;
        self.text = initial_text(value);
        Some(value)
    }

    pub fn display(&self, value: f64) -> String {
        format_amount(value, &self.currency)
    }
}

fn initial_text(value: f64) -> String {
    if value > 0.0 {
        value.to_string()
    } else {
        String::new()
    }
}
