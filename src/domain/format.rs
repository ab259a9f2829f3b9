//! Display formatting.
//!
//! Turns the engine's display text into what the user sees: grouped integer
//! digits, at most six fractional digits, and any trailing zeros the user
//! typed (which plain numeric formatting would drop).

use super::locale::Locale;
use super::number::{number_to_string, parse_float, round_shortest};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Fractional part of a display value, with its trailing zero run captured.
    static ref TRAILING_ZEROS: Regex = Regex::new(r"\.[0-9]*?(0*)$").unwrap();
}

/// Stateless, locale-aware display formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormatter {
    locale: Locale,
    max_fraction_digits: u32,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl DisplayFormatter {
    pub const MAX_FRACTION_DIGITS: u32 = 6;

    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            max_fraction_digits: Self::MAX_FRACTION_DIGITS,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Formats raw display text.
    ///
    /// The text is parsed leniently and rendered with grouping. If it ends in
    /// a fractional part, the zeros the user typed at its end are put back; a
    /// fractional part made only of zeros (or a bare `.`) is put back whole.
    pub fn format(&self, raw: &str) -> String {
        let mut formatted = self.format_number(parse_float(raw));

        if let Some(captures) = TRAILING_ZEROS.captures(raw) {
            let fraction = captures.get(0).map_or("", |m| m.as_str());
            let zeros = captures.get(1).map_or("", |m| m.as_str());

            if fraction.bytes().any(|b| matches!(b, b'1'..=b'9')) {
                formatted.push_str(zeros);
            } else {
                formatted.push_str(self.locale.decimal_separator());
                formatted.push_str(&fraction[1..]);
            }
        }

        formatted
    }

    /// Formats a number through its default string form.
    pub fn format_value(&self, value: f64) -> String {
        self.format(&number_to_string(value))
    }

    fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let rounded = round_shortest(value.abs(), self.max_fraction_digits);
        let (integer, fraction) = rounded.split_once('.').unwrap_or((&rounded, ""));
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::new();
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&self.locale.group_digits(integer));
        if !fraction.is_empty() {
            out.push_str(self.locale.decimal_separator());
            out.push_str(fraction);
        }
        out
    }
}
