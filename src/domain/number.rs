//! Text <-> number conversions used by the calculator.
//!
//! The display buffer is a string, so every arithmetic step goes through a
//! parse and a re-serialization. These helpers pin down exactly how that
//! happens: lenient prefix parsing, shortest round-trip serialization, and
//! fixed-point rendering with half-away-from-zero rounding.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::*;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Magnitudes at or above this always serialize through `number_to_string`.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

lazy_static! {
    /// Sign, integer digits and the decimal point of a display value.
    static ref INTEGER_PART: Regex = Regex::new(r"^-?[0-9]*\.?").unwrap();
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with at most
/// one `.`, and an exponent when it carries at least one digit. `Infinity`
/// (optionally signed) is recognised. Anything without a parsable prefix is
/// `NaN`.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(bytes.get(exp_start..).unwrap_or_default());
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Serializes a number with the shortest digits that round-trip.
///
/// Plain notation is used while the decimal exponent lies in `[-6, 21)`,
/// exponent notation (`1.5e+21`, `1e-7`) outside it. Negative zero prints as
/// `0`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let Some((digits, exponent)) = shortest_digits(value.abs()) else {
        return value.to_string();
    };

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first significant digit.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}

/// Shortest round-trip significand digits of a finite magnitude, and the
/// decimal exponent of the first of them.
fn shortest_digits(magnitude: f64) -> Option<(String, i32)> {
    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    Some((digits, exponent))
}

/// Rounds the shortest decimal form of a non-negative finite magnitude to at
/// most `digits` fractional places, ties away from zero.
///
/// Magnitudes a `Decimal` cannot hold render as their shortest digits padded
/// with zeros, or as `0` when they are too small to show.
pub(crate) fn round_shortest(magnitude: f64, digits: u32) -> String {
    let Some((significand, exponent)) = shortest_digits(magnitude) else {
        return fixed_magnitude(magnitude, digits as usize);
    };
    let shift = exponent + 1 - significand.len() as i32;

    if let Ok(exact) = Decimal::from_scientific(&format!("{significand}e{shift}")) {
        return exact
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
            .to_string();
    }
    if shift >= 0 {
        format!("{significand}{}", "0".repeat(shift as usize))
    } else {
        "0".to_string()
    }
}

/// Renders `value` with exactly `digits` fractional digits.
///
/// Ties round away from zero on the exact binary value. Non-finite values and
/// magnitudes of `1e21` or more fall back to [`number_to_string`].
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= FIXED_NOTATION_LIMIT {
        return number_to_string(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", fixed_magnitude(value.abs(), digits))
}

/// Rounds a non-negative magnitude to `digits` places and renders it with
/// exactly that many fractional digits.
fn fixed_magnitude(magnitude: f64, digits: usize) -> String {
    if let Ok(scale) = u32::try_from(digits)
        && scale <= MAX_DECIMAL_SCALE
        && magnitude < 10f64.powi((MAX_DECIMAL_SCALE - scale) as i32)
        && let Some(exact) = Decimal::from_f64_retain(magnitude)
    {
        let mut rounded =
            exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(scale);
        return rounded.to_string();
    }
    format!("{magnitude:.digits$}")
}

/// Number of characters after the sign, the integer digits and the decimal
/// point of a display value.
pub fn fractional_digits(display_value: &str) -> usize {
    let stripped = INTEGER_PART.replace(display_value, "");
    stripped.chars().count()
}
