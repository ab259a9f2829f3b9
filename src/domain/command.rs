use super::operator::Operator;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, CalcError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::ValidationError(format!(
                "Digit must be between 0 and 9, got {value}"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| CalcError::ValidationError(format!("'{value}' is not a digit")))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One engine command, as produced by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(Digit),
    Dot,
    Percent,
    ToggleSign,
    Operation(Operator),
    ClearDisplay,
    ClearAll,
    Backspace,
    /// The clear key: clears the entry, or everything when the entry is
    /// already `0`.
    Clear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Digit(d) => write!(f, "{d}"),
            Command::Dot => write!(f, "."),
            Command::Percent => write!(f, "%"),
            Command::ToggleSign => write!(f, "±"),
            Command::Operation(op) => write!(f, "{op}"),
            Command::ClearDisplay => write!(f, "C"),
            Command::ClearAll => write!(f, "AC"),
            Command::Backspace => write!(f, "⌫"),
            Command::Clear => write!(f, "Clear"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_validation() {
        assert!(Digit::new(0).is_ok());
        assert!(Digit::new(9).is_ok());
        assert!(matches!(
            Digit::new(10),
            Err(CalcError::ValidationError(_))
        ));
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert_eq!(Digit::try_from('0').unwrap().as_char(), '0');
        assert!(Digit::try_from('a').is_err());
    }

    #[test]
    fn test_digit_deserialization_is_validated() {
        let digit: Digit = serde_json::from_str("4").unwrap();
        assert_eq!(digit.value(), 4);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Digit(Digit::new(3).unwrap()).to_string(), "3");
        assert_eq!(Command::Operation(Operator::Divide).to_string(), "/");
        assert_eq!(Command::ClearAll.to_string(), "AC");
    }
}
