use crate::domain::command::{Command, Digit};
use crate::domain::operator::Operator;
use crate::error::{CalcError, Result};

/// Maps a key name to the command it triggers.
///
/// Digits, `+ - * / =`, `.` and `%` map to themselves; `Enter` is `=`;
/// `Clear` and `Escape` are the clear key; `~` and `Negate` toggle the sign.
/// Any other key maps to nothing.
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Enter" => return Some(Command::Operation(Operator::Equals)),
        "Backspace" => return Some(Command::Backspace),
        "Clear" | "Escape" => return Some(Command::Clear),
        "Negate" => return Some(Command::ToggleSign),
        _ => {}
    }

    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    match c {
        '.' => Some(Command::Dot),
        '%' => Some(Command::Percent),
        '~' => Some(Command::ToggleSign),
        _ => Digit::try_from(c)
            .ok()
            .map(Command::Digit)
            .or_else(|| Operator::from_symbol(c).map(Command::Operation)),
    }
}

/// Splits an inline key string into key names.
///
/// Every character is a key, except that `{Name}` spells a named key such as
/// `{Enter}` or `{Backspace}`. Whitespace between keys is ignored.
pub fn parse_key_sequence(keys: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut chars = keys.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '{' {
            out.push(c.to_string());
            continue;
        }

        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(n) => name.push(n),
                None => {
                    return Err(CalcError::ValidationError(format!(
                        "Unterminated key name '{{{name}'"
                    )));
                }
            }
        }
        if name.is_empty() {
            return Err(CalcError::ValidationError("Empty key name '{}'".to_string()));
        }
        out.push(name);
    }

    Ok(out)
}
