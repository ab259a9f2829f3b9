use crate::domain::command::{Command, Digit};
use crate::domain::operator::Operator;
use crate::error::{CalcError, Result};
use crate::interfaces::keyboard::command_for_key;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Digit,
    Dot,
    Percent,
    Sign,
    Operator,
    Backspace,
    Clear,
    ClearDisplay,
    ClearAll,
    Key,
}

/// One row of a keystroke script.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub command: CommandKind,
    #[serde(default)]
    pub arg: Option<String>,
}

impl CommandRecord {
    fn required_arg(&self) -> Result<&str> {
        self.arg.as_deref().ok_or_else(|| {
            CalcError::ValidationError(format!("{:?} command missing argument", self.command))
        })
    }
}

impl TryFrom<CommandRecord> for Command {
    type Error = CalcError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        let command = match record.command {
            CommandKind::Digit => {
                let arg = record.required_arg()?;
                let value: u8 = arg.parse().map_err(|_| {
                    CalcError::ValidationError(format!("'{arg}' is not a digit"))
                })?;
                Command::Digit(Digit::new(value)?)
            }
            CommandKind::Dot => Command::Dot,
            CommandKind::Percent => Command::Percent,
            CommandKind::Sign => Command::ToggleSign,
            CommandKind::Operator => {
                Command::Operation(record.required_arg()?.parse::<Operator>()?)
            }
            CommandKind::Backspace => Command::Backspace,
            CommandKind::Clear => Command::Clear,
            CommandKind::ClearDisplay => Command::ClearDisplay,
            CommandKind::ClearAll => Command::ClearAll,
            CommandKind::Key => {
                let key = record.required_arg()?;
                command_for_key(key).ok_or_else(|| {
                    CalcError::ValidationError(format!("Key '{key}' is not mapped to a command"))
                })?
            }
        };
        Ok(command)
    }
}

/// Reads engine commands from a CSV keystroke script.
///
/// The script has a `command,arg` header. Fields are trimmed and rows may omit
/// the trailing `arg` column.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates commands.
    ///
    /// A malformed row yields an error for that row only; reading continues
    /// with the next one.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize::<CommandRecord>()
            .map(|result| result.map_err(CalcError::from).and_then(Command::try_from))
    }
}
