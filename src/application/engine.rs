use crate::domain::command::{Command, Digit};
use crate::domain::format::DisplayFormatter;
use crate::domain::operator::Operator;
use crate::domain::state::CalculatorState;

/// Legend of the clear key when it would clear only the entry.
pub const CLEAR_ENTRY_LABEL: &str = "C";
/// Legend of the clear key when it would reset everything.
pub const CLEAR_ALL_LABEL: &str = "AC";

/// The main entry point for driving the calculator.
///
/// `CalculatorEngine` exclusively owns the calculator state. Each command
/// computes the next state from the current one and replaces it, so callers
/// only ever see complete transitions. It is meant for a single caller that
/// feeds commands one at a time.
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in the initial state (`0` on display, nothing pending).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine resuming from an existing state.
    pub fn with_state(state: CalculatorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display_value(&self) -> &str {
        &self.state.display_value
    }

    /// The display as the user sees it.
    pub fn formatted_display(&self, formatter: &DisplayFormatter) -> String {
        formatter.format(&self.state.display_value)
    }

    /// Legend for the clear key: `C` while there is an entry to clear, `AC`
    /// once the display is back at `0`.
    pub fn clear_label(&self) -> &'static str {
        if self.state.is_entry_clearable() {
            CLEAR_ENTRY_LABEL
        } else {
            CLEAR_ALL_LABEL
        }
    }

    /// Consumes the engine and returns its final state.
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Applies one command.
    ///
    /// `Command::Clear` resolves against the current display: it clears the
    /// entry when there is one, and resets everything otherwise.
    pub fn dispatch(&mut self, command: Command) {
        let next = match command {
            Command::Digit(digit) => self.state.input_digit(digit),
            Command::Dot => self.state.input_dot(),
            Command::Percent => self.state.input_percent(),
            Command::ToggleSign => self.state.toggle_sign(),
            Command::Operation(op) => self.state.perform_operation(op),
            Command::ClearDisplay => self.state.clear_display(),
            Command::ClearAll => self.state.clear_all(),
            Command::Backspace => self.state.backspace(),
            Command::Clear if self.state.is_entry_clearable() => self.state.clear_display(),
            Command::Clear => self.state.clear_all(),
        };

        tracing::debug!(
            %command,
            display = %next.display_value,
            operator = ?next.operator,
            waiting_for_operand = next.waiting_for_operand,
            "applied command"
        );

        self.state = next;
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.dispatch(Command::Digit(digit));
    }

    pub fn input_dot(&mut self) {
        self.dispatch(Command::Dot);
    }

    pub fn input_percent(&mut self) {
        self.dispatch(Command::Percent);
    }

    pub fn toggle_sign(&mut self) {
        self.dispatch(Command::ToggleSign);
    }

    pub fn perform_operation(&mut self, operator: Operator) {
        self.dispatch(Command::Operation(operator));
    }

    pub fn clear_display(&mut self) {
        self.dispatch(Command::ClearDisplay);
    }

    pub fn clear_all(&mut self) {
        self.dispatch(Command::ClearAll);
    }

    pub fn backspace(&mut self) {
        self.dispatch(Command::Backspace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    #[test]
    fn test_engine_starts_cleared() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.state(), &CalculatorState::new());
        assert_eq!(engine.display_value(), "0");
        assert_eq!(engine.clear_label(), "AC");
    }

    #[test]
    fn test_engine_addition() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit(digit(5));
        engine.perform_operation(Operator::Add);
        engine.input_digit(digit(3));
        engine.perform_operation(Operator::Equals);

        assert_eq!(engine.display_value(), "8");
    }

    #[test]
    fn test_engine_chained_subtraction() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit(digit(6));
        engine.perform_operation(Operator::Subtract);
        engine.input_digit(digit(2));
        engine.perform_operation(Operator::Subtract);
        engine.input_digit(digit(1));
        engine.perform_operation(Operator::Equals);

        assert_eq!(engine.display_value(), "3");
        assert_eq!(engine.state().value, Some(3.0));
    }

    #[test]
    fn test_smart_clear_clears_entry_first() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit(digit(9));
        engine.perform_operation(Operator::Multiply);
        engine.input_digit(digit(4));
        assert_eq!(engine.clear_label(), "C");

        engine.dispatch(Command::Clear);
        assert_eq!(engine.display_value(), "0");
        assert_eq!(engine.state().operator, Some(Operator::Multiply));
        assert_eq!(engine.clear_label(), "AC");

        engine.dispatch(Command::Clear);
        assert_eq!(engine.state(), &CalculatorState::new());
    }

    #[test]
    fn test_clear_all_after_long_history() {
        let mut engine = CalculatorEngine::new();
        for d in 1..=9 {
            engine.input_digit(digit(d));
            engine.perform_operation(Operator::Add);
        }
        engine.input_percent();
        engine.toggle_sign();
        engine.input_dot();
        engine.clear_all();

        assert_eq!(engine.into_state(), CalculatorState::new());
    }

    #[test]
    fn test_formatted_display() {
        let mut engine = CalculatorEngine::new();
        for d in [1, 2, 3, 4] {
            engine.input_digit(digit(d));
        }
        engine.input_dot();
        engine.input_digit(digit(5));
        engine.input_digit(digit(0));

        let formatter = DisplayFormatter::default();
        assert_eq!(engine.display_value(), "1234.50");
        assert_eq!(engine.formatted_display(&formatter), "1,234.50");
    }

    #[test]
    fn test_backspace_and_clear_display() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit(digit(7));
        engine.backspace();
        assert_eq!(engine.display_value(), "0");

        engine.input_digit(digit(3));
        engine.clear_display();
        assert_eq!(engine.display_value(), "0");
    }

    #[test]
    fn test_with_state_resumes() {
        let state = CalculatorState::new()
            .input_digit(digit(2))
            .perform_operation(Operator::Multiply);
        let mut engine = CalculatorEngine::with_state(state);
        engine.input_digit(digit(5));
        engine.perform_operation(Operator::Equals);
        assert_eq!(engine.display_value(), "10");
    }
}
