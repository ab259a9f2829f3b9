use super::command::Digit;
use super::number::{fractional_digits, number_to_string, parse_float, to_fixed};
use super::operator::Operator;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Display text of a cleared calculator.
pub const ZERO: &str = "0";

/// The whole calculator: stored operand, entry text, pending operator and
/// whether the next digit starts a new entry.
///
/// Every transition is a pure function returning the next state, so callers
/// can snapshot before and after a command and compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand committed by the last operator press.
    pub value: Option<f64>,
    /// Exact text of the current entry. Kept as text so `3.` and `0.500`
    /// survive until the next operator.
    pub display_value: String,
    /// Operator waiting for its right operand.
    pub operator: Option<Operator>,
    /// The next digit replaces the entry instead of extending it.
    pub waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            value: None,
            display_value: ZERO.to_string(),
            operator: None,
            waiting_for_operand: false,
        }
    }

    fn with_display(&self, display_value: String) -> Self {
        Self {
            display_value,
            ..self.clone()
        }
    }

    pub fn input_digit(&self, digit: Digit) -> Self {
        if self.waiting_for_operand {
            return Self {
                display_value: digit.to_string(),
                waiting_for_operand: false,
                ..self.clone()
            };
        }

        if self.display_value == ZERO {
            self.with_display(digit.to_string())
        } else {
            self.with_display(format!("{}{digit}", self.display_value))
        }
    }

    /// Appends a decimal point unless the entry already has one.
    ///
    /// After an operator this extends the operand still on display rather
    /// than starting a fresh `0.` entry.
    pub fn input_dot(&self) -> Self {
        if self.display_value.contains('.') {
            return self.clone();
        }
        Self {
            display_value: format!("{}.", self.display_value),
            waiting_for_operand: false,
            ..self.clone()
        }
    }

    pub fn toggle_sign(&self) -> Self {
        let negated = parse_float(&self.display_value) * -1.0;
        self.with_display(number_to_string(negated))
    }

    /// Divides the entry by 100, keeping the entry's fractional digits plus
    /// the two the division introduces.
    pub fn input_percent(&self) -> Self {
        let current = parse_float(&self.display_value);
        if current == 0.0 {
            return self.clone();
        }
        let digits = fractional_digits(&self.display_value) + 2;
        self.with_display(to_fixed(current / 100.0, digits))
    }

    pub fn backspace(&self) -> Self {
        let mut display_value = self.display_value.clone();
        display_value.pop();
        if display_value.is_empty() {
            display_value = ZERO.to_string();
        }
        self.with_display(display_value)
    }

    pub fn clear_display(&self) -> Self {
        self.with_display(ZERO.to_string())
    }

    pub fn clear_all(&self) -> Self {
        Self::new()
    }

    /// Commits the entry and makes `next` the pending operator.
    ///
    /// With no stored operand the entry simply becomes the operand. With one
    /// stored and an operator pending, the pending operator is applied and the
    /// result replaces both the operand and the entry.
    pub fn perform_operation(&self, next: Operator) -> Self {
        let input = parse_float(&self.display_value);
        let mut state = self.clone();

        match (self.value, self.operator) {
            (None, _) => state.value = Some(input),
            (Some(value), Some(pending)) => {
                // A NaN operand is dropped in favour of zero.
                let lhs = if value.is_nan() { 0.0 } else { value };
                let result = pending.apply(lhs, input);
                state.value = Some(result);
                state.display_value = number_to_string(result);
            }
            (Some(_), None) => {}
        }

        state.operator = Some(next);
        state.waiting_for_operand = true;
        state
    }

    /// `true` when the clear key would only clear the entry.
    pub fn is_entry_clearable(&self) -> bool {
        self.display_value != ZERO
    }

    /// Checks the structural invariants of the state.
    ///
    /// Display text produced by arithmetic on non-finite numbers, or in
    /// exponent notation, is exempt from the numeric-prefix check.
    pub fn check_invariants(&self) -> Result<()> {
        if self.display_value.is_empty() {
            return Err(CalcError::InvariantViolation(
                "display value is empty".to_string(),
            ));
        }

        if self.operator.is_some() && self.value.is_none() {
            return Err(CalcError::InvariantViolation(format!(
                "operator {:?} pending without a stored operand",
                self.operator
            )));
        }

        let display = self.display_value.as_str();
        let special = display.contains(['e', 'N', 'I']);
        if !special && !is_numeric_prefix(display) {
            return Err(CalcError::InvariantViolation(format!(
                "display value '{display}' is not a numeric literal"
            )));
        }

        Ok(())
    }
}

/// Digits with at most one leading `-` and at most one `.`. A lone `-` is what
/// backspace leaves of a negative entry.
fn is_numeric_prefix(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    !text.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
}
