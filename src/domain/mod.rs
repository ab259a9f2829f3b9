//! Domain layer: the calculator state machine and its number handling.
//!
//! Nothing here performs I/O. Transitions on [`state::CalculatorState`] are
//! pure, and [`format::DisplayFormatter`] is a stateless function of its
//! input and locale.

pub mod command;
pub mod format;
pub mod locale;
pub mod number;
pub mod operator;
pub mod state;
