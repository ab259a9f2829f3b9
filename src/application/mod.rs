//! Application layer orchestrating the calculator.
//!
//! This module defines the `CalculatorEngine` which acts as the primary entry point
//! for input adapters. It owns the single `CalculatorState` and swaps it wholesale
//! on every command, so a command is never observed half-applied.

pub mod engine;
