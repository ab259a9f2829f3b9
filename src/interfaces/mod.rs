//! Input and output adapters around the engine.

pub mod csv;
pub mod keyboard;
pub mod report;
