use crate::application::engine::CalculatorEngine;
use crate::domain::command::Command;
use crate::domain::format::DisplayFormatter;
use crate::domain::number::number_to_string;
use crate::domain::operator::Operator;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Engine state after one applied command.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TraceRecord {
    pub step: usize,
    pub input: String,
    pub display_value: String,
    pub formatted: String,
    pub value: Option<String>,
    pub operator: Option<Operator>,
    pub waiting_for_operand: bool,
    pub clear_label: &'static str,
}

impl TraceRecord {
    pub fn capture(
        step: usize,
        command: Command,
        engine: &CalculatorEngine,
        formatter: &DisplayFormatter,
    ) -> Self {
        let state = engine.state();
        Self {
            step,
            input: command.to_string(),
            display_value: state.display_value.clone(),
            formatted: engine.formatted_display(formatter),
            value: state.value.map(number_to_string),
            operator: state.operator,
            waiting_for_operand: state.waiting_for_operand,
            clear_label: engine.clear_label(),
        }
    }
}

/// Writes one CSV row per applied command.
pub struct TraceWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &TraceRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
