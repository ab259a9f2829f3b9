use crate::application::engine::CalculatorEngine;
use crate::domain::format::DisplayFormatter;
use crate::domain::state::CalculatorState;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Final state of a session, as emitted by `--output json`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SessionReport {
    pub locale: &'static str,
    pub display: String,
    pub clear_label: &'static str,
    pub state: CalculatorState,
}

impl SessionReport {
    pub fn new(engine: &CalculatorEngine, formatter: &DisplayFormatter) -> Self {
        Self {
            locale: formatter.locale().tag(),
            display: engine.formatted_display(formatter),
            clear_label: engine.clear_label(),
            state: engine.state().clone(),
        }
    }

    pub fn write_json<W: Write>(&self, mut sink: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut sink, self)?;
        writeln!(sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::Digit;
    use crate::domain::locale::Locale;
    use crate::domain::operator::Operator;

    #[test]
    fn test_report_json() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit(Digit::new(4).unwrap());
        engine.perform_operation(Operator::Multiply);

        let formatter = DisplayFormatter::new(Locale::DE_DE);
        let report = SessionReport::new(&engine, &formatter);

        let mut buffer = Vec::new();
        report.write_json(&mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(json["locale"], "de-DE");
        assert_eq!(json["display"], "4");
        assert_eq!(json["clear_label"], "C");
        assert_eq!(json["state"]["display_value"], "4");
        assert_eq!(json["state"]["value"], 4.0);
        assert_eq!(json["state"]["operator"], "*");
        assert_eq!(json["state"]["waiting_for_operand"], true);
    }
}
