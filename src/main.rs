use calcpad::application::engine::CalculatorEngine;
use calcpad::domain::command::Command;
use calcpad::domain::format::DisplayFormatter;
use calcpad::domain::locale::Locale;
use calcpad::error::Result as CalcResult;
use calcpad::interfaces::csv::command_reader::CommandReader;
use calcpad::interfaces::csv::trace_writer::{TraceRecord, TraceWriter};
use calcpad::interfaces::keyboard::{command_for_key, parse_key_sequence};
use calcpad::interfaces::report::SessionReport;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Print the formatted display after the last command
    Display,
    /// Print a CSV row for every applied command
    Trace,
    /// Print the final state as JSON
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keystroke script (CSV with `command,arg` columns). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Inline keys to press instead of a script, e.g. "12+3{Enter}"
    #[arg(long, conflicts_with = "input")]
    keys: Option<String>,

    /// Locale used to format the display. Defaults to the host locale
    /// (`LC_ALL`, `LC_NUMERIC`, `LANG`), then `en-US`.
    #[arg(long, env = "CALCPAD_LOCALE")]
    locale: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputMode::Display)]
    output: OutputMode,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let locale = match &cli.locale {
        Some(tag) => Locale::resolve(tag).into_diagnostic()?,
        None => Locale::from_host(|name| env::var(name).ok()),
    };
    let formatter = DisplayFormatter::new(locale);

    let commands: Box<dyn Iterator<Item = CalcResult<Command>>> = match (&cli.keys, &cli.input) {
        (Some(keys), _) => {
            let keys = parse_key_sequence(keys).into_diagnostic()?;
            Box::new(keys.into_iter().filter_map(|key| {
                let command = command_for_key(&key);
                if command.is_none() {
                    tracing::debug!(key = %key, "ignoring unmapped key");
                }
                command.map(Ok)
            }))
        }
        (None, Some(path)) if path.as_os_str() != "-" => {
            let file = File::open(path).into_diagnostic()?;
            Box::new(CommandReader::new(file).commands())
        }
        (None, _) => Box::new(CommandReader::new(io::stdin().lock()).commands()),
    };

    let mut engine = CalculatorEngine::new();
    let stdout = io::stdout();
    let mut trace = (cli.output == OutputMode::Trace).then(|| TraceWriter::new(stdout.lock()));

    let mut step = 0;
    for command_result in commands {
        match command_result {
            Ok(command) => {
                engine.dispatch(command);
                step += 1;
                if let Some(writer) = trace.as_mut() {
                    let record = TraceRecord::capture(step, command, &engine, &formatter);
                    writer.write_record(&record).into_diagnostic()?;
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    match trace.as_mut() {
        Some(writer) => writer.flush().into_diagnostic()?,
        None => match cli.output {
            OutputMode::Json => SessionReport::new(&engine, &formatter)
                .write_json(stdout.lock())
                .into_diagnostic()?,
            _ => println!("{}", engine.formatted_display(&formatter)),
        },
    }

    Ok(())
}
