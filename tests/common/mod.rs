#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::process::Command;

/// The `calcpad` binary with the host locale variables cleared, so its output
/// is `en-US` unless a test picks a locale.
pub fn calcpad() -> Command {
    let mut cmd = Command::new(cargo_bin!("calcpad"));
    for var in ["LC_ALL", "LC_NUMERIC", "LANG", "CALCPAD_LOCALE"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Writes a keystroke script with one `command,arg` row per entry.
pub fn generate_script(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["command", "arg"])?;
    for (command, arg) in rows {
        wtr.write_record([*command, *arg])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a script that adds 1 to itself `additions` times, so the expected
/// display is `additions + 1`.
pub fn generate_counting_script(path: &Path, additions: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["command", "arg"])?;

    wtr.write_record(["digit", "1"])?;
    for _ in 0..additions {
        wtr.write_record(["operator", "+"])?;
        wtr.write_record(["digit", "1"])?;
    }
    wtr.write_record(["operator", "="])?;

    wtr.flush()?;
    Ok(())
}
