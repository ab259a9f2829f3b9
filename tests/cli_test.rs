use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = common::calcpad();
    cmd.arg("tests/fixtures/sum.csv");

    // 12 + 3.40 =
    cmd.assert().success().stdout("15.4\n");

    Ok(())
}

#[test]
fn test_cli_inline_keys() {
    let mut cmd = common::calcpad();
    cmd.arg("--keys").arg("6-2-1{Enter}");

    cmd.assert().success().stdout("3\n");
}

#[test]
fn test_cli_keeps_typed_trailing_zeros() {
    let mut cmd = common::calcpad();
    cmd.arg("--keys").arg("1234.50");

    cmd.assert().success().stdout("1,234.50\n");
}

#[test]
fn test_cli_percent() {
    let mut cmd = common::calcpad();
    cmd.arg("--keys").arg("50%");

    cmd.assert().success().stdout("0.50\n");
}

#[test]
fn test_cli_reads_stdin() {
    let mut cmd = assert_cmd::Command::from_std(common::calcpad());
    cmd.arg("-")
        .write_stdin("command,arg\ndigit,9\noperator,*\ndigit,9\noperator,=\n");

    cmd.assert().success().stdout("81\n");
}

#[test]
fn test_cli_trace_output() {
    let mut cmd = common::calcpad();
    cmd.arg("--keys").arg("5+3=").arg("--output").arg("trace");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "step,input,display_value,formatted,value,operator,waiting_for_operand,clear_label",
        ))
        .stdout(predicate::str::contains("1,5,5,5,,,false,C"))
        .stdout(predicate::str::contains("4,=,8,8,8,=,true,C"));
}

#[test]
fn test_cli_json_output() {
    let mut cmd = common::calcpad();
    cmd.arg("--keys").arg("7*").arg("--output").arg("json");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "7");
    assert_eq!(json["state"]["operator"], "*");
    assert_eq!(json["state"]["waiting_for_operand"], true);
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = common::calcpad();
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
