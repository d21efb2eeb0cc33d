#![forbid(unsafe_code)]
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn payroll() -> Command {
    let mut cmd = Command::cargo_bin("shift-payroll").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn prints_one_line_per_employee() {
    payroll()
        .arg("demos/employees.txt")
        .assert()
        .success()
        .stdout(predicate::eq(
            "The amount to pay RENE is: 215 USD\nThe amount to pay ASTRID is: 85 USD\n",
        ));
}

#[test]
fn uses_yaml_configuration() {
    let config = input_file(
        "currency: EUR\nshifts:\n  flat: { start: \"00:00\", end: \"00:00\" }\nrates:\n  MO: { flat: 10 }\n",
    );
    let input = input_file("RENE=MO10:00-12:00\n");

    payroll()
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::eq("The amount to pay RENE is: 20 EUR\n"));
}

#[test]
fn skips_malformed_lines_and_reports_them() {
    let input = input_file("RENE=MO10:00-12:00\nBROKEN=MO10:00\n\nASTRID=SA14:00-18:00\n");

    payroll()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("RENE is: 30 USD"))
        .stdout(predicate::str::contains("ASTRID is: 80 USD"))
        .stdout(predicate::str::contains("BROKEN").not())
        .stderr(predicate::str::contains("Skipping malformed line"));
}

#[test]
fn fail_fast_stops_at_malformed_line() {
    let input = input_file("BROKEN=MO10:00\nRENE=MO10:00-12:00\n");

    payroll()
        .arg(input.path())
        .arg("--fail-fast")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed work record"));
}

#[test]
fn json_output_has_breakdown() {
    let input = input_file("RENE=SA14:00-18:00\n");

    payroll()
        .arg(input.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"employee\":\"RENE\""))
        .stdout(predicate::str::contains("\"total\":\"80\""));
}

#[test]
fn missing_input_file_fails() {
    payroll()
        .arg("/nonexistent/employees.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read input"));
}

#[test]
fn strict_rates_rejects_incomplete_configuration() {
    let config = input_file(
        "shifts:\n  day_shift: { start: \"09:00\", end: \"18:00\" }\n  night_shift: { start: \"00:00\", end: \"09:00\" }\nrates:\n  MO: { day_shift: 15 }\n",
    );
    let input = input_file("RENE=MO10:00-12:00\n");

    payroll()
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .arg("--strict-rates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rate configured"));
}

#[test]
fn negative_rate_configuration_fails() {
    let config = input_file(
        "shifts:\n  day_shift: { start: \"09:00\", end: \"18:00\" }\nrates:\n  MO: { day_shift: -15 }\n",
    );
    let input = input_file("RENE=MO10:00-12:00\n");

    payroll()
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid rate"));
}

#[test]
fn line_with_two_separators_is_skipped() {
    let input = input_file("RENE=ASTRID=MO10:00-12:00\nASTRID=MO10:00-12:00\n");

    payroll()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::eq("The amount to pay ASTRID is: 30 USD\n"))
        .stderr(predicate::str::contains("Skipping malformed line"));
}
