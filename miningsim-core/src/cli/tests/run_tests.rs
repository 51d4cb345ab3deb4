use crate::cli::{Cli, error_line, info_line, report_message, run};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const SCENARIO: &str = "\
0 Foreman -1 Finished analysing the input file.;blocks=1,resources=1
5 Worker 0 Finished mining a resource.;duration=5
5 Worker 0 Finished mining a block of resources.;duration=0
10 Lorry 0 Lorry has been filled.;duration=10
20 Lorry 0 Lorry has arrived at the ferry.;duration=10
25 Ferry -1 Ferry has departed from the origin shore.;duration=5
30 Lorry 0 Lorry has arrived at the destination.;duration=5
";

#[test]
fn run_writes_xml_document() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("sim.log");
    let output = dir.path().join("stats.xml");
    fs::write(&input, SCENARIO).unwrap();

    // Act
    run(&Cli {
        input,
        output: output.clone(),
    })
    .unwrap();

    // Assert
    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" ?><Simulation duration="30">"#));
    assert!(xml.contains("<transportTime>20.0</transportTime>"));
}

#[test]
fn run_does_not_write_output_on_format_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("sim.log");
    let output = dir.path().join("stats.xml");
    fs::write(&input, "not a log\n").unwrap();

    // Act
    let err = run(&Cli {
        input,
        output: output.clone(),
    })
    .unwrap_err();

    // Assert
    assert!(!output.exists());
    assert_eq!(
        report_message(&err),
        "Unexpected error occurred during program execution: invalid log format (line 1)"
    );
}

#[test]
fn missing_input_is_reported_without_prefix() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.log");

    let err = run(&Cli {
        input: input.clone(),
        output: dir.path().join("stats.xml"),
    })
    .unwrap_err();

    let message = report_message(&err);
    assert!(
        message.starts_with(&format!("failed to open simulation log {}", input.display())),
        "got {message}"
    );
}

#[test]
fn zero_denominator_is_reported_as_unexpected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sim.log");
    fs::write(
        &input,
        "0 Foreman -1 Finished analysing the input file.;blocks=0,resources=1\n\
         5 Worker 0 Finished mining a resource.;duration=5\n",
    )
    .unwrap();

    let err = run(&Cli {
        input,
        output: dir.path().join("stats.xml"),
    })
    .unwrap_err();

    assert_eq!(
        report_message(&err),
        "Unexpected error occurred during program execution: \
         cannot compute average block mine duration: nothing was counted"
    );
}

#[test]
fn status_lines_carry_the_app_prefix() {
    assert_eq!(info_line("OK - ALL DONE"), "miningsim[INFO]: OK - ALL DONE");
    assert_eq!(error_line("boom"), "miningsim[ERROR]: boom");
}
