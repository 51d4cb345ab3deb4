use super::test_helpers::{SCENARIO, reconstruct_str, with_header};
use crate::simlog::{
    GeneralEvent, LogError, Role, SimulationState, apply_event, reconstruct, reconstruct_file,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn assert_format_error(log: &str, expected_line: usize) {
    // Act
    let result = reconstruct(Cursor::new(log));

    // Assert
    match result {
        Err(LogError::Format { line }) => assert_eq!(line, expected_line),
        other => panic!("Expected Format error, got {:?}", other),
    }
}

//-----------------------------------------------------------------------------
// Happy path
//-----------------------------------------------------------------------------

#[test]
fn scenario_reconstructs_every_tally() {
    // Act
    let state = reconstruct_str(SCENARIO);

    // Assert
    assert_eq!(state.timestamp_begin(), Some(0));
    assert_eq!(state.timestamp_last_event(), Some(30));
    assert_eq!(state.blocks_mined(), 1);
    assert_eq!(state.worker_resources_mined().get(&0), Some(&1));
    assert_eq!(state.worker_work_duration().get(&0), Some(&5));
    assert_eq!(state.lorry_load_durations(), &[10]);
    assert_eq!(state.lorry_transport_duration().get(&0), Some(&15));
    assert_eq!(state.ferry_wait_durations(), &[5]);
}

#[test]
fn header_only_log_sets_begin_but_not_last_event() {
    let state = reconstruct_str(&with_header(&[]));

    assert_eq!(state.timestamp_begin(), Some(0));
    assert_eq!(state.timestamp_last_event(), None);
}

#[test]
fn worker_totals_are_kept_per_id() {
    // Arrange
    let log = with_header(&[
        "1 Worker 2 Finished mining a resource.;duration=4",
        "2 Worker 1 Finished mining a resource.;duration=6",
        "3 Worker 2 Finished mining a resource.;duration=1",
        "4 Worker 2 Finished mining a block of resources.;duration=5",
        "5 Worker 1 Finished mining a block of resources.;duration=6",
    ]);

    // Act
    let state = reconstruct_str(&log);

    // Assert
    assert_eq!(state.blocks_mined(), 2);
    assert_eq!(state.worker_resources_mined().get(&2), Some(&2));
    assert_eq!(state.worker_work_duration().get(&2), Some(&5));
    assert_eq!(state.worker_resources_mined().get(&1), Some(&1));
    assert_eq!(state.worker_work_duration().get(&1), Some(&6));
}

#[test]
fn block_events_do_not_touch_worker_maps() {
    let state = reconstruct_str(&with_header(&[
        "4 Worker 3 Finished mining a block of resources.;duration=5",
    ]));

    assert_eq!(state.blocks_mined(), 1);
    assert!(state.worker_resources_mined().is_empty());
    assert!(state.worker_work_duration().is_empty());
}

#[test]
fn lorry_loads_follow_log_order_not_lorry_id() {
    let state = reconstruct_str(&with_header(&[
        "1 Lorry 7 Lorry has been filled.;duration=30",
        "2 Lorry 3 Lorry has been filled.;duration=10",
    ]));

    assert_eq!(state.lorry_load_durations(), &[30, 10]);
}

#[test]
fn unknown_roles_and_messages_only_advance_the_clock() {
    // Arrange
    let log = with_header(&[
        "1 Worker 0 Finished mining a resource.;duration=4",
        "8 Inspector 0 Finished mining a resource.;duration=4",
        "9 Worker 0 Started mining a resource.;duration=0",
        "10 Ferry -1 Lorry has departed from the origin shore.;duration=3",
        "11 Foreman -1 Finished analysing the input file.;duration=1",
    ]);

    // Act
    let state = reconstruct_str(&log);

    // Assert
    assert_eq!(state.worker_resources_mined().get(&0), Some(&1));
    assert!(state.ferry_wait_durations().is_empty());
    assert_eq!(state.timestamp_last_event(), Some(11));
}

#[test]
fn windows_line_endings_are_accepted() {
    let state = reconstruct_str(&SCENARIO.replace('\n', "\r\n"));

    assert_eq!(state.timestamp_last_event(), Some(30));
    assert_eq!(state.ferry_wait_durations(), &[5]);
}

#[test]
fn apply_event_updates_timestamp_after_dispatch() {
    // Arrange
    let mut state = SimulationState::new();
    let event = GeneralEvent {
        timestamp: 42,
        role: Role::Ferry,
        entity_id: -1,
        message: "Ferry has departed from the origin shore.".to_string(),
        duration: 8,
    };

    // Act
    apply_event(&mut state, &event);

    // Assert
    assert_eq!(state.ferry_wait_durations(), &[8]);
    assert_eq!(state.timestamp_last_event(), Some(42));
}

//-----------------------------------------------------------------------------
// Format errors
//-----------------------------------------------------------------------------

#[test]
fn empty_input_is_a_format_error() {
    assert_format_error("", 1);
}

#[test]
fn malformed_header_is_a_format_error() {
    assert_format_error(
        "0 Foreman -1 Finished analysing.;blocks=1,resources=1\n5 Worker 0 Finished mining a resource.;duration=5",
        1,
    );
}

#[test]
fn general_line_as_header_is_a_format_error() {
    assert_format_error("5 Worker 0 Finished mining a resource.;duration=5", 1);
}

#[test]
fn malformed_general_line_reports_its_line_number() {
    let log = with_header(&[
        "5 Worker 0 Finished mining a resource.;duration=5",
        "6 Worker 0 Finished mining a resource;duration=5",
        "7 Worker 0 Finished mining a resource.;duration=5",
    ]);

    assert_format_error(&log, 3);
}

#[test]
fn interior_blank_line_is_a_format_error() {
    let log = with_header(&["", "5 Worker 0 Finished mining a resource.;duration=5"]);

    assert_format_error(&log, 2);
}

#[test]
fn final_newline_does_not_produce_an_empty_event() {
    let log = with_header(&["5 Worker 0 Finished mining a resource.;duration=5", ""]);

    let state = reconstruct_str(&log);

    assert_eq!(state.timestamp_last_event(), Some(5));
    assert_eq!(state.worker_resources_mined().get(&0), Some(&1));
}

#[test]
fn format_error_message_is_fixed() {
    let err = reconstruct(Cursor::new("garbage")).unwrap_err();

    assert_eq!(err.to_string(), "invalid log format (line 1)");
}

//-----------------------------------------------------------------------------
// Files
//-----------------------------------------------------------------------------

#[test]
fn reconstruct_file_reads_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("simulation.log");
    fs::write(&path, SCENARIO).unwrap();

    // Act
    let state = reconstruct_file(&path).unwrap();

    // Assert
    assert_eq!(state, reconstruct_str(SCENARIO));
}

#[test]
fn reconstruct_file_reports_missing_file_as_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.log");

    let result = reconstruct_file(&path);

    match result {
        Err(LogError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected Open error, got {:?}", other),
    }
}

#[test]
fn reconstruct_file_reports_invalid_utf8_as_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.log");
    fs::write(&path, [0xff, 0xfe, 0x00, b'\n']).unwrap();

    let result = reconstruct_file(&path);

    assert!(matches!(result, Err(LogError::Read(_))), "got {:?}", result);
}
