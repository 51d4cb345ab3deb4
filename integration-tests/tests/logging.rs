use integration_tests::harness::fixtures::fixture_path;
use integration_tests::harness::tracing::capture_events;
use miningsim_core::simlog::{derive_statistics, reconstruct_file};

#[test]
fn reconstruction_reports_header_totals_and_milestones() {
    // Act
    let (state, events) = capture_events(|| reconstruct_file(fixture_path("two_shifts.log")));

    // Assert
    assert!(state.is_ok());

    let header = events
        .iter()
        .find(|e| e.message() == Some("parsed foreman header"))
        .expect("header event should be logged");
    assert_eq!(header.field("blocks"), Some("3"));
    assert_eq!(header.field("resources"), Some("7"));

    assert!(
        events
            .iter()
            .any(|e| e.level == tracing::Level::INFO
                && e.message() == Some("reconstructed simulation data"))
    );
}

#[test]
fn ignored_events_are_traced() {
    let (_, events) = capture_events(|| reconstruct_file(fixture_path("two_shifts.log")));

    let ignored: Vec<_> = events
        .iter()
        .filter(|e| e.message() == Some("ignoring event"))
        .collect();

    assert_eq!(ignored.len(), 1);
    assert_eq!(ignored[0].field("role"), Some("Foreman"));
    assert_eq!(ignored[0].level, tracing::Level::TRACE);
}

#[test]
fn statistics_summary_is_logged() {
    let state = reconstruct_file(fixture_path("two_shifts.log")).unwrap();

    let (_, events) = capture_events(|| derive_statistics(&state));

    let summary = events
        .iter()
        .find(|e| e.message() == Some("derived simulation statistics"))
        .expect("summary should be logged");
    assert_eq!(summary.field("lorries"), Some("3"));
}
