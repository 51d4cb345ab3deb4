use crate::simlog::types::{GeneralEvent, HeaderEvent, Role};
use once_cell::sync::Lazy;
use regex::Regex;

// Both patterns are anchored at the start only; anything after the match is
// ignored. The dot after "file" is a wildcard, not a literal.
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]+) Foreman -1 Finished analysing the input file.;blocks=([0-9]+),resources=([0-9]+)",
    )
    .expect("header pattern must compile")
});

static GENERAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+) ([a-zA-Z]+) (-?[0-9]+) (.+\.);duration=([0-9]+)")
        .expect("general pattern must compile")
});

/// Parses the foreman summary that opens every log.
///
/// Returns `None` when the line does not have the header shape, including when
/// one of its numbers does not fit the target integer type.
pub fn parse_header(line: &str) -> Option<HeaderEvent> {
    let caps = HEADER_PATTERN.captures(line)?;

    Some(HeaderEvent {
        timestamp: caps[1].parse().ok()?,
        blocks_total: caps[2].parse().ok()?,
        resources_total: caps[3].parse().ok()?,
    })
}

/// Parses a `<timestamp> <role> <id> <message>;duration=<n>` event line.
pub fn parse_general(line: &str) -> Option<GeneralEvent> {
    let caps = GENERAL_PATTERN.captures(line)?;

    Some(GeneralEvent {
        timestamp: caps[1].parse().ok()?,
        role: Role::from_word(&caps[2]),
        entity_id: caps[3].parse().ok()?,
        message: caps[4].to_string(),
        duration: caps[5].parse().ok()?,
    })
}
