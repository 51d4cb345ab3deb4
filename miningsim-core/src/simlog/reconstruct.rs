use crate::simlog::constants::{
    BLOCK_MINED, FERRY_DEPARTED, LORRY_AT_DESTINATION, LORRY_AT_FERRY, LORRY_FILLED,
    RESOURCE_MINED,
};
use crate::simlog::error::LogError;
use crate::simlog::parse::{parse_general, parse_header};
use crate::simlog::state::SimulationState;
use crate::simlog::types::{GeneralEvent, Role};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens `path` and rebuilds the simulation state from it.
///
/// The file handle lives only for the duration of this call and is released
/// whether reconstruction succeeds or not.
pub fn reconstruct_file(path: impl AsRef<Path>) -> Result<SimulationState, LogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LogError::open(path, source))?;

    let state = reconstruct(BufReader::new(file))?;

    tracing::info!(path = %path.display(), "reconstructed simulation data");
    Ok(state)
}

/// Rebuilds the simulation state from an ordered stream of log lines.
///
/// The first line must be the foreman header and every following line a
/// general event. The first line that fails its grammar aborts the pass.
pub fn reconstruct<R: BufRead>(reader: R) -> Result<SimulationState, LogError> {
    let mut state = SimulationState::new();
    let mut lines = reader.lines();

    let Some(first) = lines.next() else {
        return Err(LogError::Format { line: 1 });
    };
    let header = parse_header(&first?).ok_or(LogError::Format { line: 1 })?;

    tracing::debug!(
        timestamp = header.timestamp,
        blocks = header.blocks_total,
        resources = header.resources_total,
        "parsed foreman header"
    );
    state.set_timestamp_begin(header.timestamp);

    let mut events = 0usize;
    for (index, line) in lines.enumerate() {
        let line = line?;
        // +1 for the header, +1 for 1-based numbering.
        let event = parse_general(&line).ok_or(LogError::Format { line: index + 2 })?;

        apply_event(&mut state, &event);
        events += 1;
    }

    tracing::debug!(events, "consumed simulation log");
    Ok(state)
}

/// Applies one general event to the tally.
///
/// Events that do not affect any statistic still advance the last-event
/// timestamp.
pub fn apply_event(state: &mut SimulationState, event: &GeneralEvent) {
    match (&event.role, event.message.as_str()) {
        (Role::Worker, RESOURCE_MINED) => {
            state.inc_resources_mined(event.entity_id);
            state.increase_work_duration(event.entity_id, event.duration);
        }
        (Role::Worker, BLOCK_MINED) => state.inc_blocks_mined(),
        (Role::Lorry, LORRY_FILLED) => state.register_lorry_load(event.duration),
        (Role::Lorry, LORRY_AT_FERRY | LORRY_AT_DESTINATION) => {
            state.increase_lorry_transport(event.entity_id, event.duration);
        }
        (Role::Ferry, FERRY_DEPARTED) => state.register_ferry_wait(event.duration),
        (role, message) => {
            tracing::trace!(role = role.as_str(), text = message, "ignoring event");
        }
    }

    state.update_timestamp_last_event(event.timestamp);
}
