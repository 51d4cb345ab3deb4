//! Simulation Log Reconstruction
//!
//! This module turns the event log written by a mining simulation run back into
//! the numbers the run produced: how long it took, how many blocks and resources
//! were mined, how long lorries spent loading and travelling, and how long the
//! ferry waited before each departure.
//!
//! The log is read exactly once, top to bottom. The first line is a summary
//! written by the foreman; every line after it is an event written by a worker,
//! a lorry or the ferry. Each event nudges a running tally, and once the whole
//! file has been consumed the tally is turned into a read-only statistics
//! snapshot.
//!
//! The overall data processing architecture is:
//!
//! log file
//! parse_header / parse_general
//! HeaderEvent / GeneralEvent
//! SimulationState
//! derive_statistics
//! SimulationStatistics
//!

mod constants;
mod error;
mod parse;
mod reconstruct;
mod state;
mod statistics;
#[cfg(test)]
mod tests;
mod types;

pub use error::*;
pub use parse::{parse_general, parse_header};
pub use reconstruct::{apply_event, reconstruct, reconstruct_file};
pub use state::SimulationState;
pub use statistics::*;
pub use types::*;
