use std::collections::HashMap;

/// Running tally of a simulation, filled in one event at a time.
///
/// Fields are private; each one changes only through the mutator that carries
/// its meaning. Map mutators start a missing key at zero, so entities never need
/// to be registered up front.
///
/// Lorries are never named in the load sequence: the lorry filled first is
/// lorry 0, the next one lorry 1 and so on. Statistics pair the `i`-th load
/// duration with the transport total recorded under id `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationState {
    timestamp_begin: Option<i64>,
    timestamp_last_event: Option<i64>,
    blocks_mined: u64,
    worker_resources_mined: HashMap<i64, u64>,
    worker_work_duration: HashMap<i64, u64>,
    ferry_wait_durations: Vec<u64>,
    lorry_load_durations: Vec<u64>,
    lorry_transport_duration: HashMap<i64, u64>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    //-------------------------------------------------------------------------
    // Mutators
    //-------------------------------------------------------------------------

    /// Set from the header line, once per run.
    pub fn set_timestamp_begin(&mut self, timestamp: i64) {
        self.timestamp_begin = Some(timestamp);
    }

    pub fn update_timestamp_last_event(&mut self, timestamp: i64) {
        self.timestamp_last_event = Some(timestamp);
    }

    pub fn inc_blocks_mined(&mut self) {
        self.blocks_mined += 1;
    }

    pub fn inc_resources_mined(&mut self, worker_id: i64) {
        *self.worker_resources_mined.entry(worker_id).or_insert(0) += 1;
    }

    pub fn increase_work_duration(&mut self, worker_id: i64, duration: u64) {
        let total = self.worker_work_duration.entry(worker_id).or_insert(0);
        *total = total.saturating_add(duration);
    }

    pub fn register_ferry_wait(&mut self, duration: u64) {
        self.ferry_wait_durations.push(duration);
    }

    pub fn register_lorry_load(&mut self, duration: u64) {
        self.lorry_load_durations.push(duration);
    }

    pub fn increase_lorry_transport(&mut self, lorry_id: i64, duration: u64) {
        let total = self.lorry_transport_duration.entry(lorry_id).or_insert(0);
        *total = total.saturating_add(duration);
    }

    //-------------------------------------------------------------------------
    // Accessors
    //-------------------------------------------------------------------------

    pub fn timestamp_begin(&self) -> Option<i64> {
        self.timestamp_begin
    }

    pub fn timestamp_last_event(&self) -> Option<i64> {
        self.timestamp_last_event
    }

    pub fn blocks_mined(&self) -> u64 {
        self.blocks_mined
    }

    pub fn worker_resources_mined(&self) -> &HashMap<i64, u64> {
        &self.worker_resources_mined
    }

    pub fn worker_work_duration(&self) -> &HashMap<i64, u64> {
        &self.worker_work_duration
    }

    pub fn ferry_wait_durations(&self) -> &[u64] {
        &self.ferry_wait_durations
    }

    pub fn lorry_load_durations(&self) -> &[u64] {
        &self.lorry_load_durations
    }

    pub fn lorry_transport_duration(&self) -> &HashMap<i64, u64> {
        &self.lorry_transport_duration
    }
}
