use crate::simlog::error::StatisticsError;
use crate::simlog::state::SimulationState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerStatistics {
    pub id: i64,
    pub resources_mined: u64,
    pub work_duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LorryStatistics {
    pub id: i64,
    pub load_time: u64,
    /// Both travel legs plus the average ferry wait of the whole run.
    pub transport_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStatistics {
    pub duration: i64,

    pub blocks_mined_count: u64,
    pub avg_block_mine_duration: f64,

    pub resources_mined_count: u64,
    pub avg_resource_mine_duration: f64,

    pub ferry_trips_count: u64,
    pub avg_ferry_wait_duration: f64,

    /// Sorted by id, ascending.
    pub workers: Vec<WorkerStatistics>,
    /// Sorted by id, ascending.
    pub lorries: Vec<LorryStatistics>,
}

/// Derives the final statistics from a fully reconstructed state.
///
/// Every average fails with [`StatisticsError::ZeroDenominator`] instead of
/// producing NaN or infinity. Checks run in the order the metrics are computed,
/// so a log with neither blocks nor resources reports the block average.
pub fn derive_statistics(state: &SimulationState) -> Result<SimulationStatistics, StatisticsError> {
    let begin = state
        .timestamp_begin()
        .ok_or(StatisticsError::MissingHeader)?;
    let last = state
        .timestamp_last_event()
        .ok_or(StatisticsError::NoEvents)?;
    let duration = last - begin;

    let total_work_duration = saturating_sum(state.worker_work_duration().values());

    let blocks_mined_count = state.blocks_mined();
    let avg_block_mine_duration = average(
        total_work_duration,
        blocks_mined_count,
        "average block mine duration",
    )?;

    let resources_mined_count = saturating_sum(state.worker_resources_mined().values());
    let avg_resource_mine_duration = average(
        total_work_duration,
        resources_mined_count,
        "average resource mine duration",
    )?;

    let ferry_trips_count = state.ferry_wait_durations().len() as u64;
    let avg_ferry_wait_duration = average(
        saturating_sum(state.ferry_wait_durations()),
        ferry_trips_count,
        "average ferry wait duration",
    )?;

    let workers = workers_statistics(state);
    let lorries = lorries_statistics(state, avg_ferry_wait_duration)?;

    tracing::debug!(
        workers = workers.len(),
        lorries = lorries.len(),
        ferry_trips = ferry_trips_count,
        "derived simulation statistics"
    );

    Ok(SimulationStatistics {
        duration,
        blocks_mined_count,
        avg_block_mine_duration,
        resources_mined_count,
        avg_resource_mine_duration,
        ferry_trips_count,
        avg_ferry_wait_duration,
        workers,
        lorries,
    })
}

fn workers_statistics(state: &SimulationState) -> Vec<WorkerStatistics> {
    let mut workers: Vec<_> = state
        .worker_resources_mined()
        .iter()
        .map(|(&id, &resources_mined)| WorkerStatistics {
            id,
            resources_mined,
            // Both maps are written together, so the key is always present.
            work_duration: state
                .worker_work_duration()
                .get(&id)
                .copied()
                .unwrap_or_default(),
        })
        .collect();

    workers.sort_by_key(|w| w.id);
    workers
}

fn lorries_statistics(
    state: &SimulationState,
    avg_ferry_wait_duration: f64,
) -> Result<Vec<LorryStatistics>, StatisticsError> {
    let mut lorries = state
        .lorry_load_durations()
        .iter()
        .enumerate()
        .map(|(index, &load_time)| -> Result<LorryStatistics, StatisticsError> {
            let id = index as i64;
            let travelled = state
                .lorry_transport_duration()
                .get(&id)
                .copied()
                .ok_or(StatisticsError::MissingLorryTransport { lorry_id: id })?;

            Ok(LorryStatistics {
                id,
                load_time,
                transport_time: travelled as f64 + avg_ferry_wait_duration,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    lorries.sort_by_key(|l| l.id);
    Ok(lorries)
}

fn average(total: u64, count: u64, metric: &'static str) -> Result<f64, StatisticsError> {
    if count == 0 {
        return Err(StatisticsError::ZeroDenominator { metric });
    }
    Ok(total as f64 / count as f64)
}

fn saturating_sum<'a>(values: impl IntoIterator<Item = &'a u64>) -> u64 {
    values
        .into_iter()
        .fold(0u64, |acc, value| acc.saturating_add(*value))
}
