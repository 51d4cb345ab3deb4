use crate::document::element::{Document, Element};
use crate::document::number::format_decimal;
use crate::simlog::{LorryStatistics, SimulationStatistics, WorkerStatistics};

/// Builds the `Simulation` document for a statistics snapshot.
pub fn statistics_document(stats: &SimulationStatistics) -> Document {
    let root = Element::new("Simulation")
        .with_attr("duration", stats.duration)
        .with_child(
            Element::new("blockAverageDuration")
                .with_attr("totalCount", stats.blocks_mined_count)
                .with_text(format_decimal(stats.avg_block_mine_duration)),
        )
        .with_child(
            Element::new("resourceAverageDuration")
                .with_attr("totalCount", stats.resources_mined_count)
                .with_text(format_decimal(stats.avg_resource_mine_duration)),
        )
        .with_child(
            Element::new("ferryAverageWait")
                .with_attr("trips", stats.ferry_trips_count)
                .with_text(format_decimal(stats.avg_ferry_wait_duration)),
        )
        .with_child(Element::new("Workers").with_children(stats.workers.iter().map(worker)))
        .with_child(Element::new("Vehicles").with_children(stats.lorries.iter().map(vehicle)));

    Document::new(root)
}

fn worker(stats: &WorkerStatistics) -> Element {
    Element::new("Worker")
        .with_attr("id", stats.id)
        .with_child(Element::new("resources").with_text(stats.resources_mined))
        .with_child(Element::new("workDuration").with_text(stats.work_duration))
}

fn vehicle(stats: &LorryStatistics) -> Element {
    Element::new("Vehicle")
        .with_attr("id", stats.id)
        .with_child(Element::new("loadTime").with_text(stats.load_time))
        .with_child(Element::new("transportTime").with_text(format_decimal(stats.transport_time)))
}
