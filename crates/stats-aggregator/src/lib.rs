//! Stats Aggregator
//!
//! Computes grouped counts (by region, by operator) and status-category
//! totals over a filtered record set. No sorting happens here; the count
//! tables carry first-encounter order and ranking is a downstream concern.

mod count_table;
mod stats;

pub use count_table::CountTable;
pub use stats::{Stats, UNKNOWN_OPERATOR};

use station_model::{StationRecord, StatusCategory};

/// Aggregate a filtered record set into a fresh [`Stats`].
///
/// Every record lands in exactly one region bucket and one operator bucket,
/// so the region densities always sum to the filtered record count. Records
/// with an unrecognized status contribute to neither the active nor the
/// planned total. `gap_count` is left at zero for the prediction stage.
pub fn aggregate(records: &[&StationRecord]) -> Stats {
    let mut stats = Stats::empty();

    for record in records {
        match record.status_category() {
            StatusCategory::Operational => stats.active_count += 1,
            StatusCategory::Planned => stats.planned_count += 1,
            StatusCategory::Unknown => {}
        }

        stats.density_by_region.increment(record.region());
        stats
            .count_by_operator
            .increment(record.operator_title().unwrap_or(UNKNOWN_OPERATOR).to_string());
    }

    stats
}
