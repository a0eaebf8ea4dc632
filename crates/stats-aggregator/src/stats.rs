//! Aggregated Statistics Value Object

use crate::count_table::CountTable;
use serde::Serialize;
use station_model::RegionCode;

/// Label used for records whose operator group or title is missing.
pub const UNKNOWN_OPERATOR: &str = "Unknown";

/// Aggregated metrics over one filtered record set.
///
/// Produced fresh per query and handed to consumers as a read-only
/// snapshot. Field names in the serialized form (`activeCount`,
/// `plannedCount`, `gapCount`, `densityByRegion`, `countByOperator`) are
/// the observable contract with the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Stations classified operational.
    pub active_count: u64,
    /// Stations classified planned.
    pub planned_count: u64,
    /// Projected expansion gap, stitched in by the prediction stage.
    pub gap_count: u64,
    /// Station counts grouped by region, first-encounter order.
    pub density_by_region: CountTable<RegionCode>,
    /// Station counts grouped by operator title, first-encounter order.
    pub count_by_operator: CountTable<String>,
}

impl Stats {
    /// Create the all-zero stats of an empty record set.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_contract_field_names() {
        let mut stats = Stats::empty();
        stats.active_count = 7;
        stats.gap_count = 1;
        stats.density_by_region.increment(RegionCode::Qld);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["activeCount"], 7);
        assert_eq!(json["plannedCount"], 0);
        assert_eq!(json["gapCount"], 1);
        assert_eq!(json["densityByRegion"]["QLD"], 1);
        assert!(json["countByOperator"].as_object().unwrap().is_empty());
    }
}
