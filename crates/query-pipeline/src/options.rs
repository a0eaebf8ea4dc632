//! Selectable Filter Values

use serde::Serialize;
use station_model::{RegionCode, StationRecord, StatusCategory};

/// The value sets the dashboard populates its filter controls from.
///
/// Regions and localities are derived from the normalized dataset, never
/// hardcoded; the locality list feeds both the city and town selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Distinct observed region codes, first-encounter order.
    pub regions: Vec<RegionCode>,
    /// Distinct non-empty locality names, sorted.
    pub localities: Vec<String>,
    /// The fixed status category set.
    pub statuses: Vec<StatusCategory>,
}

impl FilterOptions {
    pub fn from_records(records: &[StationRecord]) -> Self {
        let mut regions = Vec::new();
        let mut localities = Vec::new();

        for record in records {
            let region = record.region();
            if !regions.contains(&region) {
                regions.push(region);
            }
            if let Some(town) = record.locality() {
                let town = town.trim();
                if !town.is_empty() && !localities.iter().any(|l| l == town) {
                    localities.push(town.to_string());
                }
            }
        }
        localities.sort();

        Self {
            regions,
            localities,
            statuses: StatusCategory::ALL.to_vec(),
        }
    }
}
