//! Normalized Dataset Snapshot

use crate::options::FilterOptions;
use chrono::{DateTime, Utc};
use gap_predictor::{predict, Suggestion};
use serde::Serialize;
use station_model::{FilterCriteria, StationRecord};
use stats_aggregator::{aggregate, Stats};
use tracing::{debug, info};
use uuid::Uuid;

/// The immutable record set every query runs against.
///
/// Records are normalized exactly once in the constructor, so a dataset in
/// hand is always fully canonicalized; no query can observe a
/// partially-normalized set. After construction nothing mutates the
/// records, which is what makes repeated queries pure.
#[derive(Debug)]
pub struct StationDataset {
    records: Vec<StationRecord>,
    snapshot_id: Uuid,
    loaded_at: DateTime<Utc>,
}

/// Everything one query produces, handed to rendering as a read-only value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome {
    pub stats: Stats,
    pub suggestions: Vec<Suggestion>,
    pub filtered_count: usize,
}

impl QueryOutcome {
    /// The outcome of running the pipeline over zero records.
    pub fn empty() -> Self {
        Self {
            stats: Stats::empty(),
            suggestions: Vec::new(),
            filtered_count: 0,
        }
    }
}

impl StationDataset {
    /// Build the snapshot from raw records, normalizing them in place.
    pub fn new(mut records: Vec<StationRecord>) -> Self {
        region_normalizer::normalize(&mut records);
        let snapshot_id = Uuid::new_v4();
        info!(
            count = records.len(),
            snapshot_id = %snapshot_id,
            "normalized station dataset"
        );
        Self {
            records,
            snapshot_id,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn snapshot_id(&self) -> Uuid {
        self.snapshot_id
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Run one query: filter, aggregate, predict, stitch the gap count into
    /// the stats. Re-invocable with different criteria against the same
    /// snapshot with no accumulated state.
    pub fn run_query(&self, criteria: &FilterCriteria) -> QueryOutcome {
        let filtered = filter_engine::filter(&self.records, criteria);
        let mut stats = aggregate(&filtered);
        let forecast = predict(&stats);
        stats.gap_count = forecast.gap_count;

        debug!(
            filtered = filtered.len(),
            active = stats.active_count,
            gap = stats.gap_count,
            "query complete"
        );
        QueryOutcome {
            stats,
            suggestions: forecast.suggestions,
            filtered_count: filtered.len(),
        }
    }

    /// Derive the selectable filter values from the normalized records.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_model::{RegionCode, StatusCategory};

    fn raw_records() -> Vec<StationRecord> {
        serde_json::from_str(
            r#"[
                {
                    "ID": 1,
                    "AddressInfo": { "StateOrProvince": "Victoria", "Town": "Melbourne" },
                    "StatusType": { "IsOperational": true },
                    "OperatorInfo": { "Title": "Chargefox" }
                },
                {
                    "ID": 2,
                    "AddressInfo": { "StateOrProvince": "victoria", "Town": "Geelong" },
                    "StatusType": { "IsOperational": true }
                },
                {
                    "ID": 3,
                    "AddressInfo": { "StateOrProvince": "new south wells", "Town": "Sydney" },
                    "StatusType": { "Title": "Planned For Future Date" }
                },
                {
                    "ID": 4,
                    "AddressInfo": { "StateOrProvince": "Springvale", "Town": "" }
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_constructor_normalizes_once() {
        let dataset = StationDataset::new(raw_records());
        // Raw provider spellings are queryable by canonical code.
        let outcome = dataset.run_query(&FilterCriteria {
            region: Some(RegionCode::Vic),
            ..Default::default()
        });
        assert_eq!(outcome.filtered_count, 2);

        // Salvaged locality from the unrecognized region string.
        let outcome = dataset.run_query(&FilterCriteria {
            town: Some("Springvale".to_string()),
            ..Default::default()
        });
        assert_eq!(outcome.filtered_count, 1);
    }

    #[test]
    fn test_query_is_pure_and_repeatable() {
        let dataset = StationDataset::new(raw_records());
        let criteria = FilterCriteria {
            status: Some(StatusCategory::Operational),
            ..Default::default()
        };

        let first = dataset.run_query(&criteria);
        let second = dataset.run_query(&criteria);
        assert_eq!(first, second);

        // An interleaved different query leaves no residue.
        dataset.run_query(&FilterCriteria::unconstrained());
        assert_eq!(dataset.run_query(&criteria), first);
    }

    #[test]
    fn test_gap_count_stitched_into_stats() {
        let records: Vec<StationRecord> = (0..20)
            .map(|i| {
                serde_json::from_str(&format!(
                    r#"{{
                        "ID": {i},
                        "AddressInfo": {{ "StateOrProvince": "VIC" }},
                        "StatusType": {{ "IsOperational": true }}
                    }}"#
                ))
                .unwrap()
            })
            .collect();

        let outcome = StationDataset::new(records).run_query(&FilterCriteria::unconstrained());
        assert_eq!(outcome.stats.active_count, 20);
        assert_eq!(outcome.stats.gap_count, 3);
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].unit_count, 3);
    }

    #[test]
    fn test_conservation_across_criteria() {
        let dataset = StationDataset::new(raw_records());
        for criteria in [
            FilterCriteria::unconstrained(),
            FilterCriteria {
                region: Some(RegionCode::Unknown),
                ..Default::default()
            },
            FilterCriteria {
                city: Some("Sydney".to_string()),
                ..Default::default()
            },
        ] {
            let outcome = dataset.run_query(&criteria);
            assert_eq!(
                outcome.stats.density_by_region.total(),
                outcome.filtered_count as u64
            );
        }
    }

    #[test]
    fn test_empty_dataset_yields_empty_outcome() {
        let dataset = StationDataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(
            dataset.run_query(&FilterCriteria::unconstrained()),
            QueryOutcome::empty()
        );
    }
}
