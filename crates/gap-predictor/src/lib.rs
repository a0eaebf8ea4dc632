//! Gap Predictor
//!
//! Derives a bounded set of expansion suggestions from aggregated region
//! density. This is a fixed, auditable arithmetic heuristic, intentionally
//! naive: the 15% ratio, the top-3 cutoff, and the floor/ceil rounding are
//! part of the observable contract and must not be swapped for a learned
//! model.

use serde::Serialize;
use station_model::RegionCode;
use stats_aggregator::Stats;
use tracing::debug;

/// Fraction of the active fleet assumed missing from coverage.
const GAP_RATIO: f64 = 0.15;

/// Number of densest regions that receive a suggestion.
const TOP_REGIONS: usize = 3;

/// One recommended deployment, recomputed fresh every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub region: RegionCode,
    pub unit_count: u64,
    pub rationale: String,
}

/// The heuristic's full output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionForecast {
    pub gap_count: u64,
    pub suggestions: Vec<Suggestion>,
}

impl ExpansionForecast {
    /// The no-predictions terminal state. Valid output, not an error.
    pub fn empty() -> Self {
        Self {
            gap_count: 0,
            suggestions: Vec::new(),
        }
    }
}

/// Derive the expansion forecast from aggregated stats.
///
/// `gap_count = floor(active_count * 0.15)`; a zero gap short-circuits to
/// the empty forecast. Otherwise the three densest regions each get a
/// suggestion sized at `ceil(region_count * 0.15)` units. Ties between
/// regions keep their first-encounter order from aggregation (the sort is
/// stable and never falls back to alphabetical).
pub fn predict(stats: &Stats) -> ExpansionForecast {
    let gap_count = (stats.active_count as f64 * GAP_RATIO).floor() as u64;
    if gap_count == 0 {
        return ExpansionForecast::empty();
    }

    let mut ranked: Vec<(RegionCode, u64)> = stats
        .density_by_region
        .iter()
        .map(|(region, count)| (*region, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let suggestions = ranked
        .into_iter()
        .take(TOP_REGIONS)
        .map(|(region, count)| {
            let unit_count = (count as f64 * GAP_RATIO).ceil() as u64;
            Suggestion {
                region,
                unit_count,
                rationale: format!(
                    "{} has {} of the filtered stations; deploying {} additional \
                     units would keep pace with projected demand",
                    region.full_name(),
                    count,
                    unit_count
                ),
            }
        })
        .collect();

    debug!(gap_count, "derived expansion forecast");
    ExpansionForecast {
        gap_count,
        suggestions,
    }
}
