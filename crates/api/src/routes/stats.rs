//! Stats Query Route

use axum::{
    extract::{Query, State},
    Json,
};
use query_pipeline::{QueryOutcome, Stats, Suggestion};
use serde::{Deserialize, Serialize};
use station_model::{FilterCriteria, RegionCode, StatusCategory};
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;

/// Query parameters for the stats endpoint. Each dimension is optional;
/// missing or the literal "all" means no constraint.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub region: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub status: Option<String>,
}

/// Response for the stats endpoint
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Stats,
    pub suggestions: Vec<Suggestion>,
    pub meta: QueryMeta,
}

/// Query metadata alongside the stats
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMeta {
    pub filtered_count: usize,
    pub total_count: usize,
    pub snapshot_id: Uuid,
}

/// Run the pipeline for the requested criteria.
///
/// Region or status values outside the canonical sets cannot match any
/// record, so they short-circuit to the empty outcome. That is a valid
/// empty-result query, not an error: the response is still 200.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> Json<StatsResponse> {
    metrics::counter!("chargescope_queries_total").increment(1);

    let outcome = match criteria_from_query(&params) {
        Some(criteria) => state.dataset.run_query(&criteria),
        None => QueryOutcome::empty(),
    };

    Json(StatsResponse {
        meta: QueryMeta {
            filtered_count: outcome.filtered_count,
            total_count: state.dataset.len(),
            snapshot_id: state.dataset.snapshot_id(),
        },
        stats: outcome.stats,
        suggestions: outcome.suggestions,
    })
}

/// Marshal query parameters into criteria.
///
/// Returns `None` when a region or status value is outside its enumerated
/// set. Locality values pass through untouched; an unobserved locality is
/// indistinguishable from an observed-but-unmatched one and simply filters
/// everything out downstream.
fn criteria_from_query(params: &StatsQuery) -> Option<FilterCriteria> {
    let region = match constrained(&params.region) {
        Some(value) => Some(RegionCode::from_code(value)?),
        None => None,
    };
    let status = match constrained(&params.status) {
        Some(value) => Some(StatusCategory::parse(value)?),
        None => None,
    };

    Some(FilterCriteria {
        region,
        city: constrained(&params.city).map(str::to_string),
        town: constrained(&params.town).map(str::to_string),
        status,
    })
}

/// Treat a missing parameter or the "all" sentinel as unconstrained.
fn constrained(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| *value != "all")
}
