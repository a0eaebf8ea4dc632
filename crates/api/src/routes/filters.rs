//! Filter Options Route

use axum::{extract::State, Json};
use query_pipeline::FilterOptions;
use std::sync::Arc;

use crate::AppState;

/// Get the selectable filter values for the dashboard controls.
///
/// Region and locality sets are derived from the normalized dataset; the
/// locality list feeds both the city and town selectors.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    Json(state.dataset.filter_options())
}
