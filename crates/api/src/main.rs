//! ChargeScope Station Analytics - Main Entry Point

use anyhow::Context;
use api::{init_logging, AppState, Settings};
use metrics_exporter_prometheus::PrometheusBuilder;
use query_pipeline::StationDataset;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== ChargeScope Station Analytics v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load().context("Failed to load configuration")?;
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install metrics recorder")?;

    // The one-time data load; any failure here is fatal and never retried.
    let source = settings.source();
    info!("Loading station records from {}", source.describe());
    let records = station_loader::load(&source)
        .await
        .context("Station data load failed")?;

    let dataset = StationDataset::new(records);
    metrics::gauge!("chargescope_dataset_records").set(dataset.len() as f64);

    let state = Arc::new(AppState::new(dataset, prometheus));
    api::serve(&settings, state).await
}
