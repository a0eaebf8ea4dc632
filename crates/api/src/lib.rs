//! ChargeScope API Server
//!
//! REST API for the charging-station analytics dashboard. This crate owns
//! all HTTP marshaling: query parameters in, FilterCriteria down to the
//! pipeline, Stats and Suggestions back out as JSON. No pipeline decision
//! logic lives here.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use query_pipeline::StationDataset;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod rate_limit;
mod routes;
pub mod settings;

pub use rate_limit::RateLimitConfig;
pub use settings::Settings;

/// Application state shared across handlers.
///
/// The dataset is normalized before the server binds and never mutated
/// afterwards, so the state needs no lock.
pub struct AppState {
    /// The normalized record snapshot every query runs against.
    pub dataset: StationDataset,
    /// Prometheus exposition handle rendered by `/metrics`.
    pub prometheus: PrometheusHandle,
    /// Version string.
    pub version: String,
    /// Start time.
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a loaded dataset.
    pub fn new(dataset: StationDataset, prometheus: PrometheusHandle) -> Self {
        Self {
            dataset,
            prometheus,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub dataset: DatasetHealth,
}

/// Dataset snapshot metadata reported by the health check.
#[derive(Debug, Serialize)]
pub struct DatasetHealth {
    pub records: usize,
    pub snapshot_id: uuid::Uuid,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/stats", get(routes::stats::get_stats))
        .route("/api/v1/filters", get(routes::filters::get_filters))
        .route("/api/v1/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        dataset: DatasetHealth {
            records: state.dataset.len(),
            snapshot_id: state.dataset.snapshot_id(),
            loaded_at: state.dataset.loaded_at(),
        },
    })
}

/// Prometheus text exposition handler
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus.render()
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until shutdown, with per-IP rate limiting.
pub async fn serve(settings: &Settings, state: Arc<AppState>) -> anyhow::Result<()> {
    let governor = rate_limit::create_governor_config(&settings.rate_limit());
    let app = create_router(state).layer(tower_governor::GovernorLayer { config: governor });

    let addr = settings.server.bind_addr();
    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build state around an in-memory record set, for router tests.
pub fn test_state(records: Vec<station_model::StationRecord>) -> Arc<AppState> {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    Arc::new(AppState::new(StationDataset::new(records), handle))
}
