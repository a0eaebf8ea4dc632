//! Query Pipeline
//!
//! Owns the normalized dataset snapshot and sequences the
//! filter → aggregate → predict stages per query. Each query is a pure
//! function of the snapshot and the criteria; nothing accumulates between
//! calls.

mod dataset;
mod options;

pub use dataset::{QueryOutcome, StationDataset};
pub use options::FilterOptions;

pub use gap_predictor::Suggestion;
pub use stats_aggregator::Stats;
