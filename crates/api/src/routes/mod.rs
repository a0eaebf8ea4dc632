//! HTTP Route Handlers

pub mod filters;
pub mod stats;
