//! Data models for gus
//!
//! Threshold parameters fed to the pipeline and the metrics it reports.

mod metrics;
mod params;

pub use metrics::StainMetrics;
pub use params::{HsvRange, QuantifyParams, RootParams};
