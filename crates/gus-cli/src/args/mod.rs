//! Argument structs shared between CLI commands.

mod thresholds;

pub use thresholds::ThresholdArgs;
