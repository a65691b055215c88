//! Type definitions for CLI.

mod overrides;

pub use overrides::ThresholdOverrides;
