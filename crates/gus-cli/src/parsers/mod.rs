//! Parsing functions for CLI arguments.

mod thresholds;

pub use thresholds::{parse_hsv_triple, parse_root_saturation, parse_root_value};
