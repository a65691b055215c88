//! Shared utilities for gus-cli
//!
//! Argument parsing, threshold resolution and input discovery used by the
//! `gus-quant` subcommands.

pub mod args;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use args::ThresholdArgs;
pub use parsers::{parse_hsv_triple, parse_root_saturation, parse_root_value};
pub use processing::{
    file_name_of, find_images, panel_path, process_single_image, ProcessedImage,
    SUPPORTED_EXTENSIONS,
};
pub use types::ThresholdOverrides;
