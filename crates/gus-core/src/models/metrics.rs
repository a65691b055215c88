//! Per-image coverage metrics.

use serde::{Deserialize, Serialize};

/// Pixel counts and stained share of the root area
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StainMetrics {
    /// Pixels classified as root tissue
    pub root_pixels: u64,

    /// Stained pixels left after cleanup; always a subset of the root
    #[serde(rename = "blue_pixels")]
    pub stain_pixels: u64,

    /// `stain_pixels / root_pixels * 100`, two decimals; 0.0 without root
    pub percentage: f64,
}

impl StainMetrics {
    pub fn from_counts(root_pixels: u64, stain_pixels: u64) -> Self {
        Self {
            root_pixels,
            stain_pixels,
            percentage: coverage_percentage(root_pixels, stain_pixels),
        }
    }

    /// No root tissue was found, so the percentage carries no information.
    pub fn has_root(&self) -> bool {
        self.root_pixels > 0
    }
}

fn coverage_percentage(root_pixels: u64, stain_pixels: u64) -> f64 {
    if root_pixels == 0 {
        return 0.0;
    }
    let raw = stain_pixels as f64 / root_pixels as f64 * 100.0;
    round_two_decimals(raw)
}

/// Round to two decimals on the exact binary value, ties to even.
///
/// `3.125` is exactly representable and becomes `3.12`; scaling by 100
/// before rounding would turn it into `3.13`.
fn round_two_decimals(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
