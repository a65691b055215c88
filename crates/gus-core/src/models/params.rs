//! Threshold parameters for root and stain segmentation.

use serde::{Deserialize, Serialize};

use crate::color::Hsv;

/// Closed HSV box; a pixel matches when `lower <= hsv <= upper` on every
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    pub const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, hsv: Hsv) -> bool {
        self.lower.le(&hsv) && hsv.le(&self.upper)
    }

    /// True when some lower bound exceeds its upper bound. Such a range
    /// matches nothing.
    pub fn is_inverted(&self) -> bool {
        self.lower.h > self.upper.h || self.lower.s > self.upper.s || self.lower.v > self.upper.v
    }
}

impl Default for HsvRange {
    /// Blue band used for GUS staining
    fn default() -> Self {
        Self::new(Hsv::new(90, 40, 40), Hsv::new(140, 255, 255))
    }
}

/// Root tissue segmentation: saturated enough and not blown out.
/// Hue is not constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootParams {
    /// Minimum saturation (inclusive)
    pub saturation_min: u8,
    /// Maximum value/brightness (inclusive)
    pub value_max: u8,
}

impl RootParams {
    #[inline]
    pub fn contains(&self, hsv: Hsv) -> bool {
        hsv.s >= self.saturation_min && hsv.v <= self.value_max
    }
}

impl Default for RootParams {
    fn default() -> Self {
        Self {
            saturation_min: 20,
            value_max: 240,
        }
    }
}

/// Everything `quantify` needs besides the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuantifyParams {
    pub stain: HsvRange,
    pub root: RootParams,
}
