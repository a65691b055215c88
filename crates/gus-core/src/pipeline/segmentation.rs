//! HSV thresholding into binary masks.

use crate::color::HsvImage;
use crate::mask::BinaryMask;
use crate::models::{HsvRange, RootParams};

/// Pixels saturated enough and dark enough to be root tissue
pub fn root_mask(hsv: &HsvImage, params: &RootParams) -> BinaryMask {
    BinaryMask::from_fn(hsv.width, hsv.height, |x, y| params.contains(hsv.get(x, y)))
}

/// Pixels inside the closed HSV box, before any root constraint
pub fn stain_mask(hsv: &HsvImage, range: &HsvRange) -> BinaryMask {
    BinaryMask::from_fn(hsv.width, hsv.height, |x, y| range.contains(hsv.get(x, y)))
}
