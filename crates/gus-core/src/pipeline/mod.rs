//! Stain quantification pipeline
//!
//! One pure function, [`quantify`], shared by the batch CLI and the web
//! front-end. The stages run in a fixed order:
//! - smoothing with the 5x5 Gaussian (`filters`)
//! - BGR to HSV conversion (`color`)
//! - root and stain segmentation (`segmentation`)
//! - opening of the stain mask with a cross element (`morphology`)
//! - counting and percentage (`models::StainMetrics`)

mod segmentation;


pub use segmentation::{root_mask, stain_mask};

use crate::color::HsvImage;
use crate::decoders::DecodedImage;
use crate::filters::gaussian_blur_5x5;
use crate::mask::BinaryMask;
use crate::models::{QuantifyParams, StainMetrics};
use crate::morphology::{self, StructuringElement};

/// Output of the pipeline for one image
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifyResult {
    /// Pixels classified as root tissue
    pub root_mask: BinaryMask,

    /// Stained root pixels after morphological cleanup
    pub stain_mask: BinaryMask,

    pub metrics: StainMetrics,
}

/// Measure GUS-blue coverage of the root area in one image.
///
/// Deterministic and side-effect free. An image without root pixels is not
/// an error: it yields zero counts and a 0.0 percentage.
pub fn quantify(image: &DecodedImage, params: &QuantifyParams) -> QuantifyResult {
    if params.stain.is_inverted() {
        log::warn!(
            "Stain range lower bound {:?} exceeds upper bound {:?}; no pixel can match",
            params.stain.lower,
            params.stain.upper
        );
    }

    let smoothed = gaussian_blur_5x5(image);
    let hsv = HsvImage::from_bgr(&smoothed);

    let root = root_mask(&hsv, &params.root);
    let raw_stain = stain_mask(&hsv, &params.stain);
    let intersected = raw_stain.and(&root);
    let cleaned = morphology::open(&intersected, &StructuringElement::cross());

    let metrics = StainMetrics::from_counts(root.count(), cleaned.count());

    log::debug!(
        "Quantified {}x{}: root={} stain_raw={} stain_in_root={} stain_clean={} ({:.2}%)",
        image.width(),
        image.height(),
        metrics.root_pixels,
        raw_stain.count(),
        intersected.count(),
        metrics.stain_pixels,
        metrics.percentage
    );

    QuantifyResult {
        root_mask: root,
        stain_mask: cleaned,
        metrics,
    }
}
