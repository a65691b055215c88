//! Color space conversions
//!
//! Provides the 8-bit BGR -> HSV transform used for stain and root
//! classification, plus the per-pixel HSV image built from it.

mod hsv;


pub use hsv::{bgr_to_hsv, Hsv, HsvImage, HUE_MAX};
