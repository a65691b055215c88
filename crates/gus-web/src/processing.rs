//! Processing bridge to gus-core
//!
//! Upload decoding with the browser-side limits, and conversion of images
//! and masks into RGBA buffers for canvas display.

use gus_core::decoders::{decode_image_from_bytes, DecodedImage, ImageFormat};
use gus_core::mask::BinaryMask;

/// Maximum upload size in pixels (50 MP)
pub const MAX_IMAGE_PIXELS: u64 = 50_000_000;

/// Extensions accepted by the upload widget
pub const UPLOAD_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Decode an uploaded file.
///
/// Only PNG and JPEG are accepted. RGBA uploads lose their alpha channel
/// without blending.
pub fn load_upload(data: &[u8], filename: &str) -> Result<DecodedImage, String> {
    let format = match ImageFormat::from_filename(filename) {
        Some(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => format,
        _ => {
            return Err(format!(
                "Unsupported file format: {} (accepted: .png, .jpg, .jpeg)",
                filename
            ))
        }
    };

    let image = decode_image_from_bytes(data, format)?;

    // Check image size limit
    let pixels = image.pixel_count() as u64;
    if pixels > MAX_IMAGE_PIXELS {
        return Err(format!(
            "Image too large: {:.1} MP (max {} MP)",
            pixels as f64 / 1_000_000.0,
            MAX_IMAGE_PIXELS / 1_000_000
        ));
    }

    Ok(image)
}

/// Original image as RGBA for a canvas `ImageData`
pub fn image_to_rgba(image: &DecodedImage) -> Vec<u8> {
    image
        .as_bgr()
        .chunks_exact(3)
        .flat_map(|px| [px[2], px[1], px[0], 255])
        .collect()
}

/// Mask as opaque grayscale RGBA: white where set, black elsewhere
pub fn mask_to_rgba(mask: &BinaryMask) -> Vec<u8> {
    mask.as_bytes()
        .iter()
        .flat_map(|&v| [v, v, v, 255])
        .collect()
}
