//! JPEG image decoder

use super::DecodedImage;

/// Decode a baseline or progressive JPEG byte stream.
///
/// Grayscale and CMYK sources are converted to RGB by the decoder before
/// the channel order is swapped to BGR.
pub(crate) fn decode_jpeg(bytes: &[u8]) -> Result<DecodedImage, String> {
    let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
        .map_err(|e| format!("Failed to decode JPEG: {}", e))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    DecodedImage::from_rgb8(width, height, rgb.as_raw())
}
