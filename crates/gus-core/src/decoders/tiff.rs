//! TIFF image decoder

use std::io::Cursor;

use super::png::samples_to_image;
use super::{u16_to_u8, DecodedImage};

/// Decode a TIFF byte stream (first page only)
pub(crate) fn decode_tiff(bytes: &[u8]) -> Result<DecodedImage, String> {
    use tiff::decoder::{DecodingResult, Limits};

    // Microscope stitches can be large; allow up to 1GB uncompressed
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 1024 * 1024 * 1024;
    limits.ifd_value_size = 1024 * 1024 * 1024;
    limits.intermediate_buffer_size = 1024 * 1024 * 1024;

    let mut decoder = tiff::decoder::Decoder::new(Cursor::new(bytes))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?
        .with_limits(limits);

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::GrayA(_) => 2,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        tiff::ColorType::CMYK(_) => return Err("CMYK color type not supported".to_string()),
        tiff::ColorType::YCbCr(_) => return Err("YCbCr color type not supported".to_string()),
        tiff::ColorType::Palette(_) => return Err("Palette color type not supported".to_string()),
        _ => return Err(format!("Unknown TIFF color type: {:?}", color_type)),
    };

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let samples: Vec<u8> = match image_data {
        DecodingResult::U8(buf) => buf,
        DecodingResult::U16(buf) => buf.into_iter().map(u16_to_u8).collect(),
        _ => {
            return Err("Only 8-bit and 16-bit unsigned TIFF samples are supported".to_string());
        }
    };

    samples_to_image(&samples, width, height, channels)
}
