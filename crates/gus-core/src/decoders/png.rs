//! PNG image decoder

use std::io::Cursor;

use super::{u16_to_u8, DecodedImage};

/// Decode a PNG byte stream
pub(crate) fn decode_png(bytes: &[u8]) -> Result<DecodedImage, String> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    // Palette and sub-byte gray come out as plain 8-bit samples
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    let width = frame_info.width;
    let height = frame_info.height;
    let bytes = &buf[..frame_info.buffer_size()];

    let channels = match frame_info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err("Indexed PNG was not expanded by the decoder".to_string());
        }
    };

    let samples: Vec<u8> = match frame_info.bit_depth {
        png::BitDepth::Eight => bytes.to_vec(),
        png::BitDepth::Sixteen => bytes
            .chunks_exact(2)
            .map(|pair| u16_to_u8(u16::from_be_bytes([pair[0], pair[1]])))
            .collect(),
        other => {
            return Err(format!("Unsupported PNG bit depth: {:?}", other));
        }
    };

    samples_to_image(&samples, width, height, channels)
}

/// Convert 8-bit interleaved samples with 1-4 channels into a BGR image.
pub(crate) fn samples_to_image(
    samples: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<DecodedImage, String> {
    match channels {
        1 => DecodedImage::from_gray8(width, height, samples),
        2 => {
            let gray: Vec<u8> = samples.chunks_exact(2).map(|ga| ga[0]).collect();
            DecodedImage::from_gray8(width, height, &gray)
        }
        3 => DecodedImage::from_rgb8(width, height, samples),
        4 => DecodedImage::from_rgba8(width, height, samples),
        n => Err(format!("Unsupported channel count: {}", n)),
    }
}
