//! Image decoders for various formats
//!
//! Support for PNG, TIFF, and JPEG files. Every decoder produces the same
//! 8-bit, 3-channel image in blue/green/red order, which is what the
//! quantification pipeline consumes.

mod jpeg;
mod png;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Decoded 8-bit color image
///
/// Pixels are stored interleaved as `[b, g, r, b, g, r, ...]`, row-major.
/// Construction validates the dimensions and buffer length, so an instance
/// is always non-empty and well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DecodedImage {
    /// Wrap an interleaved BGR buffer.
    pub fn from_bgr8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, String> {
        check_buffer(width, height, 3, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from an interleaved RGB buffer, swapping to BGR order.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self, String> {
        check_buffer(width, height, 3, rgb.len())?;
        let data = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from an interleaved RGBA buffer.
    ///
    /// The alpha channel is dropped without compositing against any
    /// background: a fully transparent pixel keeps its stored color.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self, String> {
        check_buffer(width, height, 4, rgba.len())?;
        let data = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from a single-channel buffer, replicating gray into all channels.
    pub fn from_gray8(width: u32, height: u32, gray: &[u8]) -> Result<Self, String> {
        check_buffer(width, height, 1, gray.len())?;
        let data = gray.iter().flat_map(|&v| [v, v, v]).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Same dimensions, new pixel buffer of identical length.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Interleaved BGR bytes
    pub fn as_bgr(&self) -> &[u8] {
        &self.data
    }

    /// BGR triple at (x, y)
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Interleaved RGB copy, for display and export.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect()
    }
}

fn check_buffer(width: u32, height: u32, channels: usize, len: usize) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("Image has no pixels: {}x{}", width, height));
    }
    let expected = width as usize * height as usize * channels;
    if len != expected {
        return Err(format!(
            "Image buffer size mismatch: expected {}, got {}",
            expected, len
        ));
    }
    Ok(())
}

/// Container formats accepted by the decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Tiff,
    Jpeg,
}

impl ImageFormat {
    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "tif" | "tiff" => Some(Self::Tiff),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Guess the format from a file name such as `root_01.JPG`.
    pub fn from_filename(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| "No file extension found".to_string())?;
    let format = ImageFormat::from_extension(extension)
        .ok_or_else(|| format!("Unsupported file format: {}", extension))?;

    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;

    decode_image_from_bytes(&bytes, format)
}

/// Decode an in-memory image (uploads, embedded assets)
pub fn decode_image_from_bytes(bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, String> {
    let image = match format {
        ImageFormat::Png => png::decode_png(bytes)?,
        ImageFormat::Tiff => tiff::decode_tiff(bytes)?,
        ImageFormat::Jpeg => jpeg::decode_jpeg(bytes)?,
    };

    log::debug!(
        "Decoded {:?} image: {}x{}",
        format,
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Scale a 16-bit sample to 8 bits by dropping the low byte.
#[inline]
pub(crate) fn u16_to_u8(v: u16) -> u8 {
    (v >> 8) as u8
}
