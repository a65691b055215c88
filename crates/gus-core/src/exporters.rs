//! Result exporters
//!
//! CSV tables of per-image metrics and three-panel PNG strips used to check
//! the segmentation by eye.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::decoders::DecodedImage;
use crate::mask::BinaryMask;
use crate::models::StainMetrics;
use crate::pipeline::QuantifyResult;

/// Metrics for one processed file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub file_name: String,
    #[serde(flatten)]
    pub metrics: StainMetrics,
}

impl ResultRow {
    pub fn new(file_name: impl Into<String>, metrics: StainMetrics) -> Self {
        Self {
            file_name: file_name.into(),
            metrics,
        }
    }
}

/// Column layout of the exported table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLayout {
    /// `Archivo,root_pixels,blue_pixels,percentage` (batch tool)
    Batch,
    /// `Archivo,Porcentaje Azul (%),Píxeles Azules,Total Píxeles Raíz` (web download)
    Interactive,
}

impl CsvLayout {
    pub fn header(&self) -> [&'static str; 4] {
        match self {
            CsvLayout::Batch => ["Archivo", "root_pixels", "blue_pixels", "percentage"],
            CsvLayout::Interactive => [
                "Archivo",
                "Porcentaje Azul (%)",
                "Píxeles Azules",
                "Total Píxeles Raíz",
            ],
        }
    }

    fn fields(&self, row: &ResultRow) -> [String; 4] {
        let m = &row.metrics;
        match self {
            CsvLayout::Batch => [
                row.file_name.clone(),
                m.root_pixels.to_string(),
                m.stain_pixels.to_string(),
                format_percentage(m.percentage),
            ],
            CsvLayout::Interactive => [
                row.file_name.clone(),
                format_percentage(m.percentage),
                m.stain_pixels.to_string(),
                m.root_pixels.to_string(),
            ],
        }
    }
}

/// Percentages always carry a decimal point: `100.0`, `12.5`, `6.17`.
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Quote a CSV field when it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render rows as CSV text with a header line and `\n` line endings.
pub fn results_to_csv(rows: &[ResultRow], layout: CsvLayout) -> String {
    let mut out = layout.header().join(",");
    out.push('\n');
    for row in rows {
        let line: Vec<String> = layout
            .fields(row)
            .iter()
            .map(|f| escape_field(f))
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Write rows to a CSV file, replacing any existing file.
pub fn write_results_csv<P: AsRef<Path>>(
    path: P,
    rows: &[ResultRow],
    layout: CsvLayout,
) -> Result<(), String> {
    let path = path.as_ref();
    std::fs::write(path, results_to_csv(rows, layout))
        .map_err(|e| format!("Failed to write CSV {}: {}", path.display(), e))
}

/// Stain mask ramp endpoints: background and foreground
const STAIN_BACKGROUND: [u8; 3] = [247, 251, 255];
const STAIN_FOREGROUND: [u8; 3] = [8, 48, 107];

/// Lay out original | root mask | stain mask side by side as RGB8.
///
/// Output is `3 * width` by `height`, interleaved RGB.
pub fn render_panels(image: &DecodedImage, result: &QuantifyResult) -> Vec<u8> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let original = image.to_rgb8();
    let root = result.root_mask.as_bytes();
    let stain = result.stain_mask.as_bytes();

    let mut out = Vec::with_capacity(width * 3 * height * 3);
    for y in 0..height {
        let row = y * width;
        out.extend_from_slice(&original[row * 3..(row + width) * 3]);
        for &v in &root[row..row + width] {
            out.extend_from_slice(&[v, v, v]);
        }
        for &v in &stain[row..row + width] {
            let color = if v != 0 {
                STAIN_FOREGROUND
            } else {
                STAIN_BACKGROUND
            };
            out.extend_from_slice(&color);
        }
    }
    out
}

/// Write the three-panel strip as an 8-bit RGB PNG.
pub fn export_panels_png<P: AsRef<Path>>(
    path: P,
    image: &DecodedImage,
    result: &QuantifyResult,
) -> Result<(), String> {
    let path = path.as_ref();
    let data = render_panels(image, result);
    write_png_rgb8(path, image.width() * 3, image.height(), &data)
}

/// Write a mask as an 8-bit grayscale PNG (0 or 255 per pixel).
pub fn export_mask_png<P: AsRef<Path>>(path: P, mask: &BinaryMask) -> Result<(), String> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| format!("Failed to create PNG file {}: {}", path.display(), e))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), mask.width(), mask.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(mask.as_bytes())
        .map_err(|e| format!("Failed to write PNG data: {}", e))?;
    writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG {}: {}", path.display(), e))
}

fn write_png_rgb8(path: &Path, width: u32, height: u32, data: &[u8]) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("Failed to create PNG file {}: {}", path.display(), e))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    writer
        .write_image_data(data)
        .map_err(|e| format!("Failed to write PNG data: {}", e))?;
    writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG {}: {}", path.display(), e))
}
