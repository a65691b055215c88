//! Single image processing.

use std::path::Path;

use gus_core::decoders::{decode_image, DecodedImage};
use gus_core::exporters::ResultRow;
use gus_core::models::QuantifyParams;
use gus_core::pipeline::{quantify, QuantifyResult};

use super::input::file_name_of;

/// A decoded image together with its pipeline output
pub struct ProcessedImage {
    pub file_name: String,
    pub image: DecodedImage,
    pub result: QuantifyResult,
}

impl ProcessedImage {
    pub fn row(&self) -> ResultRow {
        ResultRow::new(self.file_name.clone(), self.result.metrics)
    }
}

/// Decode one file and run the quantification pipeline on it.
pub fn process_single_image(path: &Path, params: &QuantifyParams) -> Result<ProcessedImage, String> {
    let image = decode_image(path)?;
    let result = quantify(&image, params);
    Ok(ProcessedImage {
        file_name: file_name_of(path),
        image,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = process_single_image(&dir.path().join("gone.png"), &QuantifyParams::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_process_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(process_single_image(&path, &QuantifyParams::default()).is_err());
    }

    #[test]
    fn test_process_png_without_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank_01.png");
        // An all-white grayscale PNG: no saturation anywhere
        let white = gus_core::mask::BinaryMask::from_fn(4, 4, |_, _| true);
        gus_core::exporters::export_mask_png(&path, &white).unwrap();

        let processed = process_single_image(&path, &QuantifyParams::default()).unwrap();
        assert_eq!(processed.file_name, "blank_01.png");
        assert_eq!(processed.image.width(), 4);

        let row = processed.row();
        assert_eq!(row.metrics.root_pixels, 0);
        assert_eq!(row.metrics.percentage, 0.0);
    }
}
