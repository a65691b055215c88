//! Session state for the interactive front-end
//!
//! Holds the uploaded images, the slider settings and the latest pipeline
//! result for every image. Changing the settings re-runs the pipeline on all
//! uploads, so the table always reflects the current sliders.

use serde::{Deserialize, Serialize};

use gus_core::color::Hsv;
use gus_core::decoders::DecodedImage;
use gus_core::exporters::{results_to_csv, CsvLayout, ResultRow};
use gus_core::models::{HsvRange, QuantifyParams, RootParams};
use gus_core::pipeline::{quantify, QuantifyResult};

use crate::processing::load_upload;

/// File name offered for the CSV download
pub const CSV_FILE_NAME: &str = "resultados_gus_web.csv";

/// Inclusive bounds of one slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderBounds {
    pub min: u8,
    pub max: u8,
}

impl SliderBounds {
    const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: u8) -> u8 {
        value.clamp(self.min, self.max)
    }

    /// Clamp a low/high pair, keeping it ordered like a range slider.
    pub fn clamp_pair(&self, pair: (u8, u8)) -> (u8, u8) {
        let (a, b) = (self.clamp(pair.0), self.clamp(pair.1));
        (a.min(b), a.max(b))
    }
}

pub const HUE_SLIDER: SliderBounds = SliderBounds::new(0, 179);
pub const SATURATION_SLIDER: SliderBounds = SliderBounds::new(0, 255);
pub const VALUE_SLIDER: SliderBounds = SliderBounds::new(0, 255);
pub const ROOT_SATURATION_SLIDER: SliderBounds = SliderBounds::new(0, 100);
pub const ROOT_VALUE_SLIDER: SliderBounds = SliderBounds::new(100, 255);

/// Slider positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub hue: (u8, u8),
    pub saturation: (u8, u8),
    pub value: (u8, u8),
    pub root_saturation: u8,
    pub root_value: u8,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            hue: (90, 140),
            saturation: (40, 255),
            value: (40, 255),
            root_saturation: 20,
            root_value: 240,
        }
    }
}

impl SliderSettings {
    /// Force every value into its slider's range.
    pub fn clamped(&self) -> Self {
        Self {
            hue: HUE_SLIDER.clamp_pair(self.hue),
            saturation: SATURATION_SLIDER.clamp_pair(self.saturation),
            value: VALUE_SLIDER.clamp_pair(self.value),
            root_saturation: ROOT_SATURATION_SLIDER.clamp(self.root_saturation),
            root_value: ROOT_VALUE_SLIDER.clamp(self.root_value),
        }
    }

    pub fn to_params(&self) -> QuantifyParams {
        QuantifyParams {
            stain: HsvRange::new(
                Hsv::new(self.hue.0, self.saturation.0, self.value.0),
                Hsv::new(self.hue.1, self.saturation.1, self.value.1),
            ),
            root: RootParams {
                saturation_min: self.root_saturation,
                value_max: self.root_value,
            },
        }
    }
}

/// One uploaded image and its latest analysis
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub file_name: String,
    pub image: DecodedImage,
    pub result: QuantifyResult,
}

impl SessionEntry {
    pub fn row(&self) -> ResultRow {
        ResultRow::new(self.file_name.clone(), self.result.metrics)
    }
}

/// All uploads plus the current settings
#[derive(Debug, Default)]
pub struct AnalysisSession {
    settings: SliderSettings,
    entries: Vec<SessionEntry>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> SliderSettings {
        self.settings
    }

    pub fn params(&self) -> QuantifyParams {
        self.settings.to_params()
    }

    /// Decode and analyze an upload, appending it to the session.
    /// Returns the new entry's index.
    pub fn add_upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<usize, String> {
        let image = load_upload(bytes, file_name)?;
        Ok(self.add_image(file_name, image))
    }

    /// Analyze an already decoded image with the current settings.
    pub fn add_image(&mut self, file_name: &str, image: DecodedImage) -> usize {
        let result = quantify(&image, &self.params());
        log::info!(
            "Analyzed {}: {:.2}% of {} root pixels",
            file_name,
            result.metrics.percentage,
            result.metrics.root_pixels
        );
        self.entries.push(SessionEntry {
            file_name: file_name.to_string(),
            image,
            result,
        });
        self.entries.len() - 1
    }

    /// Apply new slider positions and re-run every image.
    /// Returns the settings actually used after clamping.
    pub fn set_settings(&mut self, settings: SliderSettings) -> SliderSettings {
        let clamped = settings.clamped();
        if clamped != settings {
            log::warn!("Slider values out of range; clamped to {:?}", clamped);
        }
        if clamped == self.settings {
            return clamped;
        }

        self.settings = clamped;
        let params = self.params();
        for entry in &mut self.entries {
            entry.result = quantify(&entry.image, &params);
        }
        log::debug!("Re-analyzed {} images", self.entries.len());
        clamped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SessionEntry> {
        self.entries.get(index)
    }

    pub fn remove(&mut self, index: usize) -> Option<SessionEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Results table, in upload order
    pub fn rows(&self) -> Vec<ResultRow> {
        self.entries.iter().map(SessionEntry::row).collect()
    }

    /// CSV download contents
    pub fn csv(&self) -> String {
        results_to_csv(&self.rows(), CsvLayout::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stained(width: u32, height: u32) -> DecodedImage {
        DecodedImage::from_bgr8(width, height, [200, 60, 30].repeat((width * height) as usize))
            .unwrap()
    }

    #[test]
    fn test_default_settings_match_pipeline_defaults() {
        assert_eq!(SliderSettings::default().to_params(), QuantifyParams::default());
    }

    #[test]
    fn test_settings_are_clamped_to_sliders() {
        let settings = SliderSettings {
            hue: (200, 10),
            saturation: (40, 255),
            value: (40, 255),
            root_saturation: 150,
            root_value: 50,
        };
        let clamped = settings.clamped();
        assert_eq!(clamped.hue, (10, 179));
        assert_eq!(clamped.root_saturation, 100);
        assert_eq!(clamped.root_value, 100);
    }

    #[test]
    fn test_add_image_and_csv() {
        let mut session = AnalysisSession::new();
        assert!(session.is_empty());
        session.add_image("root_a.png", stained(4, 4));
        session.add_image("blank.png", DecodedImage::from_bgr8(2, 2, vec![0; 12]).unwrap());

        assert_eq!(session.len(), 2);
        assert_eq!(
            session.csv(),
            "Archivo,Porcentaje Azul (%),Píxeles Azules,Total Píxeles Raíz\n\
             root_a.png,100.0,16,16\n\
             blank.png,0.0,0,0\n"
        );
    }

    #[test]
    fn test_changing_settings_reruns_all_images() {
        let mut session = AnalysisSession::new();
        session.add_image("a.png", stained(3, 3));
        session.add_image("b.png", stained(5, 2));

        // Hue window that excludes the stain color (H 115)
        let applied = session.set_settings(SliderSettings {
            hue: (0, 60),
            ..SliderSettings::default()
        });
        assert_eq!(applied.hue, (0, 60));
        for row in session.rows() {
            assert_eq!(row.metrics.stain_pixels, 0, "{} not re-run", row.file_name);
            assert!(row.metrics.root_pixels > 0);
        }

        session.set_settings(SliderSettings::default());
        assert!(session.rows().iter().all(|r| r.metrics.percentage == 100.0));
    }

    #[test]
    fn test_new_uploads_use_current_settings() {
        let mut session = AnalysisSession::new();
        session.set_settings(SliderSettings {
            root_value: 150,
            ..SliderSettings::default()
        });
        // V = 200 exceeds the root maximum, so nothing counts as root
        let index = session.add_image("bright.png", stained(3, 3));
        assert_eq!(session.get(index).unwrap().result.metrics.root_pixels, 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = AnalysisSession::new();
        session.add_image("a.png", stained(2, 2));
        session.add_image("b.png", stained(2, 2));

        assert!(session.remove(5).is_none());
        assert_eq!(session.remove(0).unwrap().file_name, "a.png");
        assert_eq!(session.rows()[0].file_name, "b.png");

        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_add_upload_rejects_unsupported() {
        let mut session = AnalysisSession::new();
        assert!(session.add_upload("scan.tiff", &[0u8; 4]).is_err());
        assert!(session.is_empty());
    }

    #[test]
    fn test_settings_json_partial() {
        let settings: SliderSettings = serde_json::from_str(r#"{"hue":[95,130]}"#).unwrap();
        assert_eq!(settings.hue, (95, 130));
        assert_eq!(settings.root_value, 240);
    }
}
