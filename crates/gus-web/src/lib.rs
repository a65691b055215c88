//! GUS Web - Browser-based GUS-blue stain quantification
//!
//! WebAssembly bridge for the interactive front-end. Uploads, slider
//! changes and downloads go through [`Session`]; all processing happens
//! locally in the browser using the same pipeline as the batch tool.

pub mod processing;
pub mod state;

use wasm_bindgen::prelude::*;

use crate::processing::{image_to_rgba, mask_to_rgba};
use crate::state::{AnalysisSession, SessionEntry, SliderSettings, CSV_FILE_NAME};

/// Initialize logging and panic reporting
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("GUS Web initialized");
}

fn to_js(err: String) -> JsValue {
    JsValue::from_str(&err)
}

/// Interactive analysis session exposed to JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct Session {
    inner: AnalysisSession,
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        Session::default()
    }

    /// Decode and analyze an uploaded file; returns its index.
    #[wasm_bindgen(js_name = addImage)]
    pub fn add_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<usize, JsValue> {
        self.inner.add_upload(file_name, bytes).map_err(to_js)
    }

    /// Move the sliders and re-run every image. Out-of-range values are
    /// clamped; the applied settings come back as JSON.
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen(js_name = setParams)]
    pub fn set_params(
        &mut self,
        h_low: u8,
        h_high: u8,
        s_low: u8,
        s_high: u8,
        v_low: u8,
        v_high: u8,
        root_saturation: u8,
        root_value: u8,
    ) -> Result<String, JsValue> {
        let applied = self.inner.set_settings(SliderSettings {
            hue: (h_low, h_high),
            saturation: (s_low, s_high),
            value: (v_low, v_high),
            root_saturation,
            root_value,
        });
        serde_json::to_string(&applied).map_err(|e| to_js(e.to_string()))
    }

    /// Same as `setParams`, from a JSON object; missing fields take defaults.
    #[wasm_bindgen(js_name = setParamsJson)]
    pub fn set_params_json(&mut self, json: &str) -> Result<String, JsValue> {
        let settings: SliderSettings = serde_json::from_str(json)
            .map_err(|e| to_js(format!("Invalid parameters: {}", e)))?;
        let applied = self.inner.set_settings(settings);
        serde_json::to_string(&applied).map_err(|e| to_js(e.to_string()))
    }

    /// Current slider settings as JSON
    #[wasm_bindgen(js_name = paramsJson)]
    pub fn params_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.settings()).map_err(|e| to_js(e.to_string()))
    }

    /// Results table as a JSON array of rows
    #[wasm_bindgen(js_name = resultsJson)]
    pub fn results_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.rows()).map_err(|e| to_js(e.to_string()))
    }

    /// CSV download contents
    pub fn csv(&self) -> String {
        self.inner.csv()
    }

    #[wasm_bindgen(js_name = csvFileName)]
    pub fn csv_file_name(&self) -> String {
        CSV_FILE_NAME.to_string()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.inner.remove(index).is_some()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn width(&self, index: usize) -> Result<u32, JsValue> {
        self.entry(index).map(|e| e.image.width())
    }

    pub fn height(&self, index: usize) -> Result<u32, JsValue> {
        self.entry(index).map(|e| e.image.height())
    }

    /// Original image as RGBA bytes
    #[wasm_bindgen(js_name = originalRgba)]
    pub fn original_rgba(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        self.entry(index).map(|e| image_to_rgba(&e.image))
    }

    /// Root mask as RGBA bytes
    #[wasm_bindgen(js_name = rootMaskRgba)]
    pub fn root_mask_rgba(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        self.entry(index).map(|e| mask_to_rgba(&e.result.root_mask))
    }

    /// Cleaned stain mask as RGBA bytes
    #[wasm_bindgen(js_name = stainMaskRgba)]
    pub fn stain_mask_rgba(&self, index: usize) -> Result<Vec<u8>, JsValue> {
        self.entry(index).map(|e| mask_to_rgba(&e.result.stain_mask))
    }
}

impl Session {
    fn entry(&self, index: usize) -> Result<&SessionEntry, JsValue> {
        self.inner
            .get(index)
            .ok_or_else(|| to_js(format!("No image at index {}", index)))
    }
}
