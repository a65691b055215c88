//! Threshold arguments shared by `quantify` and `analyze`.

use std::path::PathBuf;

use clap::Args;
use gus_core::config::load_config;
use gus_core::models::QuantifyParams;

use crate::parsers::{parse_hsv_triple, parse_root_saturation, parse_root_value};
use crate::types::ThresholdOverrides;

/// Stain and root thresholds. Anything left out falls back to the config
/// file, then to the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct ThresholdArgs {
    /// Lower stain bound (H 0-179, S 0-255, V 0-255)
    #[arg(long, num_args = 3, value_names = ["H", "S", "V"])]
    pub hsv_lower: Option<Vec<u16>>,

    /// Upper stain bound (H 0-179, S 0-255, V 0-255)
    #[arg(long, num_args = 3, value_names = ["H", "S", "V"])]
    pub hsv_upper: Option<Vec<u16>>,

    /// Minimum saturation of root tissue
    #[arg(long, value_name = "N")]
    pub root_s: Option<u16>,

    /// Maximum value (brightness) of root tissue
    #[arg(long, value_name = "N")]
    pub root_v: Option<u16>,

    /// Config file with default thresholds
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ThresholdArgs {
    /// Validate the flags without touching the config file.
    pub fn overrides(&self) -> Result<ThresholdOverrides, String> {
        Ok(ThresholdOverrides {
            hsv_lower: self
                .hsv_lower
                .as_deref()
                .map(|v| parse_hsv_triple(v, "--hsv-lower"))
                .transpose()?,
            hsv_upper: self
                .hsv_upper
                .as_deref()
                .map(|v| parse_hsv_triple(v, "--hsv-upper"))
                .transpose()?,
            root_saturation_min: self.root_s.map(parse_root_saturation).transpose()?,
            root_value_max: self.root_v.map(parse_root_value).transpose()?,
        })
    }

    /// Final parameters: flags, then config file, then built-ins.
    pub fn resolve(&self) -> Result<QuantifyParams, String> {
        let overrides = self.overrides()?;

        let handle = load_config(self.config.as_deref());
        match &handle.source {
            Some(source) => log::info!("Loaded config from {}", source.display()),
            None => log::debug!("Using built-in threshold defaults"),
        }
        for warning in &handle.warnings {
            log::warn!("Config: {}", warning);
        }

        let params = overrides.resolve(&handle.config.defaults);
        if params.stain.is_inverted() {
            log::warn!("Stain bounds are inverted; every image will report 0 stained pixels");
        }
        Ok(params)
    }
}
