//! Default threshold values and their sanitization.

use serde::Deserialize;

use crate::color::{Hsv, HUE_MAX};
use crate::models::{HsvRange, QuantifyParams, RootParams};

/// Threshold defaults read from the `defaults` section of the config file.
/// Missing fields keep the built-in values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuantifyDefaults {
    /// Lower stain bound as `[H, S, V]`
    pub stain_lower: Hsv,
    /// Upper stain bound as `[H, S, V]`
    pub stain_upper: Hsv,
    pub root_saturation_min: u8,
    pub root_value_max: u8,
}

impl Default for QuantifyDefaults {
    fn default() -> Self {
        Self::from_params(&QuantifyParams::default())
    }
}

impl QuantifyDefaults {
    pub fn from_params(params: &QuantifyParams) -> Self {
        Self {
            stain_lower: params.stain.lower,
            stain_upper: params.stain.upper,
            root_saturation_min: params.root.saturation_min,
            root_value_max: params.root.value_max,
        }
    }

    pub fn to_params(&self) -> QuantifyParams {
        QuantifyParams {
            stain: HsvRange::new(self.stain_lower, self.stain_upper),
            root: RootParams {
                saturation_min: self.root_saturation_min,
                value_max: self.root_value_max,
            },
        }
    }

    /// Clamp hues into range; flag bounds that can never match.
    pub(crate) fn sanitize(&mut self, warnings: &mut Vec<String>) {
        for (name, bound) in [
            ("stain_lower", &mut self.stain_lower),
            ("stain_upper", &mut self.stain_upper),
        ] {
            if bound.h > HUE_MAX {
                warnings.push(format!(
                    "{} hue {} exceeds {}; clamped",
                    name, bound.h, HUE_MAX
                ));
                bound.h = HUE_MAX;
            }
        }

        if !self.stain_lower.le(&self.stain_upper) {
            warnings.push(format!(
                "stain_lower {:?} exceeds stain_upper {:?} on some component; no pixel will be classified as stained",
                <[u8; 3]>::from(self.stain_lower),
                <[u8; 3]>::from(self.stain_upper)
            ));
        }
    }
}

/// Commented template written by `gus-quant init`.
pub fn default_config_yaml() -> String {
    let d = QuantifyDefaults::default();
    format!(
        "# gus-quant configuration\n\
         #\n\
         # Values here replace the built-in thresholds; command-line flags\n\
         # still take precedence. HSV uses H 0-179, S 0-255, V 0-255.\n\
         defaults:\n\
         \x20 # GUS-blue stain box, inclusive [H, S, V]\n\
         \x20 stain_lower: [{}, {}, {}]\n\
         \x20 stain_upper: [{}, {}, {}]\n\
         \x20 # Root tissue: minimum saturation, maximum value\n\
         \x20 root_saturation_min: {}\n\
         \x20 root_value_max: {}\n",
        d.stain_lower.h,
        d.stain_lower.s,
        d.stain_lower.v,
        d.stain_upper.h,
        d.stain_upper.s,
        d.stain_upper.v,
        d.root_saturation_min,
        d.root_value_max
    )
}
