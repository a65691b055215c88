//! Threshold values given on the command line.

use gus_core::color::Hsv;
use gus_core::config::QuantifyDefaults;
use gus_core::models::{HsvRange, QuantifyParams, RootParams};

/// Thresholds explicitly set by flags; `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdOverrides {
    pub hsv_lower: Option<Hsv>,
    pub hsv_upper: Option<Hsv>,
    pub root_saturation_min: Option<u8>,
    pub root_value_max: Option<u8>,
}

impl ThresholdOverrides {
    /// Flags win over config file defaults, which already carry the
    /// built-in values for anything the file leaves out.
    pub fn resolve(&self, defaults: &QuantifyDefaults) -> QuantifyParams {
        QuantifyParams {
            stain: HsvRange::new(
                self.hsv_lower.unwrap_or(defaults.stain_lower),
                self.hsv_upper.unwrap_or(defaults.stain_upper),
            ),
            root: RootParams {
                saturation_min: self
                    .root_saturation_min
                    .unwrap_or(defaults.root_saturation_min),
                value_max: self.root_value_max.unwrap_or(defaults.root_value_max),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_uses_defaults() {
        let params = ThresholdOverrides::default().resolve(&QuantifyDefaults::default());
        assert_eq!(params, QuantifyParams::default());
    }

    #[test]
    fn test_flags_take_precedence() {
        let defaults = QuantifyDefaults {
            root_value_max: 200,
            ..QuantifyDefaults::default()
        };
        let overrides = ThresholdOverrides {
            hsv_lower: Some(Hsv::new(100, 60, 60)),
            root_saturation_min: Some(35),
            ..ThresholdOverrides::default()
        };

        let params = overrides.resolve(&defaults);
        assert_eq!(params.stain.lower, Hsv::new(100, 60, 60));
        assert_eq!(params.stain.upper, Hsv::new(140, 255, 255));
        assert_eq!(params.root.saturation_min, 35);
        // Config value survives where no flag was given
        assert_eq!(params.root.value_max, 200);
    }
}
