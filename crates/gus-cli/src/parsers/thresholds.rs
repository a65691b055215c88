//! Threshold value parsing for HSV bounds and root limits.

use gus_core::color::{Hsv, HUE_MAX};

/// Parse an `H S V` triple given as three separate values.
///
/// # Arguments
/// * `values` - Exactly three numbers: hue 0-179, saturation and value 0-255
/// * `flag` - Flag name used in error messages
pub fn parse_hsv_triple(values: &[u16], flag: &str) -> Result<Hsv, String> {
    let [h, s, v] = <[u16; 3]>::try_from(values).map_err(|_| {
        format!(
            "{} expects three values H S V (e.g., 90 40 40), got {}",
            flag,
            values.len()
        )
    })?;

    if h > HUE_MAX as u16 {
        return Err(format!(
            "{}: hue {} must be in range 0-{}",
            flag, h, HUE_MAX
        ));
    }
    for (val, name) in [(s, "saturation"), (v, "value")] {
        if val > 255 {
            return Err(format!("{}: {} {} must be in range 0-255", flag, name, val));
        }
    }

    Ok(Hsv::new(h as u8, s as u8, v as u8))
}

/// Minimum root saturation, 0-255.
pub fn parse_root_saturation(value: u16) -> Result<u8, String> {
    u8::try_from(value).map_err(|_| format!("--root-s {} must be in range 0-255", value))
}

/// Maximum root value, 0-255.
pub fn parse_root_value(value: u16) -> Result<u8, String> {
    u8::try_from(value).map_err(|_| format!("--root-v {} must be in range 0-255", value))
}
