//! HSV (Hue-Saturation-Value) conversion for 8-bit images

use serde::{Deserialize, Serialize};

use crate::decoders::DecodedImage;

/// Largest hue value produced by [`bgr_to_hsv`] (hue is stored as degrees / 2).
pub const HUE_MAX: u8 = 179;

/// Fixed-point precision of the division tables
const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

/// HSV color representation
/// - H (hue): 0-179 (degrees halved)
/// - S (saturation): 0-255
/// - V (value): 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Component-wise `<=`
    #[inline]
    pub fn le(&self, other: &Hsv) -> bool {
        self.h <= other.h && self.s <= other.s && self.v <= other.v
    }
}

impl From<[u8; 3]> for Hsv {
    fn from(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<Hsv> for [u8; 3] {
    fn from(hsv: Hsv) -> Self {
        [hsv.h, hsv.s, hsv.v]
    }
}

/// Division lookup tables: `sdiv[v] = 255 * 2^12 / v`, `hdiv[d] = 180 * 2^12 / (6 d)`
struct DivTables {
    sdiv: [i32; 256],
    hdiv: [i32; 256],
}

const fn build_tables() -> DivTables {
    let mut sdiv = [0i32; 256];
    let mut hdiv = [0i32; 256];
    let mut i = 1;
    while i < 256 {
        sdiv[i] = div_round_half_even(255 << HSV_SHIFT, i as i64);
        hdiv[i] = div_round_half_even(180 << HSV_SHIFT, 6 * i as i64);
        i += 1;
    }
    DivTables { sdiv, hdiv }
}

/// Integer division rounded to nearest, ties to even.
const fn div_round_half_even(num: i64, den: i64) -> i32 {
    let q = num / den;
    let r = num % den;
    let twice = 2 * r;
    let rounded = if twice > den || (twice == den && q % 2 == 1) {
        q + 1
    } else {
        q
    };
    rounded as i32
}

static TABLES: DivTables = build_tables();

/// Convert one BGR pixel to HSV
///
/// Fixed-point arithmetic; the result is bit-exact with the common 8-bit
/// BGR->HSV implementation found in imaging libraries. Pure black and
/// grays map to H=0, S=0.
#[inline]
pub fn bgr_to_hsv(b: u8, g: u8, r: u8) -> Hsv {
    let (b, g, r) = (b as i32, g as i32, r as i32);

    let v = b.max(g).max(r);
    let vmin = b.min(g).min(r);
    let diff = v - vmin;

    let s = (diff * TABLES.sdiv[v as usize] + HSV_ROUND) >> HSV_SHIFT;

    let numerator = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (numerator * TABLES.hdiv[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
    if h < 0 {
        h += 180;
    }

    Hsv {
        h: h.clamp(0, 255) as u8,
        s: s as u8,
        v: v as u8,
    }
}

/// Per-pixel HSV image, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Hsv>,
}

impl HsvImage {
    /// Convert every pixel of a BGR image.
    pub fn from_bgr(image: &DecodedImage) -> Self {
        let data = image
            .as_bgr()
            .chunks_exact(3)
            .map(|px| bgr_to_hsv(px[0], px[1], px[2]))
            .collect();

        Self {
            width: image.width(),
            height: image.height(),
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Hsv {
        self.data[y as usize * self.width as usize + x as usize]
    }
}
