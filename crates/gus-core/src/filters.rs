//! Smoothing filters

use crate::decoders::DecodedImage;

/// 5-tap binomial kernel; the Gaussian for ksize 5 with auto-derived sigma
const GAUSS_5: [u32; 5] = [1, 4, 6, 4, 1];

/// Sum of the 2D kernel weights (16 * 16)
const GAUSS_5_SHIFT: u32 = 8;

/// Mirror an out-of-range index back into `0..len` without repeating the
/// edge sample (`gfedcb|abcdefgh|gfedcba`).
#[inline]
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let mut i = i;
    while i < 0 || i >= len {
        if i < 0 {
            i = -i;
        }
        if i >= len {
            i = 2 * (len - 1) - i;
        }
    }
    i as usize
}

/// Apply the fixed 5x5 Gaussian to every channel of a BGR image.
///
/// Separable integer implementation: exact weighted sums, one rounding at
/// the end. Uniform regions are returned unchanged.
pub fn gaussian_blur_5x5(image: &DecodedImage) -> DecodedImage {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let src = image.as_bgr();

    // Horizontal pass, unnormalized (max 255 * 16)
    let mut horizontal = vec![0u32; width * height * 3];
    for y in 0..height {
        let row = y * width;
        for x in 0..width {
            for c in 0..3 {
                let mut acc = 0u32;
                for (k, &weight) in GAUSS_5.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - 2, width);
                    acc += weight * src[(row + sx) * 3 + c] as u32;
                }
                horizontal[(row + x) * 3 + c] = acc;
            }
        }
    }

    // Vertical pass, then round back to 8 bits
    let mut out = vec![0u8; width * height * 3];
    let round = 1u32 << (GAUSS_5_SHIFT - 1);
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let mut acc = 0u32;
                for (k, &weight) in GAUSS_5.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - 2, height);
                    acc += weight * horizontal[(sy * width + x) * 3 + c];
                }
                out[(y * width + x) * 3 + c] = ((acc + round) >> GAUSS_5_SHIFT).min(255) as u8;
            }
        }
    }

    image.with_data(out)
}
