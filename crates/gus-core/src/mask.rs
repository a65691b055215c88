//! Binary pixel masks
//!
//! One byte per pixel, 0 for background and 255 for foreground, so a mask can
//! be written out directly as an 8-bit grayscale image.

/// Foreground byte value
pub const MASK_ON: u8 = 255;

/// Binary mask with the same dimensions as its source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(if f(x, y) { MASK_ON } else { 0 });
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        let idx = self.index(x, y);
        self.data[idx] = if on { MASK_ON } else { 0 };
    }

    /// Number of foreground pixels
    pub fn count(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Pixel-wise logical AND.
    ///
    /// Panics if the dimensions differ; both operands always come from the
    /// same source image.
    pub fn and(&self, other: &BinaryMask) -> BinaryMask {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "mask dimensions differ"
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| if a != 0 && b != 0 { MASK_ON } else { 0 })
            .collect();
        BinaryMask {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// True when every foreground pixel of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &BinaryMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a == 0 || b != 0)
    }

    /// Raw 0/255 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
