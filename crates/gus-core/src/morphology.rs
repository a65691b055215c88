//! Binary morphology on [`BinaryMask`]
//!
//! Neighbours that fall outside the image are ignored: erosion treats them as
//! foreground and dilation as background, so neither operation moves the
//! image border.

use crate::mask::BinaryMask;

/// Structuring element given as offsets from its anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<(i32, i32)>,
}

impl StructuringElement {
    /// 3x3 cross: center plus the four orthogonal neighbours
    pub fn cross() -> Self {
        Self {
            offsets: vec![(0, 0), (0, -1), (-1, 0), (1, 0), (0, 1)],
        }
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        Self::cross()
    }
}

/// Iterate over the in-bounds neighbours of (x, y).
fn neighbours<'a>(
    mask: &'a BinaryMask,
    element: &'a StructuringElement,
    x: u32,
    y: u32,
) -> impl Iterator<Item = bool> + 'a {
    let (w, h) = (mask.width() as i64, mask.height() as i64);
    element.offsets.iter().filter_map(move |&(dx, dy)| {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= w || ny >= h {
            None
        } else {
            Some(mask.get(nx as u32, ny as u32))
        }
    })
}

/// Keep a pixel only if every in-bounds neighbour under the element is set.
pub fn erode(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    BinaryMask::from_fn(mask.width(), mask.height(), |x, y| {
        neighbours(mask, element, x, y).all(|on| on)
    })
}

/// Set a pixel if any in-bounds neighbour under the element is set.
///
/// Elements are point-symmetric, so the element is its own reflection.
pub fn dilate(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    BinaryMask::from_fn(mask.width(), mask.height(), |x, y| {
        neighbours(mask, element, x, y).any(|on| on)
    })
}

/// Morphological opening: erosion followed by dilation.
///
/// Removes foreground features the element cannot fit inside while
/// leaving larger regions' shape intact. Never adds pixels.
pub fn open(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    dilate(&erode(mask, element), element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&str]) -> BinaryMask {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        BinaryMask::from_fn(width, height, |x, y| {
            rows[y as usize].as_bytes()[x as usize] == b'#'
        })
    }

    #[test]
    fn test_isolated_pixel_removed_by_opening() {
        let mask = mask_from_rows(&[".....", ".....", "..#..", ".....", "....."]);
        let opened = open(&mask, &StructuringElement::cross());
        assert_eq!(opened.count(), 0);
    }

    #[test]
    fn test_thin_line_removed_by_opening() {
        let mask = mask_from_rows(&["......", "######", "......"]);
        let opened = open(&mask, &StructuringElement::cross());
        assert!(opened.is_empty());
    }

    #[test]
    fn test_block_reduced_to_cross() {
        let mask = mask_from_rows(&[".....", ".###.", ".###.", ".###.", "....."]);
        let expected = mask_from_rows(&[".....", "..#..", ".###.", "..#..", "....."]);

        let opened = open(&mask, &StructuringElement::cross());
        assert_eq!(opened, expected);
    }

    #[test]
    fn test_full_mask_survives_at_borders() {
        // Out-of-bounds neighbours never erode the border
        let mask = BinaryMask::from_fn(3, 2, |_, _| true);
        let element = StructuringElement::cross();

        assert_eq!(erode(&mask, &element), mask);
        assert_eq!(open(&mask, &element), mask);
    }

    #[test]
    fn test_dilate_grows_cross() {
        let mask = mask_from_rows(&["...", ".#.", "..."]);
        let expected = mask_from_rows(&[".#.", "###", ".#."]);
        assert_eq!(dilate(&mask, &StructuringElement::cross()), expected);
    }

    #[test]
    fn test_opening_is_anti_extensive_and_idempotent() {
        let mask = mask_from_rows(&[
            "##..#...",
            "###.....",
            "####..#.",
            ".###.###",
            "..#..###",
        ]);
        let element = StructuringElement::cross();

        let once = open(&mask, &element);
        assert!(once.is_subset_of(&mask));
        assert_eq!(open(&once, &element), once);
    }
}
