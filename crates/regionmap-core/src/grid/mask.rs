//! BinaryMask - bit-packed foreground/background grid

use super::access::{get_data_bit, set_data_bit};
use super::{compute_wpl, dimension_from_len};
use crate::error::{Error, Result};

/// Binary foreground mask
///
/// One bit per cell: `true` is foreground, `false` is background. The
/// dimensions are fixed at creation.
///
/// # Examples
///
/// ```
/// use regionmap_core::BinaryMask;
///
/// let mut mask = BinaryMask::new(4, 3);
/// mask.set(1, 2, true).unwrap();
/// assert_eq!(mask.get(1, 2), Some(true));
/// assert_eq!(mask.get(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinaryMask {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// Packed cell data; padding bits past `width` are always zero
    data: Vec<u32>,
}

impl BinaryMask {
    /// Create an all-background mask.
    ///
    /// Either dimension may be zero, which yields an empty mask.
    pub fn new(width: u32, height: u32) -> Self {
        let wpl = compute_wpl(width);
        let data = vec![0u32; (wpl as usize) * (height as usize)];
        Self {
            width,
            height,
            wpl,
            data,
        }
    }

    /// Create a mask from row-wise cell values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputShape`] if the rows do not all have the
    /// length of the first row.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, cells) in rows.iter().enumerate() {
            let actual = cells.as_ref().len();
            if actual != expected {
                return Err(Error::InvalidInputShape {
                    row,
                    expected,
                    actual,
                });
            }
        }

        let width = dimension_from_len(expected, "width")?;
        let height = dimension_from_len(rows.len(), "height")?;
        let mut mask = Self::new(width, height);
        for (y, cells) in rows.iter().enumerate() {
            for (x, &val) in cells.as_ref().iter().enumerate() {
                if val {
                    mask.set_unchecked(x as u32, y as u32, true);
                }
            }
        }
        Ok(mask)
    }

    /// Create a mask by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set_unchecked(x, y, true);
                }
            }
        }
        mask
    }

    /// Get the mask width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the words per line.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.wpl
    }

    /// Check whether the mask has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn line(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.wpl as usize);
        &self.data[start..start + self.wpl as usize]
    }

    #[inline]
    fn line_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y as usize) * (self.wpl as usize);
        let wpl = self.wpl as usize;
        &mut self.data[start..start + wpl]
    }

    /// Get a cell value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a cell value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`. An `x` past the width but inside the row's
    /// padding reads as background.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        get_data_bit(self.line(y), x)
    }

    /// Set a cell value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, val: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, val);
        Ok(())
    }

    /// Set a cell value without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: bool) {
        set_data_bit(self.line_mut(y), x, val);
    }

    /// Count foreground cells.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Iterate over foreground cell coordinates in row-major order.
    pub fn foreground_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.get_unchecked(x, y))
                .map(move |x| (x, y))
        })
    }

    /// Copy the mask out as row-wise cell values.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get_unchecked(x, y)).collect())
            .collect()
    }

    /// Check that `(width, height)` matches this mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if (width, height) != self.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: (width, height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let mask = BinaryMask::new(40, 3);
        assert_eq!(mask.wpl(), 2);
        assert_eq!(mask.count_foreground(), 0);
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_zero_sized_masks() {
        assert!(BinaryMask::new(0, 0).is_empty());
        assert!(BinaryMask::new(5, 0).is_empty());
        assert!(BinaryMask::new(0, 5).is_empty());
        assert_eq!(BinaryMask::new(0, 5).get(0, 0), None);
    }

    #[test]
    fn test_from_rows() {
        let mask = BinaryMask::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(mask.dimensions(), (2, 2));
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(false));
        assert_eq!(mask.get(1, 1), Some(true));
        assert_eq!(mask.to_rows(), vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![true, true, true], vec![true], vec![true, true, true]];
        let err = BinaryMask::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInputShape {
                row: 1,
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<bool>> = Vec::new();
        let mask = BinaryMask::from_rows(&rows).unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut mask = BinaryMask::new(3, 3);
        assert!(matches!(
            mask.set(3, 0, true),
            Err(Error::IndexOutOfBounds { x: 3, y: 0, .. })
        ));
    }

    #[test]
    fn test_foreground_pixels_row_major() {
        let mask = BinaryMask::from_fn(3, 2, |x, y| x == y || (x == 2 && y == 0));
        let pixels: Vec<_> = mask.foreground_pixels().collect();
        assert_eq!(pixels, vec![(0, 0), (2, 0), (1, 1)]);
        assert_eq!(mask.count_foreground(), 3);
    }

    #[test]
    fn test_wide_rows_cross_words() {
        let mask = BinaryMask::from_fn(70, 2, |x, _| x % 3 == 0);
        assert_eq!(mask.count_foreground(), 2 * 24);
        assert_eq!(mask.get(69, 1), Some(true));
        assert_eq!(mask.get(68, 1), Some(false));
    }

    #[test]
    fn test_check_dimensions() {
        let mask = BinaryMask::new(4, 2);
        assert!(mask.check_dimensions(4, 2).is_ok());
        assert!(matches!(
            mask.check_dimensions(2, 4),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
