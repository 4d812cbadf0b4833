//! LabelGrid - per-cell region labels

use super::dimension_from_len;
use crate::error::{Error, Result};
use crate::grid::BinaryMask;
use std::collections::HashSet;

/// Region label grid
///
/// Each cell holds `0` for background or a positive region id. Cells are
/// stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelGrid {
    /// Create an all-background label grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u32; (width as usize) * (height as usize)],
        }
    }

    /// Create a label grid from row-wise labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputShape`] if the rows do not all have the
    /// length of the first row.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(expected * rows.len());
        for (row, labels) in rows.iter().enumerate() {
            let labels = labels.as_ref();
            if labels.len() != expected {
                return Err(Error::InvalidInputShape {
                    row,
                    expected,
                    actual: labels.len(),
                });
            }
            data.extend_from_slice(labels);
        }

        Ok(Self {
            width: dimension_from_len(expected, "width")?,
            height: dimension_from_len(rows.len(), "height")?,
            data,
        })
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the label at (x, y), or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the label at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the cell index lies past the end of the grid.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, label);
        Ok(())
    }

    /// Set the label at (x, y) without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, label: u32) {
        let idx = self.index(x, y);
        self.data[idx] = label;
    }

    /// Largest label present, `0` when there is no foreground.
    ///
    /// For a grid produced by the labeler this is the region count, since ids
    /// are allocated contiguously from 1.
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Raw row-major labels.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Iterate over rows of labels.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.data[y * w..(y + 1) * w])
    }

    /// Mask of every labeled (non-zero) cell.
    pub fn foreground_mask(&self) -> BinaryMask {
        BinaryMask::from_fn(self.width, self.height, |x, y| {
            self.get_unchecked(x, y) != 0
        })
    }

    /// Mask of the cells whose label is one of `ids`.
    ///
    /// Label `0` in `ids` is ignored; background never becomes foreground.
    pub fn mask_of(&self, ids: &[u32]) -> BinaryMask {
        let wanted: HashSet<u32> = ids.iter().copied().filter(|&id| id != 0).collect();
        BinaryMask::from_fn(self.width, self.height, |x, y| {
            wanted.contains(&self.get_unchecked(x, y))
        })
    }
}
