//! Grids - the rasters of the labeling pipeline
//!
//! Two grid types share one coordinate convention:
//!
//! - [`BinaryMask`] stores one bit per cell. Cells are packed MSB to LSB
//!   within 32-bit words and every row starts on a word boundary, the same
//!   layout Leptonica uses for 1 bpp images.
//! - [`LabelGrid`] stores one `u32` label per cell, row-major.
//!
//! Zero-sized grids are valid values. Labeling an empty mask yields an empty
//! label grid rather than an error; only ragged row input is rejected.

pub mod access;
mod convert;
mod labels;
mod mask;

pub use convert::FOREGROUND_LUMA;
pub use labels::LabelGrid;
pub use mask::BinaryMask;

/// Compute 32-bit words per line for a 1 bpp row of `width` cells.
#[inline]
pub(crate) fn compute_wpl(width: u32) -> u32 {
    width.div_ceil(32)
}

/// Convert a row-wise length into a grid dimension.
pub(crate) fn dimension_from_len(len: usize, what: &str) -> crate::Result<u32> {
    u32::try_from(len)
        .map_err(|_| crate::Error::InvalidParameter(format!("{what} {len} exceeds u32 range")))
}
