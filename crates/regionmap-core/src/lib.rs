//! regionmap-core - Grid data structures for region labeling
//!
//! This crate provides the two rasters the labeling pipeline passes around:
//!
//! - [`BinaryMask`] - 1 bpp foreground/background grid, bit-packed
//! - [`LabelGrid`] - 32-bit region label per cell, `0` = background
//!
//! Both are addressed as `(x, y)` with `x` the column and `y` the row.
//! Scans are row-major: `y` outer, `x` inner.
//!
//! # Example
//!
//! ```
//! use regionmap_core::BinaryMask;
//!
//! let mask = BinaryMask::from_rows(&[
//!     vec![true, false, true],
//!     vec![false, true, false],
//! ])
//! .unwrap();
//! assert_eq!(mask.width(), 3);
//! assert_eq!(mask.height(), 2);
//! assert_eq!(mask.count_foreground(), 3);
//! ```

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{BinaryMask, FOREGROUND_LUMA, LabelGrid};
