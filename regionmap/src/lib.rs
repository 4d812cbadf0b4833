//! regionmap - Connected region analysis for raster maps
//!
//! Labels the connected regions of a thresholded map mask and ranks them by
//! size.
//!
//! # Overview
//!
//! - [`BinaryMask`] - the thresholded foreground mask (input)
//! - [`LabelGrid`] - one region id per cell (labeling output)
//! - [`region`] - labeling, ranking, reports and the analysis context
//!
//! # Example
//!
//! ```
//! use regionmap::BinaryMask;
//! use regionmap::region::{LabelOptions, RegionAnalysis};
//!
//! let mask = BinaryMask::from_fn(3, 3, |_, _| true);
//! let analysis = RegionAnalysis::new(mask, &LabelOptions::default());
//! assert_eq!(analysis.region_count(), 1);
//! assert_eq!(analysis.ranking().largest().map(|r| r.size), Some(9));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use regionmap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use regionmap_region as region;
