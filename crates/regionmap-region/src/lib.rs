//! regionmap-region - Region labeling and ranking
//!
//! This crate provides the connected-region stage of map analysis:
//!
//! - **Region labeling** - Breadth-first labeling of 8-connected foreground
//!   regions, ids in scan-discovery order, clamp-to-border neighbours
//! - **Region ranking** - Per-region pixel counts, size ranking with id
//!   tie-breaks, and top-k selection with a highlight overlay
//! - **Reports** - Per-region size listings in id or rank order
//! - **Analysis context** - One owned value holding a mask and everything
//!   derived from it
//!
//! # Examples
//!
//! ## Labeling regions
//!
//! ```
//! use regionmap_core::BinaryMask;
//! use regionmap_region::label_regions;
//!
//! let mask = BinaryMask::from_fn(4, 4, |x, y| (x + y) % 2 == 0);
//! let labels = label_regions(&mask);
//!
//! // Diagonal adjacency joins the whole checkerboard.
//! assert_eq!(labels.max_label(), 1);
//! ```
//!
//! ## Ranking and the top-two overlay
//!
//! ```
//! use regionmap_core::BinaryMask;
//! use regionmap_region::{label_regions, rank_regions, top_two_regions};
//!
//! let mask = BinaryMask::from_rows(&[
//!     [true, false, true, true],
//!     [false, false, true, true],
//!     [true, false, false, false],
//! ])
//! .unwrap();
//!
//! let labels = label_regions(&mask);
//! let ranking = rank_regions(&labels);
//! assert_eq!(ranking.largest().map(|r| (r.id, r.size)), Some((2, 4)));
//!
//! let top = top_two_regions(&labels).unwrap();
//! assert_eq!(top.rank_ids(0), vec![2]);
//! assert_eq!(top.rank_ids(1), vec![1, 3]);
//! assert_eq!(top.overlay().count_foreground(), 6);
//! ```

pub mod analysis;
pub mod error;
pub mod label;
pub mod rank;
pub mod report;

// Re-export core types
pub use regionmap_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export label types and functions
pub use label::{
    ConnectivityType, LabelOptions, clamped_neighbors, count_regions, label_regions,
    label_regions_with,
};

// Re-export rank types and functions
pub use rank::{
    RankedRegions, Region, SizeGroup, TopRegions, rank_regions, tally_region_sizes,
    top_k_from_ranking, top_k_regions, top_k_regions_exact, top_two_regions,
};

// Re-export report types
pub use report::{ComponentReport, ReportOrder};

// Re-export analysis context
pub use analysis::RegionAnalysis;
