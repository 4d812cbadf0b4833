//! Per-image analysis context
//!
//! [`RegionAnalysis`] keeps one mask together with everything derived from
//! it, so reports and overlays for an image are produced from a single owned
//! value instead of shared state.

use crate::error::RegionResult;
use crate::label::{LabelOptions, label_regions_with};
use crate::rank::{RankedRegions, Region, TopRegions, rank_regions, top_k_from_ranking};
use crate::report::ComponentReport;
use log::info;
use regionmap_core::{BinaryMask, LabelGrid};

/// A labeled and ranked mask
#[derive(Debug, Clone)]
pub struct RegionAnalysis {
    mask: BinaryMask,
    labels: LabelGrid,
    ranking: RankedRegions,
}

impl RegionAnalysis {
    /// Label and rank `mask`.
    ///
    /// # Examples
    ///
    /// ```
    /// use regionmap_core::BinaryMask;
    /// use regionmap_region::{LabelOptions, RegionAnalysis};
    ///
    /// let mask = BinaryMask::from_fn(6, 3, |x, _| x != 2);
    /// let analysis = RegionAnalysis::new(mask, &LabelOptions::default());
    /// assert_eq!(analysis.region_count(), 2);
    ///
    /// let top = analysis.top_two().unwrap();
    /// assert_eq!(top.rank_ids(0), vec![2]);
    /// assert_eq!(top.rank_ids(1), vec![1]);
    /// ```
    pub fn new(mask: BinaryMask, options: &LabelOptions) -> Self {
        let labels = label_regions_with(&mask, options);
        let ranking = rank_regions(&labels);
        info!(
            "analyzed {}x{} mask: {} foreground pixels in {} regions",
            mask.width(),
            mask.height(),
            mask.count_foreground(),
            ranking.len()
        );
        Self {
            mask,
            labels,
            ranking,
        }
    }

    /// Build an analysis from a mask and an existing label grid.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Core`](crate::RegionError::Core) wrapping a
    /// dimension mismatch if the grids differ in size.
    pub fn from_labels(mask: BinaryMask, labels: LabelGrid) -> RegionResult<Self> {
        mask.check_dimensions(labels.width(), labels.height())?;
        let ranking = rank_regions(&labels);
        Ok(Self {
            mask,
            labels,
            ranking,
        })
    }

    /// The analyzed mask.
    pub fn mask(&self) -> &BinaryMask {
        &self.mask
    }

    /// The region labels.
    pub fn labels(&self) -> &LabelGrid {
        &self.labels
    }

    /// Regions ranked by size.
    pub fn ranking(&self) -> &RankedRegions {
        &self.ranking
    }

    /// Number of regions found.
    pub fn region_count(&self) -> u32 {
        self.labels.max_label()
    }

    /// Look up a region by id.
    pub fn region(&self, id: u32) -> Option<Region> {
        self.ranking.get(id)
    }

    /// The largest and second-largest size groups with their overlay.
    pub fn top_two(&self) -> RegionResult<TopRegions> {
        self.top_k(2)
    }

    /// The `k` largest size groups with their overlay.
    pub fn top_k(&self, k: usize) -> RegionResult<TopRegions> {
        top_k_from_ranking(&self.labels, &self.ranking, k)
    }

    /// Region sizes in id order.
    pub fn discovery_report(&self) -> ComponentReport {
        ComponentReport::discovery(&self.labels)
    }

    /// Region sizes in rank order.
    pub fn ranked_report(&self) -> ComponentReport {
        ComponentReport::ranked(&self.ranking, self.region_count())
    }

    /// Take the label grid, dropping the rest.
    pub fn into_labels(self) -> LabelGrid {
        self.labels
    }
}
