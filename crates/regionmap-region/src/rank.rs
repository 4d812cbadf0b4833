//! Region ranking by size
//!
//! Tallies the cells of every labeled region, orders the regions by size and
//! selects the regions holding the largest size values.
//!
//! Ordering is by size descending. Regions that share a size value form one
//! *size group*; inside a group ids ascend. Because ids come from discovery
//! order, the whole ranking is a deterministic total order.
//!
//! Top-k selection works on size groups, not on individual regions: if two
//! regions tie for the largest size, both of them are rank 0, and rank 1 is
//! the next smaller size value.

use crate::error::{RegionError, RegionResult};
use log::debug;
use regionmap_core::{BinaryMask, LabelGrid};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Range;

/// A labeled region and its cell count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Region id (positive label)
    pub id: u32,
    /// Number of cells carrying `id`
    pub size: u32,
}

impl Region {
    /// Create a new region
    pub fn new(id: u32, size: u32) -> Self {
        Self { id, size }
    }

    /// Ranking order: larger size first, then smaller id.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.size.cmp(&self.size).then(self.id.cmp(&other.id))
    }
}

/// Regions sharing one size value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeGroup<'a> {
    /// The shared size
    pub size: u32,
    /// Regions of that size, ids ascending
    pub regions: &'a [Region],
}

impl SizeGroup<'_> {
    /// Ids of the regions in this group.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.regions.iter().map(|r| r.id)
    }
}

/// Regions ordered by size descending, ties by id ascending
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedRegions {
    regions: Vec<Region>,
}

impl RankedRegions {
    /// Rank the regions of a size tally.
    pub fn from_sizes(sizes: &BTreeMap<u32, u32>) -> Self {
        let mut regions: Vec<Region> = sizes
            .iter()
            .map(|(&id, &size)| Region::new(id, size))
            .collect();
        regions.sort_by(Region::rank_cmp);
        Self { regions }
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check whether there are no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over regions in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Regions in rank order.
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// The first-ranked region, if any.
    pub fn largest(&self) -> Option<Region> {
        self.regions.first().copied()
    }

    /// Look up a region by id.
    pub fn get(&self, id: u32) -> Option<Region> {
        self.regions.iter().find(|r| r.id == id).copied()
    }

    /// Sum of all region sizes.
    pub fn total_pixels(&self) -> u64 {
        self.regions.iter().map(|r| u64::from(r.size)).sum()
    }

    /// Iterate over size groups, largest size first.
    pub fn size_groups(&self) -> impl Iterator<Item = SizeGroup<'_>> + '_ {
        self.regions.chunk_by(|a, b| a.size == b.size).map(|group| SizeGroup {
            size: group[0].size,
            regions: group,
        })
    }

    /// Number of distinct size values.
    pub fn distinct_sizes(&self) -> usize {
        self.size_groups().count()
    }
}

impl<'a> IntoIterator for &'a RankedRegions {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

/// The regions holding the `k` largest size values, with their overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRegions {
    regions: RankedRegions,
    groups: Vec<Range<usize>>,
    requested: usize,
    overlay: BinaryMask,
}

impl TopRegions {
    /// Regions of rank `r` (0-based). Empty if fewer size values exist.
    pub fn rank(&self, r: usize) -> &[Region] {
        match self.groups.get(r) {
            Some(range) => &self.regions.as_slice()[range.clone()],
            None => &[],
        }
    }

    /// Ids of the regions of rank `r`.
    pub fn rank_ids(&self, r: usize) -> Vec<u32> {
        self.rank(r).iter().map(|region| region.id).collect()
    }

    /// Number of ranks that were filled.
    pub fn ranks_available(&self) -> usize {
        self.groups.len()
    }

    /// Number of ranks that were requested.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Check whether every requested rank was filled.
    pub fn is_complete(&self) -> bool {
        self.groups.len() == self.requested
    }

    /// All selected regions in rank order.
    pub fn regions(&self) -> &RankedRegions {
        &self.regions
    }

    /// Mask of the cells belonging to any selected region.
    pub fn overlay(&self) -> &BinaryMask {
        &self.overlay
    }

    /// Split into the selected ranking and the overlay mask.
    pub fn into_parts(self) -> (RankedRegions, BinaryMask) {
        (self.regions, self.overlay)
    }
}

/// Count the cells of every region in a label grid.
///
/// Label `0` is background and is not counted. Keys ascend by id.
///
/// Sizes are `u32`; a region larger than `u32::MAX` cells is reported as
/// `u32::MAX`.
pub fn tally_region_sizes(grid: &LabelGrid) -> BTreeMap<u32, u32> {
    let mut sizes = BTreeMap::new();
    for &label in grid.as_slice() {
        if label != 0 {
            count_cell(sizes.entry(label).or_insert(0u32));
        }
    }
    sizes
}

#[inline]
fn count_cell(size: &mut u32) {
    *size = size.saturating_add(1);
}

/// Rank the regions of a label grid by size.
///
/// Returns an empty ranking when the grid has no positive labels.
///
/// # Examples
///
/// ```
/// use regionmap_core::LabelGrid;
/// use regionmap_region::{Region, rank_regions};
///
/// let grid = LabelGrid::from_rows(&[[1, 0, 2], [3, 0, 2]]).unwrap();
/// let ranking = rank_regions(&grid);
/// assert_eq!(
///     ranking.as_slice(),
///     &[Region::new(2, 2), Region::new(1, 1), Region::new(3, 1)]
/// );
/// ```
pub fn rank_regions(grid: &LabelGrid) -> RankedRegions {
    let ranking = RankedRegions::from_sizes(&tally_region_sizes(grid));
    debug!(
        "rank_regions: {} regions, {} distinct sizes, largest {:?}",
        ranking.len(),
        ranking.distinct_sizes(),
        ranking.largest()
    );
    ranking
}

/// Select the top `k` size groups of an existing ranking.
///
/// `ranking` must have been computed from `grid`; the overlay is built from
/// the grid's labels.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `k` is 0 or the ranking
/// contains the background label.
pub fn top_k_from_ranking(
    grid: &LabelGrid,
    ranking: &RankedRegions,
    k: usize,
) -> RegionResult<TopRegions> {
    if k == 0 {
        return Err(RegionError::InvalidParameters(
            "top-k selection needs k >= 1".to_string(),
        ));
    }
    if let Some(region) = ranking.iter().find(|r| r.id == 0) {
        return Err(RegionError::InvalidParameters(format!(
            "ranking contains background label with size {}",
            region.size
        )));
    }

    let mut regions = Vec::new();
    let mut groups = Vec::new();
    for group in ranking.size_groups().take(k) {
        let start = regions.len();
        regions.extend_from_slice(group.regions);
        groups.push(start..regions.len());
    }

    let ids: Vec<u32> = regions.iter().map(|r| r.id).collect();
    let overlay = grid.mask_of(&ids);
    debug!(
        "top_k: requested {} ranks, filled {}, overlay {} pixels",
        k,
        groups.len(),
        overlay.count_foreground()
    );

    Ok(TopRegions {
        regions: RankedRegions { regions },
        groups,
        requested: k,
        overlay,
    })
}

/// Select the regions holding the `k` largest size values.
///
/// Ranks beyond the number of distinct size values are empty. With a single
/// region and `k = 2`, rank 0 holds that region, rank 1 is empty and the
/// overlay shows only the single region.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `k` is 0.
pub fn top_k_regions(grid: &LabelGrid, k: usize) -> RegionResult<TopRegions> {
    top_k_from_ranking(grid, &rank_regions(grid), k)
}

/// Like [`top_k_regions`], but every requested rank must exist.
///
/// # Errors
///
/// Returns [`RegionError::UndefinedRanking`] if fewer than `k` distinct size
/// values exist, and [`RegionError::InvalidParameters`] if `k` is 0.
pub fn top_k_regions_exact(grid: &LabelGrid, k: usize) -> RegionResult<TopRegions> {
    let top = top_k_regions(grid, k)?;
    if !top.is_complete() {
        return Err(RegionError::UndefinedRanking {
            requested: k,
            available: top.ranks_available(),
        });
    }
    Ok(top)
}

/// Select the largest and second-largest size groups.
pub fn top_two_regions(grid: &LabelGrid) -> RegionResult<TopRegions> {
    top_k_regions(grid, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_saturates() {
        let mut size = u32::MAX - 1;
        count_cell(&mut size);
        assert_eq!(size, u32::MAX);
        count_cell(&mut size);
        assert_eq!(size, u32::MAX);
    }

    fn grid(rows: &[&[u32]]) -> LabelGrid {
        LabelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_tally_excludes_background() {
        let g = grid(&[&[1, 1, 0], &[0, 2, 0], &[3, 3, 3]]);
        let sizes = tally_region_sizes(&g);
        assert_eq!(sizes.into_iter().collect::<Vec<_>>(), vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn test_rank_orders_size_then_id() {
        let g = grid(&[&[4, 4, 0, 2], &[0, 1, 0, 2], &[3, 3, 0, 5]]);
        let ranking = rank_regions(&g);
        let order: Vec<(u32, u32)> = ranking.iter().map(|r| (r.id, r.size)).collect();
        assert_eq!(order, vec![(2, 2), (3, 2), (4, 2), (1, 1), (5, 1)]);
        assert_eq!(ranking.total_pixels(), 8);
        assert_eq!(ranking.largest(), Some(Region::new(2, 2)));
    }

    #[test]
    fn test_size_groups() {
        let g = grid(&[&[4, 4, 0, 2], &[0, 1, 0, 2], &[3, 3, 0, 5]]);
        let ranking = rank_regions(&g);
        let groups: Vec<(u32, Vec<u32>)> = ranking
            .size_groups()
            .map(|group| (group.size, group.ids().collect()))
            .collect();
        assert_eq!(groups, vec![(2, vec![2, 3, 4]), (1, vec![1, 5])]);
        assert_eq!(ranking.distinct_sizes(), 2);
    }

    #[test]
    fn test_rank_empty_grid() {
        let ranking = rank_regions(&LabelGrid::new(3, 3));
        assert!(ranking.is_empty());
        assert_eq!(ranking.size_groups().count(), 0);
        assert_eq!(ranking.largest(), None);
    }

    #[test]
    fn test_top_two() {
        let g = grid(&[&[1, 0, 2, 2], &[1, 0, 2, 2], &[1, 0, 0, 3]]);
        let top = top_two_regions(&g).unwrap();
        assert_eq!(top.rank_ids(0), vec![2]);
        assert_eq!(top.rank_ids(1), vec![1]);
        assert!(top.is_complete());
        let overlay = top.overlay();
        assert_eq!(overlay.count_foreground(), 7);
        assert_eq!(overlay.get(3, 2), Some(false));
        assert_eq!(overlay.get(0, 2), Some(true));
    }

    #[test]
    fn test_top_two_with_tied_largest() {
        let g = grid(&[&[1, 0, 2], &[1, 0, 2], &[0, 3, 0]]);
        let top = top_two_regions(&g).unwrap();
        assert_eq!(top.rank_ids(0), vec![1, 2]);
        assert_eq!(top.rank_ids(1), vec![3]);
        assert_eq!(top.overlay().count_foreground(), 5);
    }

    #[test]
    fn test_top_two_single_region_pads_second_rank() {
        let g = grid(&[&[1, 1], &[1, 0]]);
        let top = top_two_regions(&g).unwrap();
        assert_eq!(top.rank_ids(0), vec![1]);
        assert!(top.rank(1).is_empty());
        assert_eq!(top.ranks_available(), 1);
        assert!(!top.is_complete());
        assert_eq!(top.overlay().count_foreground(), 3);
    }

    #[test]
    fn test_top_two_without_regions() {
        let top = top_two_regions(&LabelGrid::new(2, 2)).unwrap();
        assert!(top.rank(0).is_empty());
        assert!(top.regions().is_empty());
        assert_eq!(top.overlay().dimensions(), (2, 2));
        assert_eq!(top.overlay().count_foreground(), 0);
    }

    #[test]
    fn test_top_k_exact() {
        let g = grid(&[&[1, 0, 2], &[1, 0, 2]]);
        assert!(matches!(
            top_k_regions_exact(&g, 2),
            Err(RegionError::UndefinedRanking {
                requested: 2,
                available: 1
            })
        ));
        assert_eq!(top_k_regions_exact(&g, 1).unwrap().rank_ids(0), vec![1, 2]);
    }

    #[test]
    fn test_top_k_zero_is_invalid() {
        let g = grid(&[&[1]]);
        assert!(matches!(
            top_k_regions(&g, 0),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_into_parts() {
        let g = grid(&[&[1, 0, 2, 2], &[0, 0, 0, 3]]);
        let (ranking, overlay) = top_k_regions(&g, 1).unwrap().into_parts();
        assert_eq!(ranking.as_slice(), &[Region::new(2, 2)]);
        assert_eq!(overlay, g.mask_of(&[2]));
    }
}
