//! Text reports of region sizes
//!
//! Produces two per-region listings in the line format of the map analysis
//! tool: regions in discovery (id) order, and regions in ranking order. Where
//! the text ends up is the caller's business.
//!
//! The ranked listing names every region exactly once, including regions
//! that share a size, and no line carries trailing whitespace.
//!
//! Each region is one line:
//!
//! ```text
//! Connected component 3, number of pixels = 41
//! ```
//!
//! followed by a closing `Total number of connected components = N` line
//! without a trailing newline.

use crate::rank::{RankedRegions, Region, tally_region_sizes};
use regionmap_core::LabelGrid;
use std::fmt;

/// Order of the region lines in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOrder {
    /// Ascending region id
    Discovery,
    /// Size descending, ties by ascending id
    BySize,
}

/// Per-region size listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    order: ReportOrder,
    entries: Vec<Region>,
    total: u32,
}

impl ComponentReport {
    /// List every id from 1 to the grid's largest label with its size.
    ///
    /// Ids without cells are listed with size 0; a labeler-produced grid has
    /// none.
    pub fn discovery(grid: &LabelGrid) -> Self {
        let sizes = tally_region_sizes(grid);
        let total = grid.max_label();
        let entries = (1..=total)
            .map(|id| Region::new(id, sizes.get(&id).copied().unwrap_or(0)))
            .collect();
        Self {
            order: ReportOrder::Discovery,
            entries,
            total,
        }
    }

    /// List the regions of a ranking in rank order.
    ///
    /// `total` is the number of regions labeled in the image, normally the
    /// grid's largest label.
    pub fn ranked(ranking: &RankedRegions, total: u32) -> Self {
        Self {
            order: ReportOrder::BySize,
            entries: ranking.as_slice().to_vec(),
            total,
        }
    }

    /// Line order of this report.
    pub fn order(&self) -> ReportOrder {
        self.order
    }

    /// Regions in line order.
    pub fn entries(&self) -> &[Region] {
        &self.entries
    }

    /// Total number of regions reported on the closing line.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The per-region lines, without the closing total line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|r| {
            format!(
                "Connected component {}, number of pixels = {}",
                r.id, r.size
            )
        })
    }
}

impl fmt::Display for ComponentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "Total number of connected components = {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank_regions;

    fn sample() -> LabelGrid {
        LabelGrid::from_rows(&[[1, 0, 2, 2], [0, 0, 2, 2], [3, 3, 0, 0]]).unwrap()
    }

    #[test]
    fn test_discovery_report() {
        let report = ComponentReport::discovery(&sample());
        assert_eq!(report.order(), ReportOrder::Discovery);
        assert_eq!(
            report.to_string(),
            "Connected component 1, number of pixels = 1\n\
             Connected component 2, number of pixels = 4\n\
             Connected component 3, number of pixels = 2\n\
             Total number of connected components = 3"
        );
    }

    #[test]
    fn test_ranked_report() {
        let grid = sample();
        let report = ComponentReport::ranked(&rank_regions(&grid), grid.max_label());
        let lines: Vec<String> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Connected component 2, number of pixels = 4",
                "Connected component 3, number of pixels = 2",
                "Connected component 1, number of pixels = 1",
            ]
        );
        assert!(
            report
                .to_string()
                .ends_with("Total number of connected components = 3")
        );
    }

    #[test]
    fn test_ranked_report_lists_tied_regions_once() {
        let grid = LabelGrid::from_rows(&[[1, 0, 2, 0, 3], [1, 0, 2, 0, 3]]).unwrap();
        let report = ComponentReport::ranked(&rank_regions(&grid), grid.max_label());
        let text = report.to_string();
        assert_eq!(
            text,
            "Connected component 1, number of pixels = 2\n\
             Connected component 2, number of pixels = 2\n\
             Connected component 3, number of pixels = 2\n\
             Total number of connected components = 3"
        );
        assert!(text.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_report_without_regions() {
        let report = ComponentReport::discovery(&LabelGrid::new(2, 2));
        assert!(report.entries().is_empty());
        assert_eq!(report.to_string(), "Total number of connected components = 0");
    }

    #[test]
    fn test_discovery_report_lists_missing_ids() {
        let grid = LabelGrid::from_rows(&[[1, 0, 3]]).unwrap();
        let report = ComponentReport::discovery(&grid);
        assert_eq!(report.entries()[1], Region::new(2, 0));
        assert_eq!(report.total(), 3);
    }
}
