//! Connected region labeling
//!
//! Labels the foreground regions of a [`BinaryMask`] with a breadth-first
//! flood fill driven by a row-major seed scan.
//!
//! # Boundary policy
//!
//! Neighbour coordinates that fall outside the grid are clamped to the
//! nearest in-bounds coordinate instead of being skipped. A border cell
//! therefore re-examines itself or an adjacent edge cell in place of the
//! missing neighbours. Clamped candidates go through the same
//! "foreground and unlabeled" test as every other neighbour, so labels are
//! bit-compatible with the map analysis tool this labeler replaces.
//!
//! # Id assignment
//!
//! Ids start at 1 and are allocated in order of first discovery during the
//! scan (top-to-bottom, left-to-right). The counter advances once a region's
//! frontier has drained, so single-cell regions consume an id too. Ids say
//! nothing about a region's position or size.

use log::{debug, trace};
use regionmap_core::{BinaryMask, LabelGrid};
use std::collections::VecDeque;

/// Connectivity type for region labeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// Neighbour offsets `(dx, dy)`: the row below, the same row, the row above.
const EIGHT_WAY_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const FOUR_WAY_OFFSETS: [(i8, i8); 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];

impl ConnectivityType {
    /// Neighbour offsets visited for this connectivity, in traversal order.
    pub fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY_OFFSETS,
            ConnectivityType::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }
}

/// Options for region labeling
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Connectivity type (8-way by default)
    pub connectivity: ConnectivityType,
}

impl LabelOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self { connectivity }
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

#[inline]
fn clamp_step(c: u32, d: i8, len: u32) -> u32 {
    match d {
        d if d < 0 => c.saturating_sub(1),
        d if d > 0 => (c + 1).min(len - 1),
        _ => c,
    }
}

/// Neighbours of `(x, y)` with out-of-range coordinates clamped to the grid.
///
/// `(x, y)` must lie inside a non-empty `width` x `height` grid. The result
/// can contain `(x, y)` itself and repeated cells along the border.
///
/// # Examples
///
/// ```
/// use regionmap_region::{ConnectivityType, clamped_neighbors};
///
/// // In a 1x1 grid every neighbour clamps back onto the only cell.
/// assert!(clamped_neighbors(0, 0, 1, 1, ConnectivityType::EightWay).all(|p| p == (0, 0)));
/// ```
pub fn clamped_neighbors(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    connectivity: ConnectivityType,
) -> impl Iterator<Item = (u32, u32)> {
    connectivity
        .offsets()
        .iter()
        .map(move |&(dx, dy)| (clamp_step(x, dx, width), clamp_step(y, dy, height)))
}

/// Label the 8-connected foreground regions of a mask.
///
/// Every foreground cell receives exactly one positive label and every
/// background cell stays `0`. An empty mask yields an empty grid.
///
/// # Examples
///
/// ```
/// use regionmap_core::BinaryMask;
/// use regionmap_region::label_regions;
///
/// let mask = BinaryMask::from_rows(&[
///     [true, false, false],
///     [false, false, false],
///     [false, false, true],
/// ])
/// .unwrap();
///
/// let labels = label_regions(&mask);
/// assert_eq!(labels.get(0, 0), Some(1));
/// assert_eq!(labels.get(2, 2), Some(2));
/// assert_eq!(labels.get(1, 1), Some(0));
/// ```
pub fn label_regions(mask: &BinaryMask) -> LabelGrid {
    label_regions_with(mask, &LabelOptions::default())
}

/// Label foreground regions using the given options.
///
/// Same scan, frontier and boundary policy as [`label_regions`]; only the
/// neighbour set changes with [`LabelOptions::connectivity`].
pub fn label_regions_with(mask: &BinaryMask, options: &LabelOptions) -> LabelGrid {
    let (width, height) = mask.dimensions();
    let mut labels = LabelGrid::new(width, height);
    if mask.is_empty() {
        debug!("label_regions: empty {}x{} mask", width, height);
        return labels;
    }

    let mut frontier: VecDeque<(u32, u32)> = VecDeque::new();
    let mut next_id = 1u32;

    for y in 0..height {
        for x in 0..width {
            if !mask.get_unchecked(x, y) || labels.get_unchecked(x, y) != 0 {
                continue;
            }

            labels.set_unchecked(x, y, next_id);
            frontier.push_back((x, y));
            let mut size = 1u64;

            while let Some((cx, cy)) = frontier.pop_front() {
                for (nx, ny) in clamped_neighbors(cx, cy, width, height, options.connectivity) {
                    if mask.get_unchecked(nx, ny) && labels.get_unchecked(nx, ny) == 0 {
                        labels.set_unchecked(nx, ny, next_id);
                        frontier.push_back((nx, ny));
                        size += 1;
                    }
                }
            }

            trace!("region {} seeded at ({}, {}): {} pixels", next_id, x, y, size);
            next_id += 1;
        }
    }

    debug!(
        "label_regions: {}x{} mask, {:?}, {} regions",
        width,
        height,
        options.connectivity,
        next_id - 1
    );
    labels
}

/// Count the connected foreground regions of a mask.
pub fn count_regions(mask: &BinaryMask, options: &LabelOptions) -> u32 {
    label_regions_with(mask, options).max_label()
}
