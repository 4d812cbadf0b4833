//! Grid fixtures shared by the test suites

use crate::error::{TestError, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regionmap_core::BinaryMask;
use std::collections::HashMap;

/// Build a mask from an ASCII picture.
///
/// Each non-blank line is one row. `#`, `X` and `1` are foreground, `.` and
/// `0` are background. Leading and trailing whitespace on a line is ignored.
///
/// ```
/// let mask = regionmap_test::mask_from_ascii(
///     "#..
///      .#.",
/// )
/// .unwrap();
/// assert_eq!(mask.dimensions(), (3, 2));
/// ```
pub fn mask_from_ascii(picture: &str) -> TestResult<BinaryMask> {
    let mut rows = Vec::new();
    for (line, text) in picture.lines().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let row = text
            .chars()
            .map(|c| match c {
                '#' | 'X' | '1' => Ok(true),
                '.' | '0' => Ok(false),
                other => Err(TestError::InvalidFixture {
                    line: line + 1,
                    message: format!("unexpected character {:?}", other),
                }),
            })
            .collect::<TestResult<Vec<bool>>>()?;
        rows.push(row);
    }
    Ok(BinaryMask::from_rows(&rows)?)
}

/// Render a mask as an ASCII picture using `#` and `.`.
pub fn mask_to_ascii(mask: &BinaryMask) -> String {
    mask.to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&fg| if fg { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a reproducible random mask.
///
/// Each cell is foreground with probability `density`, clamped to `[0, 1]`.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> BinaryMask {
    let density = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    BinaryMask::from_fn(width, height, |_, _| rng.random_bool(density))
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[ra.max(rb)] = ra.min(rb);
    }
}

/// 8-connected components computed with union-find.
///
/// Out-of-bounds neighbours are skipped. Components are returned in order of
/// their first cell in row-major order, and each component lists its cells in
/// row-major order, so `result[i]` is the region a scan-order labeler would
/// call `i + 1`.
pub fn reference_components(mask: &BinaryMask) -> Vec<Vec<(u32, u32)>> {
    let (w, h) = mask.dimensions();
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);
    let mut parent: Vec<usize> = (0..(w as usize) * (h as usize)).collect();

    for (x, y) in mask.foreground_pixels() {
        // Earlier neighbours in scan order: W, NW, N, NE.
        let candidates = [
            (x.checked_sub(1), Some(y)),
            (x.checked_sub(1), y.checked_sub(1)),
            (Some(x), y.checked_sub(1)),
            (x.checked_add(1).filter(|&nx| nx < w), y.checked_sub(1)),
        ];
        for (nx, ny) in candidates {
            if let (Some(nx), Some(ny)) = (nx, ny) {
                if mask.get_unchecked(nx, ny) {
                    union(&mut parent, idx(x, y), idx(nx, ny));
                }
            }
        }
    }

    let mut order: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<(u32, u32)>> = Vec::new();
    for (x, y) in mask.foreground_pixels() {
        let root = find(&mut parent, idx(x, y));
        let slot = *order.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push((x, y));
    }
    components
}
