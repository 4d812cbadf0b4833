//! Region ranking regression test
//!
//! Checks size tallies, ranking order, size grouping and top-k selection on
//! labeled masks.
//!
//! Run with:
//! ```
//! cargo test -p regionmap-region --test rank_reg
//! ```

use regionmap_core::BinaryMask;
use regionmap_region::{
    RegionError, label_regions, rank_regions, tally_region_sizes, top_k_regions,
    top_k_regions_exact, top_two_regions,
};
use regionmap_test::{RegParams, init_test_logging, mask_from_ascii, random_mask};

#[test]
fn rank_reg() {
    init_test_logging();
    let mut rp = RegParams::new("rank");

    // Regions: 1 (size 3), 2 (size 5), 3 (size 1), 4 (size 5), 5 (size 4)
    let mask = mask_from_ascii(
        "
        #..###..#
        #..#.#...
        #........
        .........
        ##.....##
        ##.....##
        #........
        ",
    )
    .unwrap();
    let labels = label_regions(&mask);
    let sizes = tally_region_sizes(&labels);
    let tally: Vec<(u32, u32)> = sizes.into_iter().collect();
    rp.compare_values(5.0, tally.len() as f64, 0.0);
    let tally_ok = tally == vec![(1, 3), (2, 5), (3, 1), (4, 5), (5, 4)];
    rp.compare_values(1.0, if tally_ok { 1.0 } else { 0.0 }, 0.0);

    let ranking = rank_regions(&labels);
    let order: Vec<u32> = ranking.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![2, 4, 5, 1, 3]);
    rp.compare_values(mask.count_foreground() as f64, ranking.total_pixels() as f64, 0.0);
    rp.compare_values(4.0, ranking.distinct_sizes() as f64, 0.0);

    // Top two: the tied size-5 pair, then the size-4 region.
    let top = top_two_regions(&labels).unwrap();
    assert_eq!(top.rank_ids(0), vec![2, 4]);
    assert_eq!(top.rank_ids(1), vec![5]);
    rp.compare_masks(&labels.mask_of(&[2, 4, 5]), top.overlay());
    rp.compare_values(14.0, top.overlay().count_foreground() as f64, 0.0);

    // Top three reaches the size-3 region.
    let top3 = top_k_regions(&labels, 3).unwrap();
    assert_eq!(top3.rank_ids(2), vec![1]);

    // Asking for more ranks than sizes pads, or errors when exact.
    let top9 = top_k_regions(&labels, 9).unwrap();
    rp.compare_values(4.0, top9.ranks_available() as f64, 0.0);
    rp.compare_masks(&labels.foreground_mask(), top9.overlay());
    let exact = top_k_regions_exact(&labels, 9);
    let undefined = matches!(
        exact,
        Err(RegionError::UndefinedRanking {
            requested: 9,
            available: 4
        })
    );
    rp.compare_values(1.0, if undefined { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "rank regression test failed");
}

#[test]
fn rank_single_region_reg() {
    init_test_logging();
    let mut rp = RegParams::new("rank_single");

    // One region: it is rank 0, rank 1 is empty, the overlay is the region.
    let mask = mask_from_ascii("###\n###\n###").unwrap();
    let labels = label_regions(&mask);
    let top = top_two_regions(&labels).unwrap();
    assert_eq!(top.rank_ids(0), vec![1]);
    rp.compare_values(9.0, top.rank(0)[0].size as f64, 0.0);
    rp.compare_values(0.0, top.rank(1).len() as f64, 0.0);
    rp.compare_values(0.0, if top.is_complete() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_masks(&mask, top.overlay());

    // Equal sizes only: everything is rank 0.
    let equal = mask_from_ascii("#.#.#\n.....\n#.#.#").unwrap();
    let labels = label_regions(&equal);
    let top = top_two_regions(&labels).unwrap();
    rp.compare_values(6.0, top.rank(0).len() as f64, 0.0);
    rp.compare_values(0.0, top.rank(1).len() as f64, 0.0);
    rp.compare_masks(&equal, top.overlay());

    // No regions: empty ranking, empty overlay.
    let blank = BinaryMask::new(4, 4);
    let labels = label_regions(&blank);
    rp.compare_values(0.0, rank_regions(&labels).len() as f64, 0.0);
    let top = top_two_regions(&labels).unwrap();
    rp.compare_masks(&blank, top.overlay());

    assert!(rp.cleanup(), "rank single-region regression test failed");
}

#[test]
fn rank_random_reg() {
    init_test_logging();
    let mut rp = RegParams::new("rank_random");

    for seed in 0..6u64 {
        let mask = random_mask(40, 30, 0.35 + 0.05 * seed as f64, seed);
        let labels = label_regions(&mask);
        let ranking = rank_regions(&labels);

        // Sizes sum to the foreground count.
        rp.compare_values(
            mask.count_foreground() as f64,
            ranking.total_pixels() as f64,
            0.0,
        );

        // Every region is ranked exactly once.
        rp.compare_values(labels.max_label() as f64, ranking.len() as f64, 0.0);

        // Size descending; equal sizes by ascending id.
        let sorted = ranking.as_slice().windows(2).all(|w| {
            w[0].size > w[1].size || (w[0].size == w[1].size && w[0].id < w[1].id)
        });
        rp.compare_values(1.0, if sorted { 1.0 } else { 0.0 }, 0.0);

        // Size groups hold distinct sizes in descending order.
        let group_sizes: Vec<u32> = ranking.size_groups().map(|g| g.size).collect();
        let strictly_desc = group_sizes.windows(2).all(|w| w[0] > w[1]);
        rp.compare_values(1.0, if strictly_desc { 1.0 } else { 0.0 }, 0.0);

        // Overlay of the top two holds exactly the cells of the selected ids.
        let top = top_two_regions(&labels).unwrap();
        let selected: u64 = top.regions().total_pixels();
        rp.compare_values(selected as f64, top.overlay().count_foreground() as f64, 0.0);
    }

    assert!(rp.cleanup(), "rank random regression test failed");
}
