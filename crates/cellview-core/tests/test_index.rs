mod common;

use cellview_core::consts::NO_ROI;
use cellview_core::index::{build_roi_index, roi_index, Pane, PaneIndices, RoiIndex};
use cellview_core::roi::Roi;

use common::{sample_dataset, square_roi};

#[test]
fn test_overlap_pixel_keeps_earlier_owner() {
    // ROI 1 shares (0,1) with ROI 0 and marks it as overlap.
    let rois = vec![
        Roi::new(vec![0, 0], vec![0, 1]),
        Roi::new(vec![0, 0], vec![1, 2]).with_overlap(vec![true, false]),
    ];
    let index = roi_index(4, 4, &rois);

    assert_eq!(index[[0, 0]], 0);
    assert_eq!(index[[0, 1]], 0);
    assert_eq!(index[[0, 2]], 1);
    assert_eq!(index[[0, 3]], NO_ROI);
    assert_eq!(index[[3, 3]], NO_ROI);
}

#[test]
fn test_overlap_on_both_sides_leaves_sentinel() {
    let rois = vec![
        Roi::new(vec![2, 2], vec![2, 3]).with_overlap(vec![false, true]),
        Roi::new(vec![2, 2], vec![3, 1]).with_overlap(vec![true, false]),
    ];
    let index = roi_index(4, 4, &rois);
    assert_eq!(index[[2, 2]], 0);
    assert_eq!(index[[2, 3]], NO_ROI);
    assert_eq!(index[[2, 1]], 1);
}

#[test]
fn test_later_roi_wins_shared_exclusive_pixel() {
    let rois = vec![square_roi(0, 0, 2), square_roi(1, 1, 2)];
    let index = roi_index(3, 3, &rois);
    assert_eq!(index[[0, 0]], 0);
    assert_eq!(index[[1, 1]], 1);
    assert_eq!(index[[2, 2]], 1);
}

#[test]
fn test_overlap_pixels_never_carry_own_index() {
    let rois = vec![
        Roi::new(vec![0, 1, 2, 3], vec![0, 1, 2, 3]).with_overlap(vec![false, true, false, true]),
        Roi::new(vec![1, 3], vec![3, 0]),
    ];
    let index = roi_index(4, 4, &rois);
    for (i, (&y, &x)) in rois[0].ypix.iter().zip(&rois[0].xpix).enumerate() {
        if rois[0].is_overlap(i) {
            assert_ne!(index[[y, x]], 0, "overlap pixel ({y},{x}) labelled as ROI 0");
        }
    }
}

#[test]
fn test_disjoint_rois_partition_pixels() {
    let d = sample_dataset();
    let index = roi_index(d.ly, d.lx, &d.rois);

    let mut labelled = 0;
    for ((y, x), &v) in index.indexed_iter() {
        if v == NO_ROI {
            continue;
        }
        labelled += 1;
        let roi = &d.rois[v as usize];
        assert!(roi.exclusive_pixels().any(|p| p == (y, x)));
    }
    let total: usize = d.rois.iter().map(|r| r.exclusive_pixels().count()).sum();
    assert_eq!(labelled, total);
}

#[test]
fn test_out_of_image_pixels_are_skipped() {
    let roi = Roi::new(vec![0, 9], vec![0, 9]);
    let index = build_roi_index(2, 2, [(7, &roi)]);
    assert_eq!(index[[0, 0]], 7);
    assert_eq!(index.iter().filter(|&&v| v == 7).count(), 1);
}

#[test]
fn test_empty_roi_list_is_all_sentinel() {
    let index = roi_index(3, 5, &[]);
    assert_eq!(index.dim(), (3, 5));
    assert!(index.iter().all(|&v| v == NO_ROI));
}

#[test]
fn test_hit_test_floors_view_coordinates() {
    let index = RoiIndex::new(roi_index(4, 4, &[square_roi(1, 1, 2)]));
    assert_eq!(index.hit_test(1.0, 1.0), Some(0));
    assert_eq!(index.hit_test(2.99, 2.5), Some(0));
    assert_eq!(index.hit_test(3.0, 2.0), None);
    assert_eq!(index.hit_test(0.5, 0.5), None);
}

#[test]
fn test_hit_test_out_of_bounds() {
    let index = RoiIndex::new(roi_index(4, 4, &[square_roi(0, 0, 4)]));
    assert_eq!(index.hit_test(-0.5, 1.0), None);
    assert_eq!(index.hit_test(1.0, -3.0), None);
    assert_eq!(index.hit_test(4.0, 0.0), None);
    assert_eq!(index.hit_test(0.0, 4.0), None);
    assert_eq!(index.hit_test(f64::NAN, 0.0), None);
    assert!(!index.contains(4.0, 0.0));
    assert!(index.contains(3.5, 3.5));
}

#[test]
fn test_pane_indices_split_by_class() {
    let d = sample_dataset();
    let panes = PaneIndices::build(d.ly, d.lx, &d.rois, &d.iscell);

    // Cells on the left, with their global indices.
    assert_eq!(panes.hit_test(Pane::Left, 0.0, 0.0), Some(0));
    assert_eq!(panes.hit_test(Pane::Left, 5.0, 0.0), Some(2));
    assert_eq!(panes.hit_test(Pane::Left, 9.0, 9.0), Some(4));
    assert_eq!(panes.hit_test(Pane::Left, 0.0, 5.0), None);

    // Not-cells on the right.
    assert_eq!(panes.hit_test(Pane::Right, 0.0, 5.0), Some(1));
    assert_eq!(panes.hit_test(Pane::Right, 6.0, 6.0), Some(3));
    assert_eq!(panes.hit_test(Pane::Right, 0.0, 0.0), None);
}
