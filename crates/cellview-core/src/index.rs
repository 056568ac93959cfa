use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::NO_ROI;
use crate::rank::Partition;
use crate::roi::Roi;

/// Build an `ly x lx` matrix holding, for every pixel, the index of the ROI
/// that owns it, or [`NO_ROI`].
///
/// Only non-overlap pixels are written, in iteration order: when two ROIs
/// claim the same exclusive pixel the later one wins. Pixels outside the
/// image are ignored.
pub fn build_roi_index<'a, I>(ly: usize, lx: usize, rois: I) -> Array2<i32>
where
    I: IntoIterator<Item = (usize, &'a Roi)>,
{
    let mut index = Array2::<i32>::from_elem((ly, lx), NO_ROI);
    for (n, roi) in rois {
        for (y, x) in roi.exclusive_pixels() {
            if let Some(px) = index.get_mut((y, x)) {
                *px = n as i32;
            }
        }
    }
    index
}

/// [`build_roi_index`] over every ROI, labelled by its position in `rois`.
pub fn roi_index(ly: usize, lx: usize, rois: &[Roi]) -> Array2<i32> {
    build_roi_index(ly, lx, rois.iter().enumerate())
}

/// Pixel-to-ROI lookup for one pane.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiIndex {
    pub data: Array2<i32>,
}

impl RoiIndex {
    pub fn new(data: Array2<i32>) -> Self {
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Owning ROI of pixel (row, col), `None` outside the image or on the sentinel.
    pub fn lookup(&self, row: usize, col: usize) -> Option<usize> {
        match self.data.get((row, col)) {
            Some(&n) if n >= 0 => Some(n as usize),
            _ => None,
        }
    }

    /// Resolve a view-space position to an ROI.
    ///
    /// View coordinates are floored to pixel coordinates, so `(2.7, 0.1)`
    /// hits pixel (2, 0) and anything left of or above the origin misses.
    pub fn hit_test(&self, row: f64, col: f64) -> Option<usize> {
        if !row.is_finite() || !col.is_finite() || row < 0.0 || col < 0.0 {
            return None;
        }
        self.lookup(row.floor() as usize, col.floor() as usize)
    }

    /// Whether a view-space position falls inside the image.
    pub fn contains(&self, row: f64, col: f64) -> bool {
        row >= 0.0
            && col >= 0.0
            && row < self.height() as f64
            && col < self.width() as f64
    }
}

/// One of the two side-by-side image panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    /// Shows ROIs classified as cells.
    Left,
    /// Shows ROIs classified as not-cells.
    Right,
}

impl Pane {
    pub fn partition(self) -> Partition {
        match self {
            Pane::Left => Partition::Cells,
            Pane::Right => Partition::NotCells,
        }
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pane::Left => write!(f, "left"),
            Pane::Right => write!(f, "right"),
        }
    }
}

/// ROI-index matrices for both panes, holding global ROI indices.
#[derive(Clone, Debug, PartialEq)]
pub struct PaneIndices {
    pub left: RoiIndex,
    pub right: RoiIndex,
}

impl PaneIndices {
    /// Index the cell ROIs into the left pane and the not-cell ROIs into the right.
    pub fn build(ly: usize, lx: usize, rois: &[Roi], iscell: &[bool]) -> Self {
        let left = build_roi_index(ly, lx, in_partition(rois, iscell, Partition::Cells));
        let right = build_roi_index(ly, lx, in_partition(rois, iscell, Partition::NotCells));
        info!(ly, lx, rois = rois.len(), "Pane indices rebuilt");
        Self {
            left: RoiIndex::new(left),
            right: RoiIndex::new(right),
        }
    }

    pub fn get(&self, pane: Pane) -> &RoiIndex {
        match pane {
            Pane::Left => &self.left,
            Pane::Right => &self.right,
        }
    }

    /// Hit test against the pane in which the click happened.
    pub fn hit_test(&self, pane: Pane, row: f64, col: f64) -> Option<usize> {
        let hit = self.get(pane).hit_test(row, col);
        debug!(%pane, row, col, ?hit, "Hit test");
        hit
    }
}

/// ROIs of one partition with their global indices. ROIs without a
/// classification entry count as not-cells.
fn in_partition<'a>(
    rois: &'a [Roi],
    iscell: &'a [bool],
    partition: Partition,
) -> impl Iterator<Item = (usize, &'a Roi)> + 'a {
    rois.iter()
        .enumerate()
        .filter(move |(n, _)| partition.contains(iscell.get(*n).copied().unwrap_or(false)))
}
