use std::collections::BTreeMap;

use cellview_core::config::ViewerConfig;
use cellview_core::dataset::Dataset;
use cellview_core::roi::Roi;
use cellview_core::session::Session;

/// Square ROI of `size x size` pixels with its top-left corner at (row, col).
pub fn square_roi(row: usize, col: usize, size: usize) -> Roi {
    let mut ypix = Vec::with_capacity(size * size);
    let mut xpix = Vec::with_capacity(size * size);
    for y in row..row + size {
        for x in col..col + size {
            ypix.push(y);
            xpix.push(x);
        }
    }
    Roi::new(ypix, xpix)
}

/// 10x10 image with five 2x2 ROIs.
///
/// | ROI | corner | class    | skew |
/// |-----|--------|----------|------|
/// | 0   | (0,0)  | cell     | 0.5  |
/// | 1   | (0,5)  | not cell | 2.0  |
/// | 2   | (5,0)  | cell     | 3.0  |
/// | 3   | (5,5)  | not cell | 1.0  |
/// | 4   | (8,8)  | cell     | 1.5  |
pub fn sample_dataset() -> Dataset {
    let mut stats = BTreeMap::new();
    stats.insert("skew".to_string(), vec![0.5, 2.0, 3.0, 1.0, 1.5]);
    stats.insert("npix".to_string(), vec![4.0; 5]);
    Dataset {
        ly: 10,
        lx: 10,
        rois: vec![
            square_roi(0, 0, 2),
            square_roi(0, 5, 2),
            square_roi(5, 0, 2),
            square_roi(5, 5, 2),
            square_roi(8, 8, 2),
        ],
        iscell: vec![true, false, true, false, true],
        stats,
    }
}

pub fn sample_session() -> Session {
    Session::new(sample_dataset(), ViewerConfig::default()).expect("valid sample dataset")
}

pub const SAMPLE_JSON: &str = r#"{
    "ly": 4,
    "lx": 4,
    "rois": [
        { "ypix": [0, 0], "xpix": [0, 1], "overlap": [false, false] },
        { "ypix": [0, 0], "xpix": [1, 2], "overlap": [true, false] },
        { "ypix": [3], "xpix": [3] }
    ],
    "iscell": [true, true, false],
    "stats": { "skew": [1.0, 2.0, 3.0] }
}"#;
