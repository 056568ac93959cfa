use serde::{Deserialize, Serialize};

/// Pixels of one detected cell.
///
/// `ypix[i]`, `xpix[i]` is the (row, col) of the i-th pixel. `overlap[i]`
/// marks pixels this ROI shares with another ROI; an empty `overlap` means
/// no pixel is shared.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub ypix: Vec<usize>,
    pub xpix: Vec<usize>,
    #[serde(default)]
    pub overlap: Vec<bool>,
}

impl Roi {
    pub fn new(ypix: Vec<usize>, xpix: Vec<usize>) -> Self {
        Self {
            ypix,
            xpix,
            overlap: Vec::new(),
        }
    }

    pub fn with_overlap(mut self, overlap: Vec<bool>) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn len(&self) -> usize {
        self.ypix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ypix.is_empty()
    }

    pub fn is_overlap(&self, i: usize) -> bool {
        self.overlap.get(i).copied().unwrap_or(false)
    }

    /// (row, col) of every pixel not shared with another ROI.
    pub fn exclusive_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ypix
            .iter()
            .zip(&self.xpix)
            .enumerate()
            .filter(|(i, _)| !self.is_overlap(*i))
            .map(|(_, (&y, &x))| (y, x))
    }

    /// Median pixel position (row, col), or `None` for an empty ROI.
    ///
    /// Rows and columns take their medians independently; for even counts the
    /// lower middle value is used so the result is always an existing coordinate.
    pub fn median(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        Some((lower_median(&self.ypix), lower_median(&self.xpix)))
    }
}

fn lower_median(values: &[usize]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted[(sorted.len() - 1) / 2]
}
