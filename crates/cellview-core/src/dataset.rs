use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CellviewError, Result};
use crate::rank::Partition;
use crate::roi::Roi;

/// Detected ROIs of one recording plane, with their classification and
/// per-ROI statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Image height in pixels.
    pub ly: usize,
    /// Image width in pixels.
    pub lx: usize,
    pub rois: Vec<Roi>,
    /// Cell (true) / not-cell (false) classification per ROI.
    pub iscell: Vec<bool>,
    /// Named statistics, one value per ROI.
    #[serde(default)]
    pub stats: BTreeMap<String, Vec<f32>>,
}

impl Dataset {
    /// Parse and validate a dataset from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(s)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load and validate a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            ly = dataset.ly,
            lx = dataset.lx,
            rois = dataset.roi_count(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn roi_count(&self) -> usize {
        self.rois.len()
    }

    pub fn partition_count(&self, partition: Partition) -> usize {
        self.iscell.iter().filter(|&&c| partition.contains(c)).count()
    }

    pub fn stat(&self, name: &str) -> Result<&[f32]> {
        self.stats
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CellviewError::UnknownStatistic(name.to_string()))
    }

    /// Check array lengths and pixel bounds.
    pub fn validate(&self) -> Result<()> {
        if self.ly == 0 || self.lx == 0 {
            return Err(CellviewError::InvalidDimensions {
                ly: self.ly,
                lx: self.lx,
            });
        }

        let expected = self.roi_count();
        if self.iscell.len() != expected {
            return Err(CellviewError::LengthMismatch {
                what: "iscell".into(),
                got: self.iscell.len(),
                expected,
            });
        }
        for (name, values) in &self.stats {
            if values.len() != expected {
                return Err(CellviewError::LengthMismatch {
                    what: format!("statistic '{name}'"),
                    got: values.len(),
                    expected,
                });
            }
        }

        for (n, roi) in self.rois.iter().enumerate() {
            if roi.xpix.len() != roi.ypix.len() {
                return Err(CellviewError::MalformedRoi {
                    roi: n,
                    reason: format!(
                        "ypix has {} entries but xpix has {}",
                        roi.ypix.len(),
                        roi.xpix.len()
                    ),
                });
            }
            if !roi.overlap.is_empty() && roi.overlap.len() != roi.ypix.len() {
                return Err(CellviewError::MalformedRoi {
                    roi: n,
                    reason: format!(
                        "overlap has {} entries but the ROI has {} pixels",
                        roi.overlap.len(),
                        roi.ypix.len()
                    ),
                });
            }
            if let Some((&row, &col)) = roi
                .ypix
                .iter()
                .zip(&roi.xpix)
                .find(|(&y, &x)| y >= self.ly || x >= self.lx)
            {
                return Err(CellviewError::PixelOutOfBounds {
                    roi: n,
                    row,
                    col,
                    ly: self.ly,
                    lx: self.lx,
                });
            }
        }
        Ok(())
    }
}
