use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_PANE_STRETCH, DEFAULT_QUADRANT_GRID, DEFAULT_QUADRANT_MARGIN, DEFAULT_TOP_COUNT,
    MAX_TOP_COUNT,
};
use crate::error::Result;
use crate::view::SizeMode;

/// Tunables of the viewer state machine, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Initial N for the top/bottom-N selector.
    pub top_count: usize,
    /// Upper bound accepted by the N control.
    pub max_top_count: usize,
    /// Margin around a zoomed quadrant, as a fraction of the quadrant size.
    pub quadrant_margin: f64,
    /// Quadrant controls form a `quadrant_grid x quadrant_grid` grid.
    pub quadrant_grid: usize,
    /// Column stretch given to a visible pane.
    pub pane_stretch: u32,
    /// Pane layout when a dataset is opened.
    pub initial_size_mode: SizeMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            top_count: DEFAULT_TOP_COUNT,
            max_top_count: MAX_TOP_COUNT,
            quadrant_margin: DEFAULT_QUADRANT_MARGIN,
            quadrant_grid: DEFAULT_QUADRANT_GRID,
            pane_stretch: DEFAULT_PANE_STRETCH,
            initial_size_mode: SizeMode::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
