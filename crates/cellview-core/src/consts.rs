/// Value stored in an ROI-index matrix where no ROI owns the pixel.
pub const NO_ROI: i32 = -1;

/// Default number of ROIs picked by the top/bottom-N selector.
pub const DEFAULT_TOP_COUNT: usize = 40;

/// Largest top/bottom-N count the count control accepts.
pub const MAX_TOP_COUNT: usize = 500;

/// Default quadrant zoom grid is `DEFAULT_QUADRANT_GRID x DEFAULT_QUADRANT_GRID`.
pub const DEFAULT_QUADRANT_GRID: usize = 3;

/// Extra margin around a zoomed quadrant, as a fraction of the quadrant size.
pub const DEFAULT_QUADRANT_MARGIN: f64 = 0.15;

/// Column stretch factor of a visible pane. Hidden panes get 0.
pub const DEFAULT_PANE_STRETCH: u32 = 100;
