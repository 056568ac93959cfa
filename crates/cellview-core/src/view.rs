use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ViewerConfig;
use crate::error::{CellviewError, Result};
use crate::index::Pane;
use crate::rank::Direction;

/// Pane layout. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Left (cells) pane only.
    CellsOnly,
    /// Both panes side by side, axes linked.
    #[default]
    Both,
    /// Right (not-cells) pane only.
    NotCellsOnly,
}

impl SizeMode {
    pub const ALL: &[Self] = &[Self::CellsOnly, Self::Both, Self::NotCellsOnly];

    /// The single visible pane, `None` when both are shown.
    pub fn pane(self) -> Option<Pane> {
        match self {
            Self::CellsOnly => Some(Pane::Left),
            Self::Both => None,
            Self::NotCellsOnly => Some(Pane::Right),
        }
    }

    pub fn is_single(self) -> bool {
        self.pane().is_some()
    }

    /// (left, right) column stretch factors.
    pub fn column_stretch(self, stretch: u32) -> (u32, u32) {
        match self {
            Self::CellsOnly => (stretch, 0),
            Self::Both => (stretch, stretch),
            Self::NotCellsOnly => (0, stretch),
        }
    }
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellsOnly => write!(f, "cells"),
            Self::Both => write!(f, "both"),
            Self::NotCellsOnly => write!(f, "not cells"),
        }
    }
}

/// Selection drawing mode. At most one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    /// Draw a rectangle and select the ROIs inside it.
    Draw,
    Top,
    Bottom,
}

impl SelectMode {
    pub const ALL: &[Self] = &[Self::Draw, Self::Top, Self::Bottom];

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Draw => None,
            Self::Top => Some(Direction::Top),
            Self::Bottom => Some(Direction::Bottom),
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Draw => 0,
            Self::Top => 1,
            Self::Bottom => 2,
        }
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw => write!(f, "draw selection"),
            Self::Top => write!(f, "select top n"),
            Self::Bottom => write!(f, "select bottom n"),
        }
    }
}

/// State of the exclusive selection-mode control group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectControls {
    pub active: Option<SelectMode>,
    /// Whether the active control is drawn pressed. A click on an ROI
    /// releases it without deactivating the mode.
    pub highlighted: bool,
    enabled: [bool; 3],
}

impl SelectControls {
    pub fn is_enabled(&self, mode: SelectMode) -> bool {
        self.enabled[mode.slot()]
    }

    pub fn set_enabled(&mut self, mode: SelectMode, enabled: bool) {
        self.enabled[mode.slot()] = enabled;
    }

    pub fn activate(&mut self, mode: SelectMode) {
        self.active = Some(mode);
        self.highlighted = true;
    }
}

/// Half-open pixel rectangle `[row0, row1) x [col0, col1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub row0: usize,
    pub col0: usize,
    pub row1: usize,
    pub col1: usize,
}

impl PixelRect {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let (r0, r1) = (self.row0.min(self.row1), self.row0.max(self.row1));
        let (c0, c1) = (self.col0.min(self.col1), self.col0.max(self.col1));
        (r0..r1).contains(&row) && (c0..c1).contains(&col)
    }
}

/// Freehand region lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Freehand {
    #[default]
    Idle,
    /// Draw mode chosen, waiting for the user's rectangle.
    Armed,
    Drawn(PixelRect),
}

impl Freehand {
    pub fn is_present(&self) -> bool {
        !matches!(self, Freehand::Idle)
    }
}

/// Visible data range of a pane in view coordinates (x = column, y = row).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewRange {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ViewRange {
    /// Whole image.
    pub fn full(ly: usize, lx: usize) -> Self {
        Self {
            x: [0.0, lx as f64],
            y: [0.0, ly as f64],
        }
    }

    /// Quadrant `q` of a `grid x grid` layout (row-major), padded by `margin`
    /// quadrants on every side.
    pub fn quadrant(q: usize, grid: usize, ly: usize, lx: usize, margin: f64) -> Result<Self> {
        if q >= grid * grid {
            return Err(CellviewError::InvalidQuadrant { q, grid });
        }
        let col = (q % grid) as f64;
        let row = (q / grid) as f64;
        let span = |pos: f64, extent: usize| {
            let unit = extent as f64 / grid as f64;
            [(pos - margin) * unit, (pos + 1.0 + margin) * unit]
        };
        Ok(Self {
            x: span(col, lx),
            y: span(row, ly),
        })
    }
}

/// Everything the control bar and the two panes display, apart from the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub size_mode: SizeMode,
    pub select: SelectControls,
    /// Statistic colouring the ROIs, `None` for the plain view.
    pub color: Option<String>,
    pub top_count: usize,
    pub freehand: Freehand,
    pub left_range: ViewRange,
    pub right_range: ViewRange,
    /// Whether the right pane's axes follow the left pane.
    pub axes_linked: bool,
    pub quadrant: Option<usize>,
    pub column_stretch: (u32, u32),
}

impl ViewState {
    pub fn new(ly: usize, lx: usize, config: &ViewerConfig) -> Self {
        let full = ViewRange::full(ly, lx);
        let mut view = Self {
            size_mode: config.initial_size_mode,
            select: SelectControls::default(),
            color: None,
            top_count: config.top_count.min(config.max_top_count),
            freehand: Freehand::Idle,
            left_range: full,
            right_range: full,
            axes_linked: true,
            quadrant: None,
            column_stretch: (config.pane_stretch, config.pane_stretch),
        };
        view.choose_size_mode(config.initial_size_mode, config.pane_stretch);
        view
    }

    /// Switch pane layout, re-couple the axes and re-evaluate which
    /// selection-mode controls are usable.
    pub fn choose_size_mode(&mut self, mode: SizeMode, stretch: u32) {
        self.size_mode = mode;
        self.column_stretch = mode.column_stretch(stretch);
        if mode == SizeMode::Both {
            self.link_axes();
            self.clear_freehand();
        } else {
            self.axes_linked = false;
        }
        self.refresh_controls();
        debug!(%mode, linked = self.axes_linked, "Size mode chosen");
    }

    /// Selection modes only work on a single pane: with both panes shown
    /// all three are disabled. Otherwise drawing is always available and
    /// top/bottom-N need a colouring statistic to rank by.
    pub fn refresh_controls(&mut self) {
        let single = self.size_mode.is_single();
        let ranked = single && self.color.is_some();
        self.select.set_enabled(SelectMode::Draw, single);
        self.select.set_enabled(SelectMode::Top, ranked);
        self.select.set_enabled(SelectMode::Bottom, ranked);
    }

    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
        self.refresh_controls();
    }

    pub fn clear_freehand(&mut self) {
        self.freehand = Freehand::Idle;
    }

    fn link_axes(&mut self) {
        self.axes_linked = true;
        self.right_range = self.left_range;
    }

    /// Zoom both panes onto quadrant `q` and link their axes.
    pub fn choose_quadrant(
        &mut self,
        q: usize,
        grid: usize,
        ly: usize,
        lx: usize,
        margin: f64,
    ) -> Result<()> {
        let range = ViewRange::quadrant(q, grid, ly, lx, margin)?;
        self.left_range = range;
        self.right_range = range;
        self.quadrant = Some(q);
        self.link_axes();
        debug!(q, ?range, "Quadrant chosen");
        Ok(())
    }

    /// Show the whole image in `pane`, then re-link the right pane to the left.
    pub fn reset_zoom(&mut self, pane: Pane, ly: usize, lx: usize) {
        let full = ViewRange::full(ly, lx);
        match pane {
            Pane::Left => self.left_range = full,
            Pane::Right => self.right_range = full,
        }
        self.link_axes();
    }
}
