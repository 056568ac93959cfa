use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::dataset::Dataset;
use crate::error::{CellviewError, Result};
use crate::index::PaneIndices;
use crate::rank::select_extreme;
use crate::selection::Selection;
use crate::view::{Freehand, PixelRect, SelectMode, ViewState};

/// What a session operation changed, so the host knows whether to repaint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// Controls, freehand region or ranges changed.
    pub view: bool,
    /// Chosen or merged ROIs changed.
    pub selection: bool,
}

impl Changes {
    pub fn any(self) -> bool {
        self.view || self.selection
    }
}

/// A loaded dataset together with everything the viewer mutates while the
/// user inspects it.
#[derive(Clone, Debug)]
pub struct Session {
    pub dataset: Dataset,
    pub panes: PaneIndices,
    pub selection: Selection,
    pub view: ViewState,
    pub config: ViewerConfig,
}

impl Session {
    pub fn new(dataset: Dataset, config: ViewerConfig) -> Result<Self> {
        dataset.validate()?;
        let panes = PaneIndices::build(dataset.ly, dataset.lx, &dataset.rois, &dataset.iscell);
        let selection = if dataset.rois.is_empty() {
            Selection::default()
        } else {
            Selection::single(0)
        };
        let view = ViewState::new(dataset.ly, dataset.lx, &config);
        Ok(Self {
            dataset,
            panes,
            selection,
            view,
            config,
        })
    }

    /// Rebuild both pane indices after the ROI set or classification changed.
    pub fn rebuild_indices(&mut self) {
        let d = &self.dataset;
        self.panes = PaneIndices::build(d.ly, d.lx, &d.rois, &d.iscell);
    }

    /// Colour by a named statistic, or clear colouring with `None`.
    pub fn set_color(&mut self, stat: Option<&str>) -> Result<()> {
        if let Some(name) = stat {
            self.dataset.stat(name)?;
        }
        self.view.set_color(stat.map(str::to_string));
        debug!(color = ?self.view.color, "Colour statistic chosen");
        Ok(())
    }

    /// Set N for the top/bottom-N selector, clamped to the configured
    /// maximum. Re-runs the selector when a ranking mode is active.
    pub fn set_top_count(&mut self, n: usize) -> Changes {
        let max = self.config.max_top_count;
        if n > max {
            warn!(n, max, "Top-N count clamped");
        }
        self.view.top_count = n.min(max);
        match self.view.select.active {
            Some(SelectMode::Top | SelectMode::Bottom) => self.run_top_selection(),
            _ => Changes::default(),
        }
    }

    /// Replace the selection with the top or bottom N ROIs of the visible
    /// pane's partition, ranked by the colouring statistic.
    ///
    /// Does nothing unless a single pane is shown, a statistic is active and
    /// a ranking mode is selected. Any freehand region is cleared first.
    pub fn run_top_selection(&mut self) -> Changes {
        let mut changes = Changes {
            view: self.view.freehand.is_present(),
            selection: false,
        };
        self.view.clear_freehand();
        let Some(pane) = self.view.size_mode.pane() else {
            return changes;
        };
        let Some(direction) = self.view.select.active.and_then(SelectMode::direction) else {
            return changes;
        };
        let Some(name) = self.view.color.as_deref() else {
            return changes;
        };
        let stat = match self.dataset.stat(name) {
            Ok(stat) => stat,
            Err(err) => {
                warn!(%err, "Cannot rank");
                return changes;
            }
        };

        let ranked = select_extreme(
            stat,
            &self.dataset.iscell,
            pane.partition(),
            self.view.top_count,
            direction,
        );
        debug!(%direction, %pane, stat = name, n = ranked.len(), "Ranked selection");
        changes.selection = self.selection.replace_with(&ranked);
        changes
    }

    /// Store `rect` as the freehand region and select every ROI of the
    /// visible pane whose median pixel lies in it. An empty hit leaves the
    /// selection alone but still counts as a view change.
    pub fn select_in_rect(&mut self, rect: PixelRect) -> Changes {
        let Some(pane) = self.view.size_mode.pane() else {
            return Changes::default();
        };
        self.view.freehand = Freehand::Drawn(rect);
        let partition = pane.partition();
        let inside: Vec<usize> = self
            .dataset
            .rois
            .iter()
            .enumerate()
            .filter(|(n, _)| partition.contains(self.dataset.iscell[*n]))
            .filter(|(_, roi)| roi.median().is_some_and(|(y, x)| rect.contains(y, x)))
            .map(|(n, _)| n)
            .collect();
        debug!(?rect, %pane, n = inside.len(), "Freehand selection");
        Changes {
            view: true,
            selection: self.selection.replace_with(&inside),
        }
    }

    /// Flip the cell/not-cell classification of every merged ROI and move
    /// them to the other pane.
    pub fn flip_merged(&mut self) -> Result<()> {
        let total = self.dataset.roi_count();
        if let Some(&bad) = self.selection.merged.iter().find(|&&n| n >= total) {
            return Err(CellviewError::RoiIndexOutOfRange { index: bad, total });
        }
        for &n in &self.selection.merged {
            self.dataset.iscell[n] = !self.dataset.iscell[n];
        }
        info!(merged = ?self.selection.merged, "Classification flipped");
        self.rebuild_indices();
        Ok(())
    }
}
