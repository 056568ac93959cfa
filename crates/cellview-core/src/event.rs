use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::index::Pane;
use crate::selection::{ClickOutcome, Modifier, MouseButton};
use crate::session::{Changes, Session};
use crate::view::{Freehand, PixelRect, SelectMode, SizeMode};

/// User input the viewer reacts to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewerEvent {
    /// A pane layout control was pressed.
    SizeMode { mode: SizeMode },
    /// A selection-mode control was pressed.
    SelectMode { mode: SelectMode },
    /// A new N was entered for the top/bottom-N selector.
    TopCount { n: usize },
    /// Mouse click at view coordinates inside a pane.
    Click {
        pane: Pane,
        row: f64,
        col: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifier: Modifier,
    },
    /// A quadrant zoom control (0..9, row-major) was pressed.
    Quadrant { q: usize },
    /// Double click on a pane.
    ResetZoom { pane: Pane },
    /// Colouring statistic changed; `None` switches to the plain view.
    Color {
        #[serde(default)]
        stat: Option<String>,
    },
    /// The user finished drawing the freehand rectangle.
    FreehandDrawn { rect: PixelRect },
}

/// Work the host must do in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Selection or view changed; repaint.
    Redraw,
    /// Flip the classification of the merged selection containing this ROI.
    FlipClassification(usize),
    /// Right click on empty space.
    ContextMenu(Pane),
    /// Start the interactive rectangle tool.
    BeginFreehand,
}

/// A scripted sequence of events, read from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub events: Vec<ViewerEvent>,
}

impl EventScript {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Route one event to its handler and report what the host must do.
pub fn dispatch(session: &mut Session, event: &ViewerEvent) -> Vec<Effect> {
    debug!(?event, "Dispatch");
    match event {
        ViewerEvent::SizeMode { mode } => {
            let stretch = session.config.pane_stretch;
            session.view.choose_size_mode(*mode, stretch);
            vec![Effect::Redraw]
        }
        ViewerEvent::SelectMode { mode } => on_select_mode(session, *mode),
        ViewerEvent::TopCount { n } => redraw_if(session.set_top_count(*n)),
        ViewerEvent::Click {
            pane,
            row,
            col,
            button,
            modifier,
        } => on_click(session, *pane, *row, *col, *button, *modifier),
        ViewerEvent::Quadrant { q } => {
            let (ly, lx) = (session.dataset.ly, session.dataset.lx);
            let (grid, margin) = (session.config.quadrant_grid, session.config.quadrant_margin);
            match session.view.choose_quadrant(*q, grid, ly, lx, margin) {
                Ok(()) => vec![Effect::Redraw],
                Err(err) => {
                    warn!(%err, "Quadrant ignored");
                    Vec::new()
                }
            }
        }
        ViewerEvent::ResetZoom { pane } => {
            let (ly, lx) = (session.dataset.ly, session.dataset.lx);
            session.view.reset_zoom(*pane, ly, lx);
            vec![Effect::Redraw]
        }
        ViewerEvent::Color { stat } => match session.set_color(stat.as_deref()) {
            Ok(()) => vec![Effect::Redraw],
            Err(err) => {
                warn!(%err, "Colour change ignored");
                Vec::new()
            }
        },
        ViewerEvent::FreehandDrawn { rect } => {
            if !session.view.freehand.is_present() {
                warn!("Freehand rectangle without draw mode ignored");
                return Vec::new();
            }
            redraw_if(session.select_in_rect(*rect))
        }
    }
}

fn redraw_if(changes: Changes) -> Vec<Effect> {
    if changes.any() {
        vec![Effect::Redraw]
    } else {
        Vec::new()
    }
}

fn on_select_mode(session: &mut Session, mode: SelectMode) -> Vec<Effect> {
    if !session.view.select.is_enabled(mode) {
        warn!(%mode, "Selection mode control is disabled");
        return Vec::new();
    }
    // Pressing a control always changes what the control bar shows.
    session.view.refresh_controls();
    session.view.select.activate(mode);
    match mode {
        SelectMode::Draw => {
            session.view.freehand = Freehand::Armed;
            vec![Effect::BeginFreehand, Effect::Redraw]
        }
        SelectMode::Top | SelectMode::Bottom => {
            session.run_top_selection();
            vec![Effect::Redraw]
        }
    }
}

fn on_click(
    session: &mut Session,
    pane: Pane,
    row: f64,
    col: f64,
    button: MouseButton,
    modifier: Modifier,
) -> Vec<Effect> {
    if !session.panes.get(pane).contains(row, col) {
        debug!(%pane, row, col, "Click outside image");
        return Vec::new();
    }
    let Some(roi) = session.panes.hit_test(pane, row, col) else {
        return match button {
            MouseButton::Secondary => vec![Effect::ContextMenu(pane)],
            MouseButton::Primary => Vec::new(),
        };
    };

    let mut effects = Vec::new();
    let outcome = session
        .selection
        .apply_click(roi, &session.dataset.iscell, button, modifier);
    if outcome == ClickOutcome::FlipRequested {
        effects.push(Effect::FlipClassification(roi));
    }
    session.view.clear_freehand();
    if session.view.size_mode.is_single() {
        session.view.select.highlighted = false;
    }
    effects.push(Effect::Redraw);
    effects
}
