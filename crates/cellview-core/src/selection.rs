use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mouse button of a click inside a pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
}

/// Keyboard modifier held during a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    #[default]
    None,
    Shift,
    Ctrl,
}

impl Modifier {
    /// Shift and ctrl both toggle membership of the merged selection.
    pub fn toggles(self) -> bool {
        matches!(self, Modifier::Shift | Modifier::Ctrl)
    }
}

/// What a resolved click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Merged selection replaced by the clicked ROI.
    Replaced,
    /// Clicked ROI appended to the merged selection.
    Added,
    /// Clicked ROI removed from the merged selection.
    Removed,
    /// Selection settled on the clicked ROI (or its group); its classification
    /// should be flipped.
    FlipRequested,
}

/// Focused ROI plus the ROIs jointly selected with it.
///
/// When `merged` is non-empty, `chosen` is one of its members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub chosen: Option<usize>,
    pub merged: Vec<usize>,
}

impl Selection {
    pub fn single(roi: usize) -> Self {
        Self {
            chosen: Some(roi),
            merged: vec![roi],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    pub fn contains(&self, roi: usize) -> bool {
        self.merged.contains(&roi)
    }

    /// Make `roi` the only selected ROI.
    pub fn select_only(&mut self, roi: usize) {
        self.chosen = Some(roi);
        self.merged.clear();
        self.merged.push(roi);
    }

    /// Replace the selection with a ranked list; its first entry becomes focused.
    ///
    /// An empty list leaves the selection untouched. Returns whether anything changed.
    pub fn replace_with(&mut self, ranked: &[usize]) -> bool {
        let Some(&first) = ranked.first() else {
            return false;
        };
        self.chosen = Some(first);
        self.merged = ranked.to_vec();
        true
    }

    /// Apply a click that resolved to `roi`.
    ///
    /// Shift/ctrl clicks toggle `roi` in the merged selection when it shares
    /// the classification of the first merged ROI; the last remaining member
    /// cannot be removed. Any other primary click replaces the selection.
    /// A secondary click on a non-member makes it the sole selection, while a
    /// secondary click on a member keeps the group so it can be flipped together.
    pub fn apply_click(
        &mut self,
        roi: usize,
        iscell: &[bool],
        button: MouseButton,
        modifier: Modifier,
    ) -> ClickOutcome {
        let outcome = match button {
            MouseButton::Secondary => {
                if !self.contains(roi) {
                    self.select_only(roi);
                }
                ClickOutcome::FlipRequested
            }
            MouseButton::Primary => self.apply_primary(roi, iscell, modifier),
        };
        debug!(roi, ?outcome, merged = ?self.merged, "Click applied");
        outcome
    }

    fn apply_primary(&mut self, roi: usize, iscell: &[bool], modifier: Modifier) -> ClickOutcome {
        if modifier.toggles() && self.same_class_as_first(roi, iscell) {
            if !self.contains(roi) {
                self.merged.push(roi);
                self.chosen = Some(roi);
                return ClickOutcome::Added;
            }
            if self.merged.len() > 1 {
                self.merged.retain(|&m| m != roi);
                self.chosen = self.merged.first().copied();
                return ClickOutcome::Removed;
            }
        }
        self.select_only(roi);
        ClickOutcome::Replaced
    }

    fn same_class_as_first(&self, roi: usize, iscell: &[bool]) -> bool {
        let class_of = |n: usize| iscell.get(n).copied();
        match self.merged.first() {
            Some(&first) => class_of(first).is_some() && class_of(first) == class_of(roi),
            None => false,
        }
    }
}
