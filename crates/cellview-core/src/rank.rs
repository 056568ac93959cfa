use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of the cell/not-cell classification to work within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Cells,
    NotCells,
}

impl Partition {
    pub fn contains(self, is_cell: bool) -> bool {
        match self {
            Partition::Cells => is_cell,
            Partition::NotCells => !is_cell,
        }
    }

    /// Global indices of the ROIs in this partition, in ROI order.
    pub fn members(self, iscell: &[bool]) -> Vec<usize> {
        iscell
            .iter()
            .enumerate()
            .filter(|(_, c)| self.contains(**c))
            .map(|(i, _)| i)
            .collect()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Cells => write!(f, "cells"),
            Partition::NotCells => write!(f, "not cells"),
        }
    }
}

/// Rank from the highest or the lowest statistic value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Top,
    Bottom,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Top => write!(f, "Top"),
            Direction::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Pick the `n` most extreme ROIs of `partition` by `stat`.
///
/// The partition is sorted ascending with a stable sort. Every NaN, whatever
/// its sign bit, sorts above all numbers. `Bottom` takes the first `n`, `Top` the last `n`; either way
/// the result starts with the most extreme ROI. `n` is clamped to the
/// partition size, so an empty partition or `n == 0` yields an empty result.
///
/// `stat` and `iscell` are indexed by global ROI index; entries beyond the
/// shorter of the two are ignored.
pub fn select_extreme(
    stat: &[f32],
    iscell: &[bool],
    partition: Partition,
    n: usize,
    direction: Direction,
) -> Vec<usize> {
    let len = stat.len().min(iscell.len());
    let mut members = partition.members(&iscell[..len]);
    members.sort_by(|&a, &b| rank_key(stat[a]).total_cmp(&rank_key(stat[b])));

    let n = n.min(members.len());
    match direction {
        Direction::Bottom => members.truncate(n),
        Direction::Top => {
            let skip = members.len() - n;
            members.drain(..skip);
            members.reverse();
        }
    }
    members
}

/// `total_cmp` puts negative NaN below -inf; fold every NaN onto positive NaN.
fn rank_key(v: f32) -> f32 {
    if v.is_nan() {
        f32::NAN.abs()
    } else {
        v
    }
}
