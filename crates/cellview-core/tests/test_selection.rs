use cellview_core::selection::{ClickOutcome, Modifier, MouseButton, Selection};

const ISCELL: [bool; 6] = [true, true, true, false, false, true];

fn group(chosen: usize, merged: &[usize]) -> Selection {
    Selection {
        chosen: Some(chosen),
        merged: merged.to_vec(),
    }
}

#[test]
fn test_shift_click_adds_same_class() {
    let mut sel = Selection::single(0);
    let out = sel.apply_click(2, &ISCELL, MouseButton::Primary, Modifier::Shift);
    assert_eq!(out, ClickOutcome::Added);
    assert_eq!(sel, group(2, &[0, 2]));
}

#[test]
fn test_ctrl_click_removes_member() {
    let mut sel = group(2, &[0, 1, 2]);
    let out = sel.apply_click(1, &ISCELL, MouseButton::Primary, Modifier::Ctrl);
    assert_eq!(out, ClickOutcome::Removed);
    assert_eq!(sel, group(0, &[0, 2]));
}

#[test]
fn test_toggle_twice_restores_merged_set() {
    let mut sel = group(1, &[0, 1]);
    let before = sel.merged.clone();
    sel.apply_click(5, &ISCELL, MouseButton::Primary, Modifier::Shift);
    assert_eq!(sel.merged, vec![0, 1, 5]);
    sel.apply_click(5, &ISCELL, MouseButton::Primary, Modifier::Shift);
    assert_eq!(sel.merged, before);
}

#[test]
fn test_toggle_member_out_and_back_in() {
    let mut sel = group(0, &[0, 1, 2]);
    sel.apply_click(1, &ISCELL, MouseButton::Primary, Modifier::Shift);
    sel.apply_click(1, &ISCELL, MouseButton::Primary, Modifier::Shift);
    let mut merged = sel.merged.clone();
    merged.sort_unstable();
    assert_eq!(merged, vec![0, 1, 2]);
}

#[test]
fn test_last_member_cannot_be_toggled_out() {
    let mut sel = Selection::single(3);
    let out = sel.apply_click(3, &ISCELL, MouseButton::Primary, Modifier::Shift);
    assert_eq!(out, ClickOutcome::Replaced);
    assert_eq!(sel, Selection::single(3));
}

#[test]
fn test_shift_click_other_class_replaces() {
    let mut sel = group(1, &[0, 1]);
    let out = sel.apply_click(4, &ISCELL, MouseButton::Primary, Modifier::Shift);
    assert_eq!(out, ClickOutcome::Replaced);
    assert_eq!(sel, Selection::single(4));
}

#[test]
fn test_secondary_click_on_non_member_selects_it() {
    let mut sel = group(1, &[0, 1]);
    let out = sel.apply_click(3, &ISCELL, MouseButton::Secondary, Modifier::None);
    assert_eq!(out, ClickOutcome::FlipRequested);
    assert_eq!(sel, Selection::single(3));
}

#[test]
fn test_secondary_click_on_member_keeps_group() {
    let mut sel = group(1, &[0, 1, 2]);
    let out = sel.apply_click(2, &ISCELL, MouseButton::Secondary, Modifier::Shift);
    assert_eq!(out, ClickOutcome::FlipRequested);
    assert_eq!(sel, group(1, &[0, 1, 2]));
}

#[test]
fn test_replace_with_ranked_focuses_first() {
    let mut sel = Selection::single(0);
    assert!(sel.replace_with(&[5, 2, 1]));
    assert_eq!(sel, group(5, &[5, 2, 1]));
}
