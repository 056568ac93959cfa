use std::io::Write;

use cellview_core::config::ViewerConfig;
use cellview_core::index::Pane;
use cellview_core::rank::{Direction, Partition};
use cellview_core::view::{SelectMode, SizeMode};
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let c = ViewerConfig::default();
    assert_eq!(c.top_count, 40);
    assert_eq!(c.max_top_count, 500);
    assert_eq!(c.quadrant_margin, 0.15);
    assert_eq!(c.quadrant_grid, 3);
    assert_eq!(c.pane_stretch, 100);
    assert_eq!(c.initial_size_mode, SizeMode::Both);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let c = ViewerConfig::from_toml_str("top_count = 12\ninitial_size_mode = \"cells_only\"\n").unwrap();
    assert_eq!(c.top_count, 12);
    assert_eq!(c.initial_size_mode, SizeMode::CellsOnly);
    assert_eq!(c.max_top_count, 500);
    assert_eq!(c.quadrant_grid, 3);
}

#[test]
fn test_quadrant_grid_from_toml() {
    let c = ViewerConfig::from_toml_str("quadrant_grid = 4\n").unwrap();
    assert_eq!(c.quadrant_grid, 4);
    assert_eq!(c.quadrant_margin, 0.15);
}

#[test]
fn test_config_round_trips_through_file() {
    let c = ViewerConfig {
        quadrant_margin: 0.0,
        ..Default::default()
    };
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml::to_string_pretty(&c).unwrap().as_bytes()).unwrap();
    f.flush().unwrap();
    assert_eq!(ViewerConfig::load(f.path()).unwrap(), c);
}

#[test]
fn test_bad_toml() {
    assert!(ViewerConfig::from_toml_str("top_count = \"many\"").is_err());
}

#[test]
fn test_display_names() {
    assert_eq!(SizeMode::CellsOnly.to_string(), "cells");
    assert_eq!(SizeMode::Both.to_string(), "both");
    assert_eq!(SizeMode::NotCellsOnly.to_string(), "not cells");
    assert_eq!(SelectMode::Draw.to_string(), "draw selection");
    assert_eq!(SelectMode::Top.to_string(), "select top n");
    assert_eq!(SelectMode::Bottom.to_string(), "select bottom n");
    assert_eq!(Partition::NotCells.to_string(), "not cells");
    assert_eq!(Direction::Bottom.to_string(), "Bottom");
    assert_eq!(Pane::Right.to_string(), "right");
}

#[test]
fn test_size_mode_panes() {
    assert_eq!(SizeMode::CellsOnly.pane(), Some(Pane::Left));
    assert_eq!(SizeMode::Both.pane(), None);
    assert_eq!(SizeMode::NotCellsOnly.pane(), Some(Pane::Right));
    assert_eq!(Pane::Left.partition(), Partition::Cells);
}
