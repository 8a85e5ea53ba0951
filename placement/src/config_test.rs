#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_emoji_picker_dimensions() {
    let cfg = PlacementConfig::default();
    assert_eq!(cfg.panel_width, 400.0);
    assert_eq!(cfg.panel_height, 300.0);
    assert_eq!(cfg.gap, 8.0);
    assert_eq!(cfg.edge_padding, 16.0);
    assert_eq!(cfg.left_bias, 0.3);
    assert_eq!(cfg.right_bias, 0.7);
    assert_eq!(cfg.recenter_threshold, 0.5);
}

#[test]
fn bounds_follow_panel_and_padding() {
    let cfg = PlacementConfig::default();
    assert_eq!(cfg.max_left(1200.0), 784.0);
    assert_eq!(cfg.max_top(800.0), 484.0);
}

#[test]
fn bounds_go_negative_for_tiny_viewports() {
    let cfg = PlacementConfig::default();
    assert!(cfg.max_left(300.0) < 0.0);
    assert!(!cfg.fits(300.0, 800.0));
}

#[test]
fn fits_requires_padding_on_both_sides() {
    let cfg = PlacementConfig::default();
    assert!(cfg.fits(432.0, 332.0));
    assert!(!cfg.fits(431.0, 332.0));
    assert!(!cfg.fits(432.0, 331.0));
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let cfg: PlacementConfig = serde_json::from_str(r#"{"panelWidth":320,"recenterThreshold":0.25}"#).unwrap();
    assert_eq!(cfg.panel_width, 320.0);
    assert_eq!(cfg.recenter_threshold, 0.25);
    assert_eq!(cfg.panel_height, 300.0);
    assert_eq!(cfg.edge_padding, 16.0);
}
