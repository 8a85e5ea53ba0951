#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn blank_and_null_config_use_defaults() {
    assert_eq!(WidgetConfig::from_json("").unwrap(), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_json("null").unwrap(), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
}

#[test]
fn default_is_bottom_right_closed() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.position, Corner::BottomRight);
    assert!(!cfg.auto_open);
    assert_eq!(cfg.asset_base, None);
    assert_eq!(cfg.emoji_panel, PlacementConfig::default());
}

#[test]
fn parses_camel_case_fields() {
    let cfg = WidgetConfig::from_json(
        r#"{"position":"top-left","autoOpen":true,"assetBase":"/pkg/","emojiPanel":{"panelWidth":320}}"#,
    )
    .unwrap();
    assert_eq!(cfg.position, Corner::TopLeft);
    assert!(cfg.auto_open);
    assert_eq!(cfg.asset_base.as_deref(), Some("/pkg/"));
    assert_eq!(cfg.emoji_panel.panel_width, 320.0);
    assert_eq!(cfg.emoji_panel.panel_height, 300.0);
}

#[test]
fn unknown_position_is_rejected() {
    let err = WidgetConfig::from_json(r#"{"position":"middle"}"#).unwrap_err();
    assert!(matches!(err, WidgetError::InvalidConfig(_)));
}

#[test]
fn corner_parse_roundtrips_names() {
    for corner in [Corner::BottomRight, Corner::BottomLeft, Corner::TopRight, Corner::TopLeft] {
        assert_eq!(Corner::parse(corner.as_str()).unwrap(), corner);
    }
    assert!(Corner::parse("center").is_err());
}

#[test]
fn config_survives_json_reserialization() {
    let cfg = WidgetConfig { position: Corner::BottomLeft, auto_open: true, ..WidgetConfig::default() };
    let raw = serde_json::to_string(&cfg).unwrap();
    assert!(raw.contains("\"bottom-left\""));
    assert_eq!(WidgetConfig::from_json(&raw).unwrap(), cfg);
}
