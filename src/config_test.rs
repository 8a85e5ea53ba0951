use std::collections::HashMap;

use tracing_subscriber::filter::LevelFilter;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = DevConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.pkg_dir, PathBuf::from("widget/pkg"));
    assert_eq!(cfg.style_dir, PathBuf::from("widget/style"));
    assert_eq!(cfg.widget.position, Corner::BottomRight);
    assert!(!cfg.widget.auto_open);
    assert_eq!(cfg.widget.asset_base.as_deref(), Some("/pkg"));
}

#[test]
fn parses_overrides() {
    let cfg = DevConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("WIDGET_PKG_DIR", "/srv/pkg"),
        ("WIDGET_POSITION", "top-left"),
        ("WIDGET_AUTO_OPEN", "Yes"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.pkg_dir, PathBuf::from("/srv/pkg"));
    assert_eq!(cfg.widget.position, Corner::TopLeft);
    assert!(cfg.widget.auto_open);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = DevConfig::from_lookup(lookup(&[("PORT", ""), ("WIDGET_POSITION", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.widget.position, Corner::BottomRight);
}

#[test]
fn rejects_bad_port() {
    let err = DevConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn rejects_unknown_position() {
    let err = DevConfig::from_lookup(lookup(&[("WIDGET_POSITION", "center")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid WIDGET_POSITION=\"center\""));
}

#[test]
fn rejects_bad_bool() {
    let err = DevConfig::from_lookup(lookup(&[("WIDGET_AUTO_OPEN", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "WIDGET_AUTO_OPEN", .. }));
}

#[test]
fn from_env_reads_process_environment() {
    // SAFETY: only this test touches these variables.
    unsafe {
        std::env::set_var("WIDGET_STYLE_DIR", "/tmp/chatbot-style");
    }
    let cfg = DevConfig::from_env();
    unsafe {
        std::env::remove_var("WIDGET_STYLE_DIR");
    }
    assert_eq!(cfg.map(|c| c.style_dir), Ok(PathBuf::from("/tmp/chatbot-style")));
}

// =============================================================
// Log filter
// =============================================================

#[test]
fn log_filter_defaults_to_info() {
    assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn log_filter_honors_rust_log() {
    assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
}
