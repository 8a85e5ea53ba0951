//! Dev host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port (default 5173)
//! - `WIDGET_PKG_DIR`: wasm-pack output served at `/pkg` (default `widget/pkg`)
//! - `WIDGET_STYLE_DIR`: stylesheet directory, `/pkg` fallback (default `widget/style`)
//! - `WIDGET_POSITION`: `bottom-right` (default), `bottom-left`, `top-right`, `top-left`
//! - `WIDGET_AUTO_OPEN`: open the panel on load (default false)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::path::PathBuf;

use chatbot_widget::config::{Corner, WidgetConfig};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_PKG_DIR: &str = "widget/pkg";
pub const DEFAULT_STYLE_DIR: &str = "widget/style";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing filter from a `RUST_LOG` value. Unset, blank, or unparsable
/// values fall back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DevConfig {
    pub port: u16,
    pub pkg_dir: PathBuf,
    pub style_dir: PathBuf,
    /// Config handed to `new ChatBotWidget(...)` on the dev page.
    pub widget: WidgetConfig,
}

impl DevConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| invalid("PORT", &raw, &e))?,
            None => DEFAULT_PORT,
        };
        let position = match get("WIDGET_POSITION") {
            Some(raw) => Corner::parse(&raw).map_err(|e| invalid("WIDGET_POSITION", &raw, &e))?,
            None => Corner::default(),
        };
        let auto_open = match get("WIDGET_AUTO_OPEN") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("WIDGET_AUTO_OPEN", &raw, &"expected true or false"))?,
            None => false,
        };

        Ok(Self {
            port,
            pkg_dir: get("WIDGET_PKG_DIR").map_or_else(|| PathBuf::from(DEFAULT_PKG_DIR), PathBuf::from),
            style_dir: get("WIDGET_STYLE_DIR").map_or_else(|| PathBuf::from(DEFAULT_STYLE_DIR), PathBuf::from),
            widget: WidgetConfig { position, auto_open, asset_base: Some("/pkg".to_owned()), ..WidgetConfig::default() },
        })
    }
}

fn invalid(var: &'static str, value: &str, reason: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::Invalid { var, value: value.to_owned(), reason: reason.to_string() }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
