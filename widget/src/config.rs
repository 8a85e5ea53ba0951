//! Widget configuration passed to the `ChatBotWidget` constructor.
//!
//! Accepts the same JSON shape on both sides of the frame boundary: the host
//! parses it once, then serializes it into the frame bootstrap script.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use placement::PlacementConfig;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Viewport corner the launcher and panel are pinned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Corner {
    /// Parse the kebab-case name used in config and env vars.
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        match raw.trim() {
            "bottom-right" => Ok(Self::BottomRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "top-right" => Ok(Self::TopRight),
            "top-left" => Ok(Self::TopLeft),
            other => Err(WidgetError::InvalidConfig(format!("unknown position: {other}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub position: Corner,
    pub auto_open: bool,
    /// Directory URL (with trailing slash) holding the widget JS, WASM and
    /// CSS. Discovered from the page's `<script>` tags when absent.
    pub asset_base: Option<String>,
    pub emoji_panel: PlacementConfig,
}

impl WidgetConfig {
    /// Parse a JSON config object. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        if raw.trim().is_empty() || raw.trim() == "null" {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
