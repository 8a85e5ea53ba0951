//! Panel size and clearance configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    EDGE_PADDING_PX, LEFT_EDGE_BIAS, PANEL_HEIGHT_PX, PANEL_WIDTH_PX, RECENTER_THRESHOLD, RIGHT_EDGE_BIAS,
    TRIGGER_GAP_PX,
};

/// Immutable inputs for one placement computation.
///
/// `left_bias`, `right_bias` and `recenter_threshold` are ratios of
/// `panel_width`. They are tuning values with no derivation behind them, so
/// they are configuration rather than constants baked into the rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementConfig {
    pub panel_width: f64,
    pub panel_height: f64,
    pub gap: f64,
    pub edge_padding: f64,
    pub left_bias: f64,
    pub right_bias: f64,
    pub recenter_threshold: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH_PX,
            panel_height: PANEL_HEIGHT_PX,
            gap: TRIGGER_GAP_PX,
            edge_padding: EDGE_PADDING_PX,
            left_bias: LEFT_EDGE_BIAS,
            right_bias: RIGHT_EDGE_BIAS,
            recenter_threshold: RECENTER_THRESHOLD,
        }
    }
}

impl PlacementConfig {
    /// Largest `left` that keeps the panel clear of the right edge.
    ///
    /// Negative or below `edge_padding` when the viewport is too narrow.
    #[must_use]
    pub fn max_left(&self, viewport_width: f64) -> f64 {
        viewport_width - self.panel_width - self.edge_padding
    }

    /// Largest `top` that keeps the panel clear of the bottom edge.
    #[must_use]
    pub fn max_top(&self, viewport_height: f64) -> f64 {
        viewport_height - self.panel_height - self.edge_padding
    }

    /// Whether the viewport can hold the panel plus padding on both axes.
    #[must_use]
    pub fn fits(&self, viewport_width: f64, viewport_height: f64) -> bool {
        viewport_width >= self.panel_width + 2.0 * self.edge_padding
            && viewport_height >= self.panel_height + 2.0 * self.edge_padding
    }
}
