//! Placement rules for a floating panel anchored to a trigger.
//!
//! ALGORITHM
//! =========
//! Vertical: prefer fully above, then fully below, then whichever side has
//! more room (clamped toward the viewport, possibly overlapping the trigger).
//!
//! Horizontal: left-align to the trigger unless it is pinned against a
//! viewport edge, in which case bias the panel toward the open side. Clamp
//! into the padded viewport, and if clamping dragged the panel too far from
//! the trigger, try centering on it instead. A final clamp on both axes
//! guarantees containment whenever the viewport is large enough.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::PlacementConfig;
use crate::geometry::{Placement, Rect, Viewport};

/// Which vertical rule produced `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    /// Enough room above the trigger.
    Above,
    /// Not enough above, enough below.
    Below,
    /// Neither fits; above had strictly more room.
    SqueezedAbove,
    /// Neither fits; below had at least as much room.
    SqueezedBelow,
}

/// Which horizontal rule produced the initial `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Trigger hugs the left edge; panel biased rightward.
    LeftEdge,
    /// Trigger hugs the right edge; panel biased leftward.
    RightEdge,
    /// Trigger in the open middle; panel left-aligned to it.
    Aligned,
}

/// A placement along with the rules that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub placement: Placement,
    pub vertical: VerticalSide,
    pub horizontal: HorizontalAnchor,
    /// The centered fallback was adopted after the proximity check.
    pub recentered: bool,
}

/// Compute the panel origin for `trigger` inside `viewport`.
///
/// Pure and idempotent; safe to call on every resize, scroll or frame.
#[must_use]
pub fn place(trigger: Rect, viewport: Viewport, config: &PlacementConfig) -> Placement {
    resolve(trigger, viewport, config).placement
}

/// Same as [`place`], but also reports which rules fired.
#[must_use]
pub fn resolve(trigger: Rect, viewport: Viewport, config: &PlacementConfig) -> Resolution {
    let (top, vertical) = vertical_position(trigger, viewport, config);
    let (left, horizontal, recentered) = horizontal_position(trigger, viewport, config);

    let placement = Placement {
        top: clamp_low_first(top, config.edge_padding, config.max_top(viewport.height)),
        left: clamp_low_first(left, config.edge_padding, config.max_left(viewport.width)),
    };

    Resolution { placement, vertical, horizontal, recentered }
}

fn vertical_position(trigger: Rect, viewport: Viewport, config: &PlacementConfig) -> (f64, VerticalSide) {
    let needed = config.panel_height + config.gap;
    let space_above = trigger.y;
    let space_below = viewport.height - trigger.bottom();
    let above = trigger.y - config.panel_height - config.gap;
    let below = trigger.bottom() + config.gap;

    if space_above >= needed {
        (above, VerticalSide::Above)
    } else if space_below >= needed {
        (below, VerticalSide::Below)
    } else if space_above > space_below {
        (above.max(config.edge_padding), VerticalSide::SqueezedAbove)
    } else {
        (below.min(config.max_top(viewport.height)), VerticalSide::SqueezedBelow)
    }
}

fn horizontal_position(trigger: Rect, viewport: Viewport, config: &PlacementConfig) -> (f64, HorizontalAnchor, bool) {
    let padding = config.edge_padding;
    let width = config.panel_width;
    let max_left = config.max_left(viewport.width);
    let space_left = trigger.x;
    let space_right = viewport.width - trigger.right();

    let (mut left, anchor) = if space_left < padding && space_right > space_left {
        (padding.max(trigger.x - width * config.left_bias), HorizontalAnchor::LeftEdge)
    } else if space_right < padding && space_left > space_right {
        (max_left.min(trigger.right() - width * config.right_bias), HorizontalAnchor::RightEdge)
    } else {
        (trigger.x, HorizontalAnchor::Aligned)
    };

    if left < padding {
        left = padding;
    } else if left + width > viewport.width - padding {
        left = max_left;
    }

    let distance = (left - trigger.x).abs().min((left + width - trigger.right()).abs());
    let mut recentered = false;
    if distance > width * config.recenter_threshold {
        let centered = trigger.center_x() - width / 2.0;
        if centered >= padding && centered <= max_left {
            left = centered;
            recentered = true;
        }
    }

    (left, anchor, recentered)
}

/// `max(low, min(value, high))`: when the range is inverted, `low` wins.
fn clamp_low_first(value: f64, low: f64, high: f64) -> f64 {
    low.max(value.min(high))
}
