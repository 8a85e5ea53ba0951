//! Default numeric constants for the placement crate.

// ── Panel ───────────────────────────────────────────────────────

/// Default floating panel width in CSS pixels (emoji picker).
pub const PANEL_WIDTH_PX: f64 = 400.0;

/// Default floating panel height in CSS pixels (emoji picker).
pub const PANEL_HEIGHT_PX: f64 = 300.0;

// ── Clearance ───────────────────────────────────────────────────

/// Space kept between the panel and its trigger along the placement axis.
pub const TRIGGER_GAP_PX: f64 = 8.0;

/// Minimum distance kept between the panel and every viewport edge.
pub const EDGE_PADDING_PX: f64 = 16.0;

// ── Horizontal heuristics ───────────────────────────────────────

/// Share of the panel width shifted left of a trigger pinned to the left edge.
pub const LEFT_EDGE_BIAS: f64 = 0.3;

/// Share of the panel width extending left of a trigger pinned to the right edge.
pub const RIGHT_EDGE_BIAS: f64 = 0.7;

/// Drift (as a share of panel width) past which centering on the trigger is attempted.
pub const RECENTER_THRESHOLD: f64 = 0.5;
