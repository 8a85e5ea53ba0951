//! Floating panel placement for the support chat widget.
//!
//! Given the bounding box of a trigger element and the size of the viewport,
//! this crate computes where a fixed-size floating panel (the emoji picker)
//! should be drawn so that it stays next to its trigger without leaving the
//! screen. Everything here is pure: the browser layer measures, calls in, and
//! applies the result as fixed-position coordinates.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `Rect`, `Viewport` and `Placement` value types |
//! | [`config`] | [`config::PlacementConfig`] and its defaults |
//! | [`engine`] | The placement rules ([`engine::place`], [`engine::resolve`]) |
//! | [`measure`] | Measurement source traits and the absent-trigger guard |
//! | [`schedule`] | Cancelable ticket for the deferred double-frame re-measure |
//! | [`consts`] | Default numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod measure;
pub mod schedule;

pub use config::PlacementConfig;
pub use engine::{place, resolve};
pub use geometry::{Placement, Rect, Viewport};
