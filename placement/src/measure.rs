//! Measurement seams between the placement rules and the host platform.
//!
//! The browser layer implements these over `getBoundingClientRect()` and the
//! owning window's inner size. Keeping them as traits lets the "trigger is
//! gone" path be exercised without a DOM.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use crate::config::PlacementConfig;
use crate::engine::{Resolution, resolve};
use crate::geometry::{Placement, Rect, Viewport};

/// Supplies the anchor element's bounding box on demand.
pub trait TriggerSource {
    /// `None` when the anchor is not mounted (for example during teardown).
    fn trigger_rect(&self) -> Option<Rect>;
}

/// Supplies the current viewport size on demand.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl TriggerSource for Option<Rect> {
    fn trigger_rect(&self) -> Option<Rect> {
        *self
    }
}

impl TriggerSource for Rect {
    fn trigger_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Take fresh measurements and place the panel.
///
/// Returns `None` when the trigger is absent; callers treat that as a no-op
/// and keep whatever position they last applied.
pub fn measure_and_place<T, V>(trigger: &T, viewport: &V, config: &PlacementConfig) -> Option<Placement>
where
    T: TriggerSource + ?Sized,
    V: ViewportSource + ?Sized,
{
    measure_and_resolve(trigger, viewport, config).map(|r| r.placement)
}

/// Like [`measure_and_place`], keeping the rule trace for debug logging.
pub fn measure_and_resolve<T, V>(trigger: &T, viewport: &V, config: &PlacementConfig) -> Option<Resolution>
where
    T: TriggerSource + ?Sized,
    V: ViewportSource + ?Sized,
{
    let rect = trigger.trigger_rect()?;
    Some(resolve(rect, viewport.viewport(), config))
}
