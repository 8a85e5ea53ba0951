//! Browser-backed measurement sources for the placement engine.
//!
//! The chat tree lives inside an iframe, so the viewport is always taken from
//! the trigger element's own window rather than the global one.

use placement::measure::{TriggerSource, ViewportSource};
use placement::{Rect, Viewport};

/// Measures a live element with `getBoundingClientRect()`.
pub struct ElementTrigger<'a>(pub &'a web_sys::Element);

impl TriggerSource for ElementTrigger<'_> {
    fn trigger_rect(&self) -> Option<Rect> {
        if !self.0.is_connected() {
            return None;
        }
        let r = self.0.get_bounding_client_rect();
        Some(Rect::new(r.x(), r.y(), r.width(), r.height()))
    }
}

/// Inner size of a specific window.
pub struct WindowViewport<'a>(pub &'a web_sys::Window);

impl ViewportSource for WindowViewport<'_> {
    fn viewport(&self) -> Viewport {
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Viewport::new(dim(self.0.inner_width()), dim(self.0.inner_height()))
    }
}

/// The window that owns `element`'s document.
pub fn owner_window(element: &web_sys::Element) -> Option<web_sys::Window> {
    element.owner_document()?.default_view()
}
