//! Browser-only glue on both sides of the iframe boundary.
//!
//! | Module | Runs in | Role |
//! |--------|---------|------|
//! | [`widget`] | host page | `ChatBotWidget` handle: launcher, panel, iframe |
//! | [`frame`] | iframe | mounts the chat tree, posts messages to the host |

pub mod frame;
pub mod widget;

pub use widget::ChatBotWidget;

use crate::error::WidgetError;

pub(crate) fn dom_err(e: wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::Dom(format!("{e:?}"))
}
