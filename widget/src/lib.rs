//! # chatbot-widget
//!
//! Leptos + WASM customer-support chat widget.
//!
//! The same bundle runs in two places. On the host page it exposes the
//! [`host::ChatBotWidget`] handle (launcher button, panel container, lazily
//! created iframe). Inside that iframe it mounts the [`app::ChatBot`] tree
//! into the `#chatbot-root` element of the frame's own document. The two
//! sides talk only through `postMessage` (see [`embed::host_message`]).
//!
//! Everything that needs a browser sits behind the `csr` feature; state,
//! formatting, validation and lifecycle logic build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod embed;
pub mod error;
pub mod lifecycle;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod host;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Module start hook: install panic and log forwarding to the console.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Frame-side entry point, called by the iframe's bootstrap script.
///
/// Mounts the chat tree into `#chatbot-root` of the calling document. On
/// failure the parent is told so it can swap in the fallback view.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = mountChatFrame)]
pub fn mount_chat_frame(config: JsValue) -> Result<(), JsError> {
    let result = host::frame::mount(&config);
    if let Err(e) = &result {
        log::error!("chat frame mount failed: {e}");
        host::frame::report_failure();
    }
    result.map_err(JsError::from)
}
