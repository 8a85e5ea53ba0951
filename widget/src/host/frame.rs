//! Frame-side entry: mount the chat tree and talk to the parent window.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::app::ChatBot;
use crate::config::WidgetConfig;
use crate::embed::MOUNT_ID;
use crate::embed::host_message::HostMessage;
use crate::error::WidgetError;

use super::dom_err;

fn parse_config(raw: &JsValue) -> Result<WidgetConfig, WidgetError> {
    if raw.is_undefined() || raw.is_null() {
        return Ok(WidgetConfig::default());
    }
    if let Some(text) = raw.as_string() {
        return WidgetConfig::from_json(&text);
    }
    let text: String = js_sys::JSON::stringify(raw).map_err(dom_err)?.into();
    WidgetConfig::from_json(&text)
}

/// Mount [`ChatBot`] into `#chatbot-root` of the current document.
pub fn mount(raw_config: &JsValue) -> Result<(), WidgetError> {
    let config = parse_config(raw_config)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::MissingDocument)?;
    let root = document
        .get_element_by_id(MOUNT_ID)
        .ok_or(WidgetError::MountPointMissing(MOUNT_ID))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| WidgetError::FrameDocumentUnavailable)?;

    leptos::mount::mount_to(root, move || view! { <ChatBot config=config /> }).forget();
    leptos::logging::log!("chat frame mounted");
    Ok(())
}

/// Post `message` to the embedding page.
pub fn post_to_host(message: HostMessage) {
    let Some(parent) = web_sys::window().and_then(|w| w.parent().ok().flatten()) else {
        leptos::logging::warn!("no parent window for {message:?}");
        return;
    };
    let payload = message
        .to_json()
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok());
    if let Some(payload) = payload {
        if let Err(e) = parent.post_message(&payload, "*") {
            leptos::logging::warn!("postMessage failed: {e:?}");
        }
    }
}

/// Tell the host the frame could not start.
pub fn report_failure() {
    post_to_host(HostMessage::Error);
}
