//! `ChatBotWidget`: the handle an embedding page creates.
//!
//! ARCHITECTURE
//! ============
//! [`Lifecycle`] decides what should happen; this module only performs the
//! resulting [`Effect`]s against the host document. DOM handles and event
//! closures live in a `Chrome` value that exists between `init()` and
//! `destroy()`. Closures hold a `Weak` back-reference so dropping the handle
//! from JS is enough to release everything.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::embed::frame_html::{AssetPaths, error_fallback_html, frame_document};
use crate::embed::host_message::HostMessage;
use crate::embed::styles::{
    FRAME_CSS, HOST_STYLESHEET, LAUNCHER_GLYPH, container_css, launcher_css, launcher_display, panel_display,
};
use crate::embed::{CONTAINER_ID, HOST_STYLE_ID, IFRAME_ID, LAUNCHER_ID};
use crate::error::WidgetError;
use crate::lifecycle::{Effect, Lifecycle};

use super::dom_err;

/// DOM owned by a mounted widget.
struct Chrome {
    window: web_sys::Window,
    container: web_sys::HtmlElement,
    launcher: web_sys::HtmlElement,
    frame: Option<web_sys::HtmlIFrameElement>,
    on_launcher_click: Closure<dyn FnMut()>,
    on_message: Closure<dyn FnMut(web_sys::MessageEvent)>,
}

impl Chrome {
    fn remove(self) {
        let _ = self
            .launcher
            .remove_event_listener_with_callback("click", self.on_launcher_click.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("message", self.on_message.as_ref().unchecked_ref());
        if let Some(frame) = &self.frame {
            frame.remove();
        }
        self.container.remove();
        self.launcher.remove();

        // The host stylesheet is shared; the last widget on the page takes it.
        if let Some(document) = self.window.document() {
            if document.get_element_by_id(CONTAINER_ID).is_none() {
                if let Some(style) = document.get_element_by_id(HOST_STYLE_ID) {
                    style.remove();
                }
            }
        }
    }
}

struct Inner {
    config: WidgetConfig,
    lifecycle: Lifecycle,
    chrome: Option<Chrome>,
}

/// Embeddable chat widget handle.
#[wasm_bindgen]
pub struct ChatBotWidget {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl ChatBotWidget {
    /// `new ChatBotWidget(config?)`. Nothing is added to the page until
    /// [`ChatBotWidget::init`].
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ChatBotWidget, JsError> {
        let raw = if config.is_undefined() || config.is_null() {
            String::new()
        } else if let Some(text) = config.as_string() {
            text
        } else {
            js_sys::JSON::stringify(&config)
                .map_err(|e| JsError::from(dom_err(e)))?
                .into()
        };
        let config = WidgetConfig::from_json(&raw)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner { config, lifecycle: Lifecycle::new(), chrome: None })),
        })
    }

    pub fn init(&self) -> Result<(), JsError> {
        let auto_open = self.inner.borrow().config.auto_open;
        run(&self.inner, |lc| lc.init(auto_open))
    }

    pub fn open(&self) -> Result<(), JsError> {
        run(&self.inner, Lifecycle::open)
    }

    pub fn close(&self) -> Result<(), JsError> {
        run(&self.inner, Lifecycle::close)
    }

    pub fn toggle(&self) -> Result<(), JsError> {
        run(&self.inner, Lifecycle::toggle)
    }

    pub fn destroy(&self) -> Result<(), JsError> {
        run(&self.inner, Lifecycle::destroy)
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().lifecycle.is_open()
    }
}

/// Step the lifecycle and apply its effects. A failed effect rolls the
/// lifecycle back so it keeps matching the page.
fn run(inner: &Rc<RefCell<Inner>>, step: impl FnOnce(&mut Lifecycle) -> Vec<Effect>) -> Result<(), JsError> {
    let effects = step(&mut inner.borrow_mut().lifecycle);
    for effect in effects {
        if let Err(e) = apply(inner, effect) {
            rollback(inner, effect);
            return Err(e.into());
        }
    }
    Ok(())
}

fn rollback(inner: &Rc<RefCell<Inner>>, failed: Effect) {
    let undo = {
        let mut state = inner.borrow_mut();
        match failed {
            Effect::MountChrome => {
                state.lifecycle.mount_failed();
                Vec::new()
            }
            Effect::CreateFrame => state.lifecycle.frame_failed(),
            _ => Vec::new(),
        }
    };
    for effect in undo {
        if let Err(e) = apply(inner, effect) {
            warn!("rollback after {failed:?} failed: {e}");
        }
    }
}

fn apply(inner: &Rc<RefCell<Inner>>, effect: Effect) -> Result<(), WidgetError> {
    if effect == Effect::MountChrome {
        let chrome = mount_chrome(inner)?;
        inner.borrow_mut().chrome = Some(chrome);
        return Ok(());
    }
    if effect == Effect::RemoveChrome {
        if let Some(chrome) = inner.borrow_mut().chrome.take() {
            chrome.remove();
        }
        return Ok(());
    }

    let mut state = inner.borrow_mut();
    let Inner { config, chrome, .. } = &mut *state;
    let Some(chrome) = chrome.as_mut() else {
        return Ok(());
    };
    match effect {
        Effect::ShowPanel => set_display(&chrome.container, panel_display(true)),
        Effect::HidePanel => set_display(&chrome.container, panel_display(false)),
        Effect::ShowLauncher => set_display(&chrome.launcher, launcher_display(false)),
        Effect::HideLauncher => set_display(&chrome.launcher, launcher_display(true)),
        Effect::CreateFrame => {
            let frame = create_frame(&chrome.container, config)?;
            chrome.frame = Some(frame);
            Ok(())
        }
        Effect::MountChrome | Effect::RemoveChrome => Ok(()),
    }
}

fn set_display(el: &web_sys::HtmlElement, value: &str) -> Result<(), WidgetError> {
    el.style().set_property("display", value).map_err(dom_err)
}

fn mount_chrome(inner: &Rc<RefCell<Inner>>) -> Result<Chrome, WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::MissingDocument)?;
    let document = window.document().ok_or(WidgetError::MissingDocument)?;
    let body = document.body().ok_or(WidgetError::MissingDocument)?;
    let corner = inner.borrow().config.position;

    if document.get_element_by_id(HOST_STYLE_ID).is_none() {
        let style = document.create_element("style").map_err(dom_err)?;
        style.set_id(HOST_STYLE_ID);
        style.set_text_content(Some(HOST_STYLESHEET));
        if let Some(head) = document.head() {
            head.append_child(&style).map_err(dom_err)?;
        }
    }

    let container: web_sys::HtmlElement = document
        .create_element("div")
        .map_err(dom_err)?
        .unchecked_into();
    container.set_id(CONTAINER_ID);
    container.set_attribute("style", &container_css(corner)).map_err(dom_err)?;

    let launcher: web_sys::HtmlElement = document
        .create_element("button")
        .map_err(dom_err)?
        .unchecked_into();
    launcher.set_id(LAUNCHER_ID);
    launcher.set_attribute("type", "button").map_err(dom_err)?;
    launcher.set_attribute("aria-label", "Open chat").map_err(dom_err)?;
    launcher.set_attribute("style", &launcher_css(corner)).map_err(dom_err)?;
    launcher.set_text_content(Some(LAUNCHER_GLYPH));

    let weak = Rc::downgrade(inner);
    let on_launcher_click = Closure::<dyn FnMut()>::new(move || {
        if let Some(inner) = weak.upgrade() {
            if let Err(e) = run(&inner, Lifecycle::toggle) {
                warn!("launcher toggle failed: {e:?}");
            }
        }
    });
    launcher
        .add_event_listener_with_callback("click", on_launcher_click.as_ref().unchecked_ref())
        .map_err(dom_err)?;

    let weak = Rc::downgrade(inner);
    let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
        on_frame_message(&weak, &ev);
    });
    window
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .map_err(dom_err)?;

    body.append_child(&container).map_err(dom_err)?;
    body.append_child(&launcher).map_err(dom_err)?;
    log!("chat widget mounted at {}", corner.as_str());

    Ok(Chrome { window, container, launcher, frame: None, on_launcher_click, on_message })
}

fn create_frame(
    container: &web_sys::HtmlElement,
    config: &WidgetConfig,
) -> Result<web_sys::HtmlIFrameElement, WidgetError> {
    let document = container.owner_document().ok_or(WidgetError::MissingDocument)?;
    let paths = AssetPaths::resolve(config.asset_base.as_deref(), &page_script_srcs(&document));
    let html = frame_document(&paths, config)?;

    let frame: web_sys::HtmlIFrameElement = document
        .create_element("iframe")
        .map_err(dom_err)?
        .unchecked_into();
    frame.set_id(IFRAME_ID);
    frame.set_srcdoc(&html);
    frame.set_attribute("style", FRAME_CSS).map_err(dom_err)?;
    frame.set_attribute("sandbox", "allow-scripts allow-same-origin").map_err(dom_err)?;
    frame.set_attribute("title", "ChatBot Widget").map_err(dom_err)?;

    container.set_inner_html("");
    container.append_child(&frame).map_err(dom_err)?;
    log!("chat frame created, assets from {}", paths.script);
    Ok(frame)
}

fn page_script_srcs(document: &web_sys::Document) -> Vec<String> {
    let scripts = document.scripts();
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
        .map(|script| script.src())
        .filter(|src| !src.is_empty())
        .collect()
}

/// Decode `event.data`, which may be a plain object or its JSON text.
fn decode_message(data: &JsValue) -> Option<HostMessage> {
    if let Some(text) = data.as_string() {
        return HostMessage::parse(&text);
    }
    if !data.is_object() {
        return None;
    }
    let text: String = js_sys::JSON::stringify(data).ok()?.into();
    HostMessage::parse(&text)
}

fn on_frame_message(weak: &Weak<RefCell<Inner>>, ev: &web_sys::MessageEvent) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let Some(message) = decode_message(&ev.data()) else {
        return;
    };

    // Only our own frame may drive the widget.
    let from_our_frame = {
        let state = inner.borrow();
        let frame_window = state
            .chrome
            .as_ref()
            .and_then(|c| c.frame.as_ref())
            .and_then(web_sys::HtmlIFrameElement::content_window);
        match (frame_window, ev.source()) {
            (Some(frame_window), Some(source)) => js_sys::Object::is(&frame_window, &source),
            _ => false,
        }
    };
    if !from_our_frame {
        return;
    }

    if message.closes_panel() {
        if let Err(e) = run(&inner, Lifecycle::close) {
            warn!("close from frame failed: {e:?}");
        }
    } else if message == HostMessage::Error {
        warn!("chat frame reported a startup failure");
        if let Some(chrome) = inner.borrow_mut().chrome.as_mut() {
            if let Some(frame) = chrome.frame.take() {
                frame.remove();
            }
            chrome.container.set_inner_html(error_fallback_html());
        }
    }
}
