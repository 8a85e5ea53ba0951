//! Emoji picker floating above (or below) its trigger button.
//!
//! ARCHITECTURE
//! ============
//! The picker is rendered with `position: fixed` and placed by
//! [`placement::place`]. A [`PositionTracker`] owns everything that keeps it
//! placed: resize and capturing scroll listeners on the owning window, a
//! click-outside listener on the owning document, and a double
//! `requestAnimationFrame` re-measure guarded by a [`RemeasureSlot`].
//! Dropping the tracker removes the listeners and cancels the pending frame,
//! so teardown is tied to the component's owner.
//!
//! The picker starts hidden and becomes visible on the first placement, which
//! avoids a flash at the origin before layout has settled.

use leptos::prelude::*;

use crate::state::emoji::{CATALOG, EmojiState};
use crate::state::ui::UiState;

const HIDDEN_STYLE: &str = "position: fixed; visibility: hidden;";

#[cfg(feature = "csr")]
mod tracker {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use leptos::prelude::*;
    use placement::PlacementConfig;
    use placement::measure::measure_and_resolve;
    use placement::schedule::RemeasureSlot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::components::chat_input::EMOJI_TRIGGER_CLASS;
    use crate::error::WidgetError;
    use crate::state::ui::UiState;
    use crate::util::dom_measure::{ElementTrigger, WindowViewport, owner_window};

    fn dom_err(e: wasm_bindgen::JsValue) -> WidgetError {
        WidgetError::Dom(format!("{e:?}"))
    }

    /// Measure both elements and write the result onto the picker.
    fn apply(picker: &web_sys::Element, trigger: &web_sys::Element, window: &web_sys::Window, config: &PlacementConfig) {
        let Some(resolution) = measure_and_resolve(&ElementTrigger(trigger), &WindowViewport(window), config) else {
            return;
        };
        log::debug!(
            "emoji picker at {:?} ({:?}/{:?}, recentered: {})",
            resolution.placement,
            resolution.vertical,
            resolution.horizontal,
            resolution.recentered
        );
        let _ = picker.set_attribute("style", &resolution.placement.to_css());
    }

    pub struct PositionTracker {
        window: web_sys::Window,
        document: web_sys::Document,
        on_reflow: Closure<dyn FnMut()>,
        on_mousedown: Closure<dyn FnMut(web_sys::MouseEvent)>,
        // Kept alive for the rAF chain; referenced from JS by id only.
        _first_frame: Closure<dyn FnMut(f64)>,
        _second_frame: Closure<dyn FnMut(f64)>,
        raf_id: Rc<Cell<Option<i32>>>,
        slot: Rc<RefCell<RemeasureSlot>>,
    }

    impl PositionTracker {
        pub fn attach(
            picker: web_sys::Element,
            trigger: web_sys::Element,
            config: PlacementConfig,
            ui: RwSignal<UiState>,
        ) -> Result<Self, WidgetError> {
            let window = owner_window(&picker).ok_or(WidgetError::MissingDocument)?;
            let document = window.document().ok_or(WidgetError::MissingDocument)?;

            let place_now: Rc<dyn Fn()> = {
                let (picker, trigger, window) = (picker.clone(), trigger.clone(), window.clone());
                Rc::new(move || apply(&picker, &trigger, &window, &config))
            };

            let on_reflow = {
                let place_now = Rc::clone(&place_now);
                Closure::<dyn FnMut()>::new(move || place_now())
            };
            window
                .add_event_listener_with_callback("resize", on_reflow.as_ref().unchecked_ref())
                .map_err(dom_err)?;
            window
                .add_event_listener_with_callback_and_bool("scroll", on_reflow.as_ref().unchecked_ref(), true)
                .map_err(dom_err)?;

            let on_mousedown = {
                let picker = picker.clone();
                Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                        return;
                    };
                    if picker.contains(Some(&target)) {
                        return;
                    }
                    let on_trigger = target
                        .dyn_ref::<web_sys::Element>()
                        .and_then(|el| el.closest(&format!(".{EMOJI_TRIGGER_CLASS}")).ok().flatten())
                        .is_some();
                    if !on_trigger {
                        ui.try_update(UiState::close_emoji_picker);
                    }
                })
            };
            document
                .add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())
                .map_err(dom_err)?;

            place_now();

            let slot = Rc::new(RefCell::new(RemeasureSlot::new()));
            let raf_id = Rc::new(Cell::new(None));
            let ticket = slot.borrow_mut().schedule();

            let second_frame = {
                let (slot, raf_id, place_now) = (Rc::clone(&slot), Rc::clone(&raf_id), Rc::clone(&place_now));
                Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                    raf_id.set(None);
                    if slot.borrow_mut().fire(ticket) {
                        place_now();
                    }
                })
            };
            let first_frame = {
                let (window, raf_id) = (window.clone(), Rc::clone(&raf_id));
                let next: js_sys::Function = second_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
                Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                    raf_id.set(window.request_animation_frame(&next).ok());
                })
            };
            raf_id.set(Some(
                window
                    .request_animation_frame(first_frame.as_ref().unchecked_ref())
                    .map_err(dom_err)?,
            ));

            Ok(Self {
                window,
                document,
                on_reflow,
                on_mousedown,
                _first_frame: first_frame,
                _second_frame: second_frame,
                raf_id,
                slot,
            })
        }
    }

    impl Drop for PositionTracker {
        fn drop(&mut self) {
            self.slot.borrow_mut().cancel();
            if let Some(id) = self.raf_id.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            let reflow: &js_sys::Function = self.on_reflow.as_ref().unchecked_ref();
            let _ = self.window.remove_event_listener_with_callback("resize", reflow);
            let _ = self.window.remove_event_listener_with_callback_and_bool("scroll", reflow, true);
            let _ = self
                .document
                .remove_event_listener_with_callback("mousedown", self.on_mousedown.as_ref().unchecked_ref());
        }
    }
}

#[component]
pub fn EmojiPicker(trigger_ref: NodeRef<leptos::html::Button>, input: RwSignal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let emoji = expect_context::<RwSignal<EmojiState>>();
    let picker_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use leptos::logging::warn;

        use crate::config::WidgetConfig;

        let placement_config = use_context::<WidgetConfig>().unwrap_or_default().emoji_panel;
        let tracker = StoredValue::new_local(None::<tracker::PositionTracker>);

        Effect::new(move || {
            let (Some(picker), Some(trigger)) = (picker_ref.get(), trigger_ref.get_untracked()) else {
                return;
            };
            if tracker.with_value(Option::is_some) {
                return;
            }
            match tracker::PositionTracker::attach(picker.into(), trigger.into(), placement_config, ui) {
                Ok(t) => tracker.set_value(Some(t)),
                Err(e) => warn!("emoji picker placement disabled: {e}"),
            }
        });

        on_cleanup(move || {
            let _ = tracker.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = trigger_ref;

    let select = move |glyph: &str| {
        emoji.update(|e| e.record(glyph));
        input.update(|text| text.push_str(glyph));
        ui.update(UiState::close_emoji_picker);
    };

    view! {
        <div class="emoji-picker" style=HIDDEN_STYLE node_ref=picker_ref>
            <div class="emoji-list-container">
                <div class="emoji-list">
                    {move || {
                        let state = emoji.get();
                        let entries = state.current_entries();
                        if entries.is_empty() {
                            return view! { <div class="emoji-empty">"No emoji yet"</div> }.into_any();
                        }
                        entries
                            .into_iter()
                            .map(|glyph| {
                                let glyph = glyph.to_owned();
                                let title = glyph.clone();
                                let label = glyph.clone();
                                view! {
                                    <button class="emoji-item" title=title on:click=move |_| select(&glyph)>
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </div>
            <div class="emoji-categories-bar">
                {CATALOG
                    .iter()
                    .enumerate()
                    .map(|(index, category)| {
                        view! {
                            <button
                                class="emoji-category"
                                class:active=move || emoji.get().active() == index
                                title=category.name
                                disabled=move || emoji.get().is_disabled(index)
                                on:click=move |_| emoji.update(|e| e.select_category(index))
                            >
                                {category.icon}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
