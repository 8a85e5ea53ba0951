//! Message composer: text input, emoji picker trigger, attachment buttons,
//! send button.
//!
//! DESIGN
//! ======
//! Each attachment button forwards its click to a hidden `<input type=file>`
//! with the matching `accept` filter. Picked files are validated locally and
//! shown from an object URL; rejected files become a bot-side notice. Object
//! URLs are revoked when the composer is torn down.

use leptos::prelude::*;

use crate::app::ReplyQueue;
use crate::components::emoji_picker::EmojiPicker;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::timestamp::now_label;
use crate::util::upload::UploadKind;

/// Marker class the picker uses to ignore clicks on its own trigger.
pub const EMOJI_TRIGGER_CLASS: &str = "emoji-picker-trigger";

fn upload_glyph(kind: UploadKind) -> &'static str {
    match kind {
        UploadKind::Image => "🖼",
        UploadKind::Video => "🎬",
        UploadKind::File => "📎",
    }
}

#[cfg(feature = "csr")]
fn take_picked_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    let file = input.files().and_then(|files| files.item(0));
    // Reset so picking the same file again still fires `change`.
    input.set_value("");
    file
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn handle_upload(
    kind: UploadKind,
    file: &web_sys::File,
    chat: RwSignal<ChatState>,
    replies: ReplyQueue,
    object_urls: RwSignal<Vec<String>>,
) {
    use crate::util::upload::{PickedFile, to_part, validate};
    use leptos::logging::warn;

    let picked = PickedFile { name: file.name(), mime: file.type_(), size: file.size().max(0.0) as u64 };
    let timestamp = now_label();
    if let Err(e) = validate(kind, &picked) {
        warn!("upload rejected: {e}");
        chat.update(|c| c.notice(&e.to_string(), &timestamp));
        return;
    }
    let url = match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => url,
        Err(e) => {
            warn!("object URL for {} failed: {e:?}", picked.name);
            return;
        }
    };
    object_urls.update(|urls| urls.push(url.clone()));
    let part = to_part(kind, &picked, url);
    if let Some(pending) = chat.try_update(|c| c.attach(part, &timestamp)) {
        replies.schedule(pending);
    }
}

#[component]
fn UploadButton(kind: UploadKind) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let replies = expect_context::<ReplyQueue>();
    let object_urls = RwSignal::new(Vec::<String>::new());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || {
        #[cfg(feature = "csr")]
        for url in object_urls.try_get_untracked().unwrap_or_default() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    });

    let on_pick = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(file) = file_ref.get().as_ref().and_then(take_picked_file) {
                handle_upload(kind, &file, chat, replies, object_urls);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = (chat, replies, object_urls);
    };

    let class = format!("input-btn {kind}-btn");

    view! {
        <button class=class title=kind.title() on:click=on_pick>
            {upload_glyph(kind)}
        </button>
        <input
            type="file"
            class="hidden-file-input"
            style="display: none;"
            accept=kind.accept()
            node_ref=file_ref
            on:change=on_change
        />
    }
}

#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let replies = expect_context::<ReplyQueue>();

    let input = RwSignal::new(String::new());
    let emoji_trigger_ref = NodeRef::<leptos::html::Button>::new();

    let do_send = move || {
        let text = input.get_untracked();
        if let Some(Some(pending)) = chat.try_update(|c| c.submit(&text, &now_label())) {
            input.set(String::new());
            replies.schedule(pending);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbot-input-wrapper">
            <div class="chatbot-input-top">
                <input
                    type="text"
                    class="message-input"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
            <div class="chatbot-input-bottom">
                <div class="chatbot-input-buttons">
                    <button
                        class=format!("input-btn emoji-btn {EMOJI_TRIGGER_CLASS}")
                        title="Emoji"
                        node_ref=emoji_trigger_ref
                        on:click=move |_| ui.update(UiState::toggle_emoji_picker)
                    >
                        "😊"
                    </button>
                    {UploadKind::ALL.into_iter().map(|kind| view! { <UploadButton kind=kind /> }).collect::<Vec<_>>()}
                </div>
                <button class="send-btn" title="Send" on:click=move |_| do_send()>
                    "➤"
                </button>
            </div>
            <Show when=move || ui.get().emoji_picker_open>
                <EmojiPicker trigger_ref=emoji_trigger_ref input=input />
            </Show>
            <div class="chatbot-input-footer">"Powered by SaleSmartly"</div>
        </div>
    }
}
