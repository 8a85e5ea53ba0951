//! Scrolling message history.

use leptos::prelude::*;

use crate::components::message_item::MessageItem;
use crate::state::chat::ChatState;

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chatbot-messages" node_ref=list_ref>
            <For
                each=move || chat.get().messages
                key=|message| message.id
                children=move |message| view! { <MessageItem message=message /> }
            />
        </div>
    }
}
