//! Root chat component and the shared reply queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatBot` is mounted into the frame document's `#chatbot-root`. It owns
//! every piece of chat state for the lifetime of the frame and provides it
//! to the component tree through context.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::chat_input::ChatInput;
use crate::components::help_panel::HelpPanel;
use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::state::chat::{ChatState, PendingReply};
use crate::state::emoji::EmojiState;
use crate::state::ui::{ChatTab, UiState};

#[cfg(feature = "csr")]
use crate::util::timer_set::TimerSet;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Delivers mocked bot replies after their delay.
///
/// Timers are cleared by [`ReplyQueue::cancel_all`], which the root component
/// registers as a cleanup so no reply lands after the tree is gone.
#[derive(Clone, Copy)]
pub struct ReplyQueue {
    chat: RwSignal<ChatState>,
    #[cfg(feature = "csr")]
    timers: StoredValue<TimerSet<Timeout>, LocalStorage>,
}

impl ReplyQueue {
    pub fn new(chat: RwSignal<ChatState>) -> Self {
        Self {
            chat,
            #[cfg(feature = "csr")]
            timers: StoredValue::new_local(TimerSet::default()),
        }
    }

    #[cfg(feature = "csr")]
    pub fn schedule(self, pending: PendingReply) {
        let chat = self.chat;
        let timers = self.timers;
        let delay = u32::try_from(pending.delay_ms).unwrap_or(u32::MAX);
        timers.try_update_value(|set| {
            set.insert_with(|id| {
                Timeout::new(delay, move || {
                    chat.try_update(|c| c.deliver(pending));
                    // The spent handle drops here; the running closure is freed after it returns.
                    timers.try_update_value(|set| set.finish(id));
                })
            })
        });
    }

    /// Without a browser event loop the reply is delivered immediately.
    #[cfg(not(feature = "csr"))]
    pub fn schedule(self, pending: PendingReply) {
        self.chat.try_update(|c| c.deliver(pending));
    }

    pub fn cancel_all(self) {
        // Dropping a pending `Timeout` clears it.
        #[cfg(feature = "csr")]
        self.timers.try_update_value(TimerSet::clear);
    }
}

/// Root of the chat frame.
#[component]
pub fn ChatBot(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());
    let emoji = RwSignal::new(EmojiState::default());
    let replies = ReplyQueue::new(chat);

    provide_context(config);
    provide_context(chat);
    provide_context(ui);
    provide_context(emoji);
    provide_context(replies);

    on_cleanup(move || replies.cancel_all());

    view! {
        <div class="chatbot-container">
            <ChatHeader />
            {move || match ui.get().active_tab {
                ChatTab::Message => view! { <MessageList /> }.into_any(),
                ChatTab::Help => view! { <HelpPanel /> }.into_any(),
            }}
            <ChatInput />
        </div>
    }
}
