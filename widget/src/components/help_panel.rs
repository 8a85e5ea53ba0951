//! Help tab: the quick actions as a short menu.

use leptos::prelude::*;

use crate::app::ReplyQueue;
use crate::state::chat::{ChatState, FAQ_ACTION, GUIDE_ACTION};
use crate::state::ui::{ChatTab, UiState};
use crate::util::timestamp::now_label;

#[component]
pub fn HelpPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let replies = expect_context::<ReplyQueue>();

    // Asking from the help tab continues the conversation on the message tab.
    let ask = move |action: &'static str| {
        ui.update(|u| u.select_tab(ChatTab::Message));
        if let Some(pending) = chat.try_update(|c| c.quick_action(action, &now_label())) {
            replies.schedule(pending);
        }
    };

    view! {
        <div class="chatbot-help">
            <p class="help-intro">"How can we help?"</p>
            {[GUIDE_ACTION, FAQ_ACTION]
                .into_iter()
                .map(|action| {
                    view! {
                        <button class="quick-action-btn help-item" on:click=move |_| ask(action)>
                            {action}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
