//! Chat header: tabs, bot identity, minimize and close.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header runs inside the iframe but the panel it hides belongs to the
//! host page, so minimize and close are posted to the parent window.

use leptos::prelude::*;

use crate::embed::host_message::HostMessage;
use crate::state::ui::{ChatTab, UiState};

pub const BOT_NAME: &str = "SaleSmartly";
pub const SERVICE_HOURS: &str = "Live support hours: 10:00-23:00 UTC(+8)";

fn notify_host(message: HostMessage) {
    #[cfg(feature = "csr")]
    crate::host::frame::post_to_host(message);
    #[cfg(not(feature = "csr"))]
    let _ = message;
}

#[component]
pub fn ChatHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="chatbot-header">
            <div class="header-top">
                <div class="header-tabs">
                    {ChatTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tab"
                                    class:active=move || ui.get().active_tab == tab
                                    on:click=move |_| ui.update(|u| u.select_tab(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="header-actions">
                    <button
                        class="minimize-btn"
                        title="Minimize"
                        on:click=move |_| notify_host(HostMessage::Minimize)
                    >
                        "−"
                    </button>
                    <button class="close-btn" title="Close" on:click=move |_| notify_host(HostMessage::Close)>
                        "×"
                    </button>
                </div>
            </div>
            <div class="header-info">
                <div class="bot-avatar">"🤖"</div>
                <div class="bot-info">
                    <h3>{BOT_NAME}</h3>
                    <p class="service-time">{SERVICE_HOURS}</p>
                </div>
            </div>
        </div>
    }
}
