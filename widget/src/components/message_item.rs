//! One chat message: avatar, bubble (text or rich parts), quick action,
//! timestamp.

use leptos::prelude::*;

use crate::app::ReplyQueue;
use crate::state::chat::{Attachment, ChatMessage, ChatState, MessageBody, MessagePart, Sender};
use crate::util::file_size::format_file_size;
use crate::util::timestamp::now_label;

#[cfg(test)]
#[path = "message_item_test.rs"]
mod message_item_test;

/// `name (size)` line shown under images and videos.
fn media_caption(attachment: &Attachment) -> Option<String> {
    let name = attachment.file_name.as_deref()?;
    Some(match attachment.file_size {
        Some(size) => format!("{name} ({})", format_file_size(size)),
        None => name.to_owned(),
    })
}

fn file_name_or_default(attachment: &Attachment) -> String {
    attachment.file_name.clone().unwrap_or_else(|| "File".to_owned())
}

fn render_part(part: MessagePart) -> AnyView {
    match part {
        MessagePart::Text(text) => view! { <div class="message-text">{text}</div> }.into_any(),
        MessagePart::Image(a) => {
            let caption = media_caption(&a);
            let alt = a.file_name.clone().unwrap_or_else(|| "Image".to_owned());
            view! {
                <div class="message-media message-image">
                    <img src=a.url alt=alt />
                    {caption.map(|c| view! { <div class="message-media-info">{c}</div> })}
                </div>
            }
            .into_any()
        }
        MessagePart::Video(a) => {
            let caption = media_caption(&a);
            view! {
                <div class="message-media message-video">
                    <video controls=true src=a.url></video>
                    {caption.map(|c| view! { <div class="message-media-info">{c}</div> })}
                </div>
            }
            .into_any()
        }
        MessagePart::File(a) => {
            let name = file_name_or_default(&a);
            let size = a.file_size.map(format_file_size);
            let download = a.url.clone().map(|url| {
                view! {
                    <a href=url download=name.clone() class="message-file-download" title="Download file">
                        "⬇"
                    </a>
                }
            });
            view! {
                <div class="message-file">
                    <div class="message-file-icon">"📄"</div>
                    <div class="message-file-info">
                        <div class="message-file-name">{name.clone()}</div>
                        {size.map(|s| view! { <div class="message-file-size">{s}</div> })}
                    </div>
                    {download}
                </div>
            }
            .into_any()
        }
    }
}

fn render_body(body: MessageBody) -> AnyView {
    match body {
        MessageBody::Text(text) => view! { <div class="message-text">{text}</div> }.into_any(),
        MessageBody::Parts(parts) => view! {
            <div class="message-content-list">{parts.into_iter().map(render_part).collect::<Vec<_>>()}</div>
        }
        .into_any(),
    }
}

#[component]
pub fn MessageItem(message: ChatMessage) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let replies = expect_context::<ReplyQueue>();

    let quick_action = message.quick_action().map(str::to_owned);
    let is_bot = message.sender == Sender::Bot;

    view! {
        <div class=format!("message {}", message.sender.as_class())>
            {is_bot.then(|| view! { <div class="message-avatar">"🤖"</div> })}
            <div class="message-content">
                <div class="message-bubble">{render_body(message.body)}</div>
                {quick_action
                    .map(|action| {
                        let label = action.clone();
                        view! {
                            <button
                                class="quick-action-btn"
                                on:click=move |_| {
                                    if let Some(pending) = chat.try_update(|c| c.quick_action(&action, &now_label())) {
                                        replies.schedule(pending);
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })}
                <div class="message-timestamp">{message.timestamp}</div>
            </div>
        </div>
    }
}
