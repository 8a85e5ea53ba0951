//! Chat frame UI components.
//!
//! Components read shared state from context (`RwSignal<ChatState>`,
//! `RwSignal<UiState>`, `RwSignal<EmojiState>`, [`crate::app::ReplyQueue`])
//! provided by [`crate::app::ChatBot`].

pub mod chat_header;
pub mod chat_input;
pub mod emoji_picker;
pub mod help_panel;
pub mod message_item;
pub mod message_list;
