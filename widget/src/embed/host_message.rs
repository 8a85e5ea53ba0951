//! Messages the chat frame posts to its parent window.
//!
//! Wire shape is `{ "type": "CHATBOT_CLOSE" }`. The host accepts either the
//! object itself or its JSON text; anything that does not parse is ignored.

#[cfg(test)]
#[path = "host_message_test.rs"]
mod host_message_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    /// Close button in the chat header.
    #[serde(rename = "CHATBOT_CLOSE")]
    Close,
    /// Minimize button; the host treats it like close.
    #[serde(rename = "CHATBOT_MINIMIZE")]
    Minimize,
    /// The frame could not start; the host shows the fallback view.
    #[serde(rename = "CHATBOT_ERROR")]
    Error,
}

impl HostMessage {
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }

    /// Whether the host should hide the panel in response.
    pub fn closes_panel(self) -> bool {
        matches!(self, Self::Close | Self::Minimize)
    }
}
