//! Conversation history and the mocked bot reply loop.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Delay before a mocked bot reply is delivered.
pub const REPLY_DELAY_MS: u64 = 1000;

pub const WELCOME_TEXT: &str = "Welcome to SaleSmartly";
pub const GUIDE_ACTION: &str = "SaleSmartly user guide";
pub const FAQ_ACTION: &str = "Common questions";

const GUIDE_REPLY: &str =
    "SaleSmartly user guide:\n1. Click to start chatting\n2. Type your question\n3. Our team will reply shortly";
const FAQ_REPLY: &str = "Here are some common questions:\n1. How do I register an account?\n2. How do I contact support?\n3. Which payment methods are supported?";
const FALLBACK_REPLY: &str = "Thanks for reaching out. How can we help you?";
const RECEIVED_REPLY: &str = "Thanks for your message! We will get back to you soon.";

/// Timestamp shown on the seeded greeting messages.
const SEED_TIMESTAMP: &str = "11-10 16:27:52";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    /// CSS modifier class.
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::User => "user",
        }
    }
}

/// A file-backed part of a message. `url` is a local object URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attachment {
    pub url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagePart {
    Text(String),
    Image(Attachment),
    Video(Attachment),
    File(Attachment),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Parts(Vec<MessagePart>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub body: MessageBody,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text(text) => Some(text),
            MessageBody::Parts(_) => None,
        }
    }

    /// Bot text messages (other than the greeting) double as quick actions.
    pub fn quick_action(&self) -> Option<&str> {
        if self.sender != Sender::Bot {
            return None;
        }
        self.text().filter(|text| *text != WELCOME_TEXT)
    }
}

/// A bot reply waiting for its delay to elapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub timestamp: String,
    pub delay_ms: u64,
}

/// Message history for one chat frame.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self { messages: Vec::new(), next_id: 1 };
        for text in [WELCOME_TEXT, GUIDE_ACTION, FAQ_ACTION] {
            state.push(Sender::Bot, MessageBody::Text(text.to_owned()), SEED_TIMESTAMP.to_owned());
        }
        state
    }
}

impl ChatState {
    /// Send the input box contents. Blank input is ignored.
    pub fn submit(&mut self, input: &str, timestamp: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, MessageBody::Text(input.to_owned()), timestamp.to_owned());
        Some(reply(RECEIVED_REPLY, timestamp))
    }

    /// Echo a quick-action label as the user's message and queue its answer.
    pub fn quick_action(&mut self, action: &str, timestamp: &str) -> PendingReply {
        self.push(Sender::User, MessageBody::Text(action.to_owned()), timestamp.to_owned());
        reply(canned_reply(action), timestamp)
    }

    /// Post a validated attachment as a user message.
    pub fn attach(&mut self, part: MessagePart, timestamp: &str) -> PendingReply {
        self.push(Sender::User, MessageBody::Parts(vec![part]), timestamp.to_owned());
        reply(RECEIVED_REPLY, timestamp)
    }

    /// Post a bot-side notice immediately (for example a rejected upload).
    pub fn notice(&mut self, text: &str, timestamp: &str) {
        self.push(Sender::Bot, MessageBody::Text(text.to_owned()), timestamp.to_owned());
    }

    /// Append a reply whose delay has elapsed.
    pub fn deliver(&mut self, pending: PendingReply) {
        self.push(Sender::Bot, MessageBody::Text(pending.text), pending.timestamp);
    }

    fn push(&mut self, sender: Sender, body: MessageBody, timestamp: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, sender, body, timestamp });
    }
}

/// Canned answer for a quick-action label.
pub fn canned_reply(action: &str) -> &'static str {
    match action {
        FAQ_ACTION => FAQ_REPLY,
        GUIDE_ACTION => GUIDE_REPLY,
        _ => FALLBACK_REPLY,
    }
}

fn reply(text: &str, timestamp: &str) -> PendingReply {
    PendingReply { text: text.to_owned(), timestamp: timestamp.to_owned(), delay_ms: REPLY_DELAY_MS }
}
