use super::*;

const TS: &str = "03-14 09:26:53";

fn ids(state: &ChatState) -> Vec<u64> {
    state.messages.iter().map(|m| m.id).collect()
}

// =============================================================
// Seed
// =============================================================

#[test]
fn default_seeds_three_bot_greetings() {
    let state = ChatState::default();
    assert_eq!(ids(&state), vec![1, 2, 3]);
    assert!(state.messages.iter().all(|m| m.sender == Sender::Bot));
    assert_eq!(state.messages[0].text(), Some(WELCOME_TEXT));
}

#[test]
fn greeting_is_not_a_quick_action() {
    let state = ChatState::default();
    assert_eq!(state.messages[0].quick_action(), None);
    assert_eq!(state.messages[1].quick_action(), Some(GUIDE_ACTION));
    assert_eq!(state.messages[2].quick_action(), Some(FAQ_ACTION));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn blank_input_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("   \n", TS), None);
    assert_eq!(state.messages.len(), 3);
}

#[test]
fn submit_appends_user_message_and_queues_one_reply() {
    let mut state = ChatState::default();
    let pending = state.submit("  hello ", TS).unwrap();

    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text(), Some("  hello "));
    assert_eq!(last.timestamp, TS);
    assert_eq!(last.quick_action(), None);

    assert_eq!(pending.delay_ms, REPLY_DELAY_MS);
    assert_eq!(pending.timestamp, TS);
    assert_eq!(state.messages.len(), 4);
}

#[test]
fn delivered_reply_becomes_bot_message() {
    let mut state = ChatState::default();
    let pending = state.submit("hi", TS).unwrap();
    let text = pending.text.clone();
    state.deliver(pending);

    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text(), Some(text.as_str()));
}

#[test]
fn ids_stay_unique_with_interleaved_replies() {
    let mut state = ChatState::default();
    let first = state.submit("one", TS).unwrap();
    let second = state.submit("two", TS).unwrap();
    state.deliver(first);
    state.deliver(second);
    assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 6, 7]);
}

// =============================================================
// Quick actions
// =============================================================

#[test]
fn quick_actions_map_to_canned_replies() {
    assert!(canned_reply(FAQ_ACTION).starts_with("Here are some common questions"));
    assert!(canned_reply(GUIDE_ACTION).starts_with("SaleSmartly user guide:"));
    assert_eq!(canned_reply("anything else"), FALLBACK_REPLY);
}

#[test]
fn quick_action_echoes_label_as_user() {
    let mut state = ChatState::default();
    let pending = state.quick_action(FAQ_ACTION, TS);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text(), Some(FAQ_ACTION));
    assert_eq!(pending.text, FAQ_REPLY);
}

// =============================================================
// Attachments and notices
// =============================================================

#[test]
fn attachment_posts_parts_message() {
    let mut state = ChatState::default();
    let part = MessagePart::Image(Attachment {
        url: Some("blob:local/1".to_owned()),
        file_name: Some("cat.png".to_owned()),
        file_size: Some(2048),
    });
    state.attach(part.clone(), TS);

    let last = state.messages.last().unwrap();
    assert_eq!(last.body, MessageBody::Parts(vec![part]));
    assert_eq!(last.text(), None);
}

#[test]
fn notice_is_immediate_bot_text() {
    let mut state = ChatState::default();
    state.notice("too big", TS);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text(), Some("too big"));
}

#[test]
fn sender_css_classes() {
    assert_eq!(Sender::Bot.as_class(), "bot");
    assert_eq!(Sender::User.as_class(), "user");
}
