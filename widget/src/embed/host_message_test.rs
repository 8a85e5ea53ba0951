use super::*;

#[test]
fn parses_close_message() {
    assert_eq!(HostMessage::parse(r#"{"type":"CHATBOT_CLOSE"}"#), Some(HostMessage::Close));
}

#[test]
fn extra_fields_are_tolerated() {
    assert_eq!(
        HostMessage::parse(r#"{"type":"CHATBOT_MINIMIZE","source":"header"}"#),
        Some(HostMessage::Minimize)
    );
}

#[test]
fn unrelated_messages_are_ignored() {
    assert_eq!(HostMessage::parse(r#"{"type":"webpackOk"}"#), None);
    assert_eq!(HostMessage::parse(r#"{"kind":"CHATBOT_CLOSE"}"#), None);
    assert_eq!(HostMessage::parse("CHATBOT_CLOSE"), None);
    assert_eq!(HostMessage::parse(""), None);
}

#[test]
fn serializes_to_wire_shape() {
    assert_eq!(HostMessage::Error.to_json().unwrap(), r#"{"type":"CHATBOT_ERROR"}"#);
}

#[test]
fn close_and_minimize_hide_the_panel() {
    assert!(HostMessage::Close.closes_panel());
    assert!(HostMessage::Minimize.closes_panel());
    assert!(!HostMessage::Error.closes_panel());
}
