use super::*;

#[test]
fn catalog_has_recent_then_seven_static_categories() {
    assert_eq!(CATALOG.len(), 8);
    assert_eq!(CATALOG[RECENT_INDEX].name, "Recent");
    assert!(CATALOG[RECENT_INDEX].emojis.is_empty());
    assert_eq!(CATALOG[DEFAULT_INDEX].name, "Default");
    assert!(CATALOG[1..].iter().all(|c| !c.emojis.is_empty()));
}

#[test]
fn starts_on_default_tab() {
    let state = EmojiState::default();
    assert_eq!(state.active(), DEFAULT_INDEX);
    assert_eq!(state.current_entries()[0], "😀");
}

// =============================================================
// Category selection
// =============================================================

#[test]
fn empty_recent_is_disabled_and_falls_back() {
    let mut state = EmojiState::default();
    assert!(state.is_disabled(RECENT_INDEX));
    state.select_category(3);
    state.select_category(RECENT_INDEX);
    assert_eq!(state.active(), DEFAULT_INDEX);
}

#[test]
fn out_of_range_falls_back_to_default() {
    let mut state = EmojiState::default();
    state.select_category(2);
    state.select_category(99);
    assert_eq!(state.active(), DEFAULT_INDEX);
    assert!(state.entries(99).is_empty());
}

#[test]
fn static_categories_are_selectable() {
    let mut state = EmojiState::default();
    state.select_category(7);
    assert_eq!(state.active(), 7);
    assert!(!state.is_disabled(7));
    assert_eq!(state.current_entries()[0], "❤️");
}

#[test]
fn recent_becomes_selectable_once_used() {
    let mut state = EmojiState::default();
    state.record("👍");
    assert!(!state.is_disabled(RECENT_INDEX));
    state.select_category(RECENT_INDEX);
    assert_eq!(state.active(), RECENT_INDEX);
    assert_eq!(state.current_entries(), vec!["👍"]);
}

// =============================================================
// Recent list
// =============================================================

#[test]
fn record_moves_existing_entry_to_front() {
    let mut state = EmojiState::default();
    state.record("a");
    state.record("b");
    state.record("a");
    assert_eq!(state.recent(), ["a".to_owned(), "b".to_owned()]);
}

#[test]
fn record_is_capped() {
    let mut state = EmojiState::default();
    for emoji in CATALOG[DEFAULT_INDEX].emojis.iter().take(RECENT_CAPACITY + 5) {
        state.record(emoji);
    }
    assert_eq!(state.recent().len(), RECENT_CAPACITY);
    assert_eq!(state.recent()[0], CATALOG[DEFAULT_INDEX].emojis[RECENT_CAPACITY + 4]);
}
