use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn widget_state_default_closed_and_empty() {
    let state = WidgetState::default();
    assert!(!state.is_open);
    assert!(!state.is_loading);
    assert!(state.messages.is_empty());
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn first_open_seeds_exactly_one_welcome_message() {
    let mut state = WidgetState::default();
    state.toggle_open("Hi 👋, how can we help?");

    assert!(state.is_open);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, MessageAuthor::Bot);
    assert_eq!(state.messages[0].content, "Hi 👋, how can we help?");
}

#[test]
fn reopening_does_not_duplicate_welcome() {
    let mut state = WidgetState::default();
    state.toggle_open("welcome");
    state.toggle_open("welcome");
    assert!(!state.is_open);
    state.toggle_open("welcome");

    assert!(state.is_open);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn close_forces_panel_shut() {
    let mut state = WidgetState::default();
    state.toggle_open("welcome");
    state.close();
    assert!(!state.is_open);
    // Conversation survives a close.
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// begin_send guards
// =============================================================

#[test]
fn begin_send_rejects_empty_and_whitespace() {
    let mut state = WidgetState::default();
    assert!(state.begin_send("").is_none());
    assert!(state.begin_send("   \n\t ").is_none());
    assert!(state.messages.is_empty());
    assert!(!state.is_loading);
}

#[test]
fn begin_send_trims_and_appends_user_message() {
    let mut state = WidgetState::default();
    let sent = state.begin_send("  Hi  ").expect("send accepted");

    assert_eq!(sent, "Hi");
    assert!(state.is_loading);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, MessageAuthor::User);
    assert_eq!(state.messages[0].content, "Hi");
}

#[test]
fn begin_send_refuses_while_loading() {
    let mut state = WidgetState::default();
    state.begin_send("first").expect("send accepted");
    assert!(state.begin_send("second").is_none());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn successful_send_appends_bot_reply() {
    let mut state = WidgetState::default();
    state.begin_send("Hi").expect("send accepted");
    state.finish_send(Ok("Hello!".to_owned()));

    assert!(!state.is_loading);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].author, MessageAuthor::User);
    assert_eq!(state.messages[0].content, "Hi");
    assert_eq!(state.messages[1].author, MessageAuthor::Bot);
    assert_eq!(state.messages[1].content, "Hello!");
}

#[test]
fn failed_send_appends_single_fallback_message() {
    let mut state = WidgetState::default();
    state.begin_send("Hi").expect("send accepted");
    state.finish_send(Err(SendError::Network("connection refused".to_owned())));

    assert!(!state.is_loading);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].author, MessageAuthor::Bot);
    assert_eq!(state.messages[1].content, FALLBACK_REPLY);
}

#[test]
fn malformed_reply_also_maps_to_fallback() {
    let mut state = WidgetState::default();
    state.begin_send("Hi").expect("send accepted");
    state.finish_send(Err(SendError::MalformedReply));

    assert_eq!(state.messages[1].content, FALLBACK_REPLY);
    assert!(!state.is_loading);
}
