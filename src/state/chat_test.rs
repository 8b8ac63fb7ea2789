use super::*;

// =============================================================
// Default state
// =============================================================

#[test]
fn chat_state_default_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.is_empty());
    assert!(!state.loading);
    assert!(state.history().is_empty());
}

// =============================================================
// can_submit
// =============================================================

#[test]
fn can_submit_rejects_blank_text() {
    let state = ChatState::default();
    assert!(!state.can_submit(""));
    assert!(!state.can_submit("   "));
    assert!(!state.can_submit("\n\t "));
}

#[test]
fn can_submit_rejects_while_loading() {
    let mut state = ChatState::default();
    state.push_user("first".to_owned(), 1_000.0);
    assert!(state.loading);
    assert!(!state.can_submit("second"));
}

#[test]
fn can_submit_accepts_nonblank_when_idle() {
    let state = ChatState::default();
    assert!(state.can_submit("什麼是 DysonV2 的主要特色？"));
}

// =============================================================
// push_user
// =============================================================

#[test]
fn push_user_appends_verbatim_and_sets_loading() {
    let mut state = ChatState::default();
    state.push_user("  spaced input  ".to_owned(), 1_722_000_000_000.0);

    assert_eq!(state.messages.len(), 1);
    let msg = &state.messages[0];
    assert_eq!(msg.role, ChatRole::User);
    assert_eq!(msg.content, "  spaced input  ");
    assert_eq!(msg.sources, None);
    assert_eq!(msg.id, "1722000000000");
    assert!(state.loading);
}

// =============================================================
// push_reply / push_fallback
// =============================================================

#[test]
fn push_reply_appends_assistant_with_sources_and_clears_loading() {
    let mut state = ChatState::default();
    state.push_user("q".to_owned(), 1_000.0);
    state.push_reply("A".to_owned(), Some(vec!["S1".to_owned()]), 2_000.0);

    assert_eq!(state.messages.len(), 2);
    let reply = &state.messages[1];
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, "A");
    assert_eq!(reply.sources, Some(vec!["S1".to_owned()]));
    assert!(!state.loading);
}

#[test]
fn push_fallback_appends_fixed_text_without_sources() {
    let mut state = ChatState::default();
    state.push_user("q".to_owned(), 1_000.0);
    state.push_fallback(2_000.0);

    assert_eq!(state.messages.len(), 2);
    let reply = &state.messages[1];
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, FALLBACK_REPLY);
    assert_eq!(reply.sources, None);
    assert!(!state.loading);
}

#[test]
fn assistant_reply_follows_the_triggering_user_message() {
    let mut state = ChatState::default();
    state.push_user("q1".to_owned(), 1_000.0);
    state.push_reply("a1".to_owned(), None, 2_000.0);
    state.push_user("q2".to_owned(), 3_000.0);
    state.push_fallback(4_000.0);

    let roles: Vec<ChatRole> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
    );
}

// =============================================================
// history
// =============================================================

#[test]
fn history_maps_roles_and_content_in_order() {
    let mut state = ChatState::default();
    state.push_user("q".to_owned(), 1_000.0);
    state.push_reply("a".to_owned(), Some(vec!["S1".to_owned()]), 2_000.0);

    let history = state.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].content, "q");
    assert_eq!(history[1].role, ChatRole::Assistant);
    assert_eq!(history[1].content, "a");
}

#[test]
fn history_captured_before_push_excludes_current_message() {
    let mut state = ChatState::default();
    state.push_user("q1".to_owned(), 1_000.0);
    state.push_reply("a1".to_owned(), None, 2_000.0);

    // The submit path captures history first, then appends.
    let history = state.history();
    state.push_user("q2".to_owned(), 3_000.0);

    assert_eq!(history.len(), 2);
    assert_eq!(state.messages.len(), 3);
    assert!(history.iter().all(|turn| turn.content != "q2"));
}

// =============================================================
// Message IDs
// =============================================================

#[test]
fn message_id_is_timestamp_derived() {
    let msg = Message::user("x".to_owned(), 1_234.0);
    assert_eq!(msg.id, "1234");
    assert!((msg.timestamp - 1_234.0).abs() < f64::EPSILON);
}

#[test]
fn same_millisecond_reply_gets_a_bumped_id() {
    let mut state = ChatState::default();
    state.push_user("q".to_owned(), 1_000.0);
    // A synchronous failure can resolve in the same millisecond.
    state.push_fallback(1_000.0);

    assert_eq!(state.messages[0].id, "1000");
    assert_eq!(state.messages[1].id, "1001");
}

#[test]
fn message_id_clamps_invalid_clock_readings() {
    let msg = Message::user("x".to_owned(), -5.0);
    assert_eq!(msg.id, "0");
    let msg = Message::user("x".to_owned(), f64::NAN);
    assert_eq!(msg.id, "0");
}
