use super::*;
use crate::config::CharLimit;

fn limit(max: usize) -> CharLimit {
    CharLimit {
        max_chars: Some(max),
        warning_message: None,
    }
}

// =============================================================
// apply_edit: within limit
// =============================================================

#[test]
fn edit_without_limit_always_commits() {
    let state = ComposerState::default();
    let next = state.apply_edit("anything goes, at any length", &CharLimit::unlimited());
    assert_eq!(next.text, "anything goes, at any length");
    assert!(next.warning.is_empty());
    assert!(!next.send_disabled);
}

#[test]
fn edit_within_limit_commits_and_clears() {
    let state = ComposerState::default();
    let next = state.apply_edit("hello", &limit(5));
    assert_eq!(next.text, "hello");
    assert!(next.warning.is_empty());
    assert!(!next.send_disabled);
}

#[test]
fn edit_at_exact_limit_commits() {
    let state = ComposerState::default();
    let next = state.apply_edit("12345", &limit(5));
    assert_eq!(next.text, "12345");
    assert!(next.warning.is_empty());
}

#[test]
fn limit_counts_characters_not_bytes() {
    // Five characters, far more than five bytes.
    let state = ComposerState::default();
    let next = state.apply_edit("héllö", &limit(5));
    assert_eq!(next.text, "héllö");
    assert!(next.warning.is_empty());
}

// =============================================================
// apply_edit: over limit
// =============================================================

#[test]
fn over_limit_edit_keeps_previous_text_and_warns() {
    let state = ComposerState::with_text("hello");
    let next = state.apply_edit("hello!", &limit(5));
    assert_eq!(next.text, "hello");
    assert!(!next.warning.is_empty());
    assert!(next.send_disabled);
}

#[test]
fn over_limit_warning_uses_host_override() {
    let state = ComposerState::default();
    let custom = CharLimit {
        max_chars: Some(3),
        warning_message: Some("Keep it short".to_owned()),
    };
    let next = state.apply_edit("toolong", &custom);
    assert_eq!(next.warning, "Keep it short");
}

#[test]
fn over_limit_default_warning_mentions_the_limit() {
    let state = ComposerState::default();
    let next = state.apply_edit("toolong", &limit(3));
    assert!(next.warning.contains('3'));
}

#[test]
fn blocked_state_recovers_once_edit_fits_again() {
    let state = ComposerState::with_text("hello");
    let blocked = state.apply_edit("hello!", &limit(5));
    assert_eq!(blocked.phase(), Phase::Blocked);

    let recovered = blocked.apply_edit("hell", &limit(5));
    assert_eq!(recovered.text, "hell");
    assert!(recovered.warning.is_empty());
    assert!(!recovered.send_disabled);
    assert_eq!(recovered.phase(), Phase::Composing);
}

// =============================================================
// Phase
// =============================================================

#[test]
fn phase_idle_on_empty_text() {
    assert_eq!(ComposerState::default().phase(), Phase::Idle);
}

#[test]
fn phase_composing_on_valid_text() {
    assert_eq!(ComposerState::with_text("hi").phase(), Phase::Composing);
}

#[test]
fn phase_blocked_while_warning_active() {
    let blocked = ComposerState::with_text("hello").apply_edit("hello!", &limit(5));
    assert_eq!(blocked.phase(), Phase::Blocked);
}

// =============================================================
// can_submit
// =============================================================

#[test]
fn cannot_submit_empty_text() {
    assert!(!ComposerState::default().can_submit());
}

#[test]
fn cannot_submit_while_blocked() {
    let blocked = ComposerState::with_text("hello").apply_edit("hello!", &limit(5));
    assert!(!blocked.can_submit());
}

#[test]
fn can_submit_valid_text() {
    assert!(ComposerState::with_text("hi").can_submit());
}

#[test]
fn clear_resets_to_default() {
    let mut state = ComposerState::with_text("hi");
    state.clear();
    assert_eq!(state, ComposerState::default());
}

// =============================================================
// Enter / IME handling
// =============================================================

#[test]
fn enter_submits_outside_composition() {
    assert!(enter_should_submit("Enter", false, 13));
}

#[test]
fn enter_ignored_while_composing_flag_set() {
    assert!(!enter_should_submit("Enter", true, 13));
}

#[test]
fn enter_ignored_on_legacy_ime_key_code() {
    assert!(!enter_should_submit("Enter", false, IME_PROCESS_KEY_CODE));
}

#[test]
fn other_keys_never_submit() {
    assert!(!enter_should_submit("a", false, 65));
    assert!(!enter_should_submit("Backspace", false, 8));
}

// =============================================================
// backspace_at
// =============================================================

#[test]
fn backspace_removes_char_before_cursor() {
    let (text, cursor) = backspace_at("hello", 3);
    assert_eq!(text, "helo");
    assert_eq!(cursor, 2);
}

#[test]
fn backspace_at_end_removes_last_char() {
    let (text, cursor) = backspace_at("hello", 5);
    assert_eq!(text, "hell");
    assert_eq!(cursor, 4);
}

#[test]
fn backspace_at_start_is_noop() {
    let (text, cursor) = backspace_at("hello", 0);
    assert_eq!(text, "hello");
    assert_eq!(cursor, 0);
}

#[test]
fn backspace_on_empty_text_is_noop() {
    let (text, cursor) = backspace_at("", 0);
    assert_eq!(text, "");
    assert_eq!(cursor, 0);
}

#[test]
fn backspace_clamps_cursor_past_end() {
    let (text, cursor) = backspace_at("hi", 10);
    assert_eq!(text, "h");
    assert_eq!(cursor, 1);
}

#[test]
fn backspace_removes_whole_surrogate_pair() {
    // "😀" occupies two UTF-16 units, so the DOM cursor after it sits at 3.
    let (text, cursor) = backspace_at("a😀b", 3);
    assert_eq!(text, "ab");
    assert_eq!(cursor, 1);
}

#[test]
fn backspace_before_surrogate_pair_removes_preceding_char() {
    let (text, cursor) = backspace_at("a😀b", 1);
    assert_eq!(text, "😀b");
    assert_eq!(cursor, 0);
}
