//! Composer input state and the pure edit-validation rules.
//!
//! Every keystroke routes through [`ComposerState::apply_edit`], so the
//! over-limit behavior is a deterministic function of the previous state, the
//! candidate input, and the configured limit. The DOM handlers in
//! `components::composer` only shuttle values between the field element and
//! these functions.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::CharLimit;

/// Legacy `keyCode` reported while an IME is processing input.
pub const IME_PROCESS_KEY_CODE: u32 = 229;

/// Transient state owned by one composer instance.
///
/// Created on mount, mutated only by input events and the submit action, and
/// dropped with the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Committed field text.
    pub text: String,
    /// Active validation warning; empty means none.
    pub warning: String,
    /// Whether the send action is currently disabled.
    pub send_disabled: bool,
}

/// Coarse lifecycle phase, derived from the state fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Empty text, nothing to send.
    Idle,
    /// Non-empty valid text, ready to send.
    Composing,
    /// Last edit exceeded the limit; send stays disabled until an edit
    /// brings the text back under it.
    Blocked,
}

impl ComposerState {
    /// State seeded with an initial value (the `default_value` prop).
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Apply a raw edit from the field.
    ///
    /// An over-limit candidate leaves the committed text untouched, raises
    /// the warning, and disables sending. Everything else commits the
    /// candidate and clears both flags.
    pub fn apply_edit(&self, candidate: &str, limit: &CharLimit) -> Self {
        match limit.max_chars {
            Some(max) if candidate.chars().count() > max => Self {
                text: self.text.clone(),
                warning: limit.warning_text(max),
                send_disabled: true,
            },
            _ => Self {
                text: candidate.to_owned(),
                warning: String::new(),
                send_disabled: false,
            },
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.warning.is_empty() {
            Phase::Blocked
        } else if self.text.is_empty() {
            Phase::Idle
        } else {
            Phase::Composing
        }
    }

    /// Whether a submit attempt may proceed.
    ///
    /// Empty text and an active warning are both silent rejections; the
    /// native validity check happens at the field element.
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty() && self.warning.is_empty() && !self.send_disabled
    }

    /// Reset after a successful submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Whether an Enter keydown should trigger a submit.
///
/// Both the standard `isComposing` flag and the legacy key code 229 mark an
/// active IME composition session; intermediate Enter presses during one must
/// not send the message.
pub fn enter_should_submit(key: &str, is_composing: bool, key_code: u32) -> bool {
    key == "Enter" && !is_composing && key_code != IME_PROCESS_KEY_CODE
}

/// Remove the character immediately before `cursor`, returning the new text
/// and cursor position.
///
/// `cursor` is a UTF-16 offset, matching the DOM's `selectionStart`, and is
/// clamped to the text length. At offset 0 this is a no-op. A character that
/// occupies two UTF-16 units moves the cursor back by two.
pub fn backspace_at(text: &str, cursor: usize) -> (String, usize) {
    let total: usize = text.chars().map(char::len_utf16).sum();
    let cursor = cursor.min(total);
    if cursor == 0 {
        return (text.to_owned(), 0);
    }

    let mut out = String::with_capacity(text.len());
    let mut removed_width = 0;
    let mut pos = 0;
    for c in text.chars() {
        let end = pos + c.len_utf16();
        if removed_width == 0 && end >= cursor {
            removed_width = c.len_utf16();
        } else {
            out.push(c);
        }
        pos = end;
    }

    (out, cursor - removed_width)
}
