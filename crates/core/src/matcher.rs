//! Input matcher - the typed buffer and its match check
//!
//! States: EMPTY and TYPING. Letters move to/keep TYPING, backspace may fall
//! back to EMPTY, and a match from either state clears back to EMPTY.

use arrayvec::ArrayVec;

use crate::field::WordField;
use crate::types::{TypingKey, WordId, MAX_TYPED_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherState {
    Empty,
    Typing,
}

#[derive(Debug, Clone, Default)]
pub struct InputMatcher {
    /// Uppercase ASCII letters in typing order.
    buffer: ArrayVec<u8, MAX_TYPED_LEN>,
}

impl InputMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatcherState {
        if self.buffer.is_empty() {
            MatcherState::Empty
        } else {
            MatcherState::Typing
        }
    }

    /// The buffer as text.
    pub fn typed(&self) -> &str {
        // Only ASCII letters are ever pushed.
        std::str::from_utf8(&self.buffer).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feed one key.
    ///
    /// Letters append (ignored once the buffer is full), backspace drops the
    /// last letter, anything else is ignored without a match check. After a
    /// letter or backspace the buffer is checked against `field`; on a hit the
    /// buffer is cleared and the matched id returned.
    pub fn on_key(&mut self, key: TypingKey, field: &mut WordField) -> Option<WordId> {
        match key {
            TypingKey::Letter(letter) if letter.is_ascii_alphabetic() => {
                let _ = self.buffer.try_push(letter.to_ascii_uppercase());
            }
            TypingKey::Backspace => {
                self.buffer.pop();
            }
            TypingKey::Letter(_) | TypingKey::Other => return None,
        }

        let matched = field.check_match(self.typed());
        if matched.is_some() {
            self.reset();
        }
        matched
    }

    /// Clear the buffer.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
