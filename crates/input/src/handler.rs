//! Focus-aware input router.
//!
//! The screen has three input targets: the word field (typing) and the two
//! control prompts. Tab cycles between them; inside a prompt keys edit its
//! text and Enter applies it.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent};

use crate::map::{should_quit, typing_key};
use crate::types::{TypingKey, DEFAULT_SPAWN_INTERVAL_SECS, DEFAULT_WORD_DURATION_SECS};

/// Longest text a control prompt holds.
pub const PROMPT_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    SpawnInterval,
    WordDuration,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Field => Focus::SpawnInterval,
            Focus::SpawnInterval => Focus::WordDuration,
            Focus::WordDuration => Focus::Field,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field => Focus::WordDuration,
            Focus::SpawnInterval => Focus::Field,
            Focus::WordDuration => Focus::SpawnInterval,
        }
    }
}

/// What the game loop should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Type(TypingKey),
    ApplySpawnInterval(String),
    ApplyWordDuration(String),
    Stop,
    Quit,
}

#[derive(Debug, Clone, Default)]
struct Prompt {
    text: ArrayVec<char, PROMPT_CAPACITY>,
}

impl Prompt {
    fn with_value(value: u32) -> Self {
        let mut p = Self::default();
        p.set(&value.to_string());
        p
    }

    fn set(&mut self, text: &str) {
        self.text.clear();
        for c in text.chars() {
            if self.text.try_push(c).is_err() {
                break;
            }
        }
    }

    fn as_string(&self) -> String {
        self.text.iter().collect()
    }
}

#[derive(Debug, Clone)]
pub struct InputRouter {
    focus: Focus,
    spawn_interval: Prompt,
    word_duration: Prompt,
    stopped: bool,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::with_values(DEFAULT_SPAWN_INTERVAL_SECS, DEFAULT_WORD_DURATION_SECS)
    }

    /// Router whose prompts start out showing the given values.
    pub fn with_values(spawn_interval_secs: u32, word_duration_secs: u32) -> Self {
        Self {
            focus: Focus::Field,
            spawn_interval: Prompt::with_value(spawn_interval_secs),
            word_duration: Prompt::with_value(word_duration_secs),
            stopped: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    pub fn spawn_interval_text(&self) -> String {
        self.spawn_interval.as_string()
    }

    pub fn word_duration_text(&self) -> String {
        self.word_duration.as_string()
    }

    /// Overwrite a prompt's text, e.g. to show the value actually in force
    /// after an apply.
    pub fn set_prompt_text(&mut self, focus: Focus, text: &str) {
        match focus {
            Focus::SpawnInterval => self.spawn_interval.set(text),
            Focus::WordDuration => self.word_duration.set(text),
            Focus::Field => {}
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<UiAction> {
        if should_quit(key) {
            return Some(UiAction::Quit);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        let prompt = match self.focus {
            Focus::Field => return self.handle_field_key(key),
            Focus::SpawnInterval => &mut self.spawn_interval,
            Focus::WordDuration => &mut self.word_duration,
        };

        match key.code {
            KeyCode::Char(c) => {
                let _ = prompt.text.try_push(c);
                None
            }
            KeyCode::Backspace => {
                prompt.text.pop();
                None
            }
            KeyCode::Enter => {
                let text = prompt.as_string();
                Some(match self.focus {
                    Focus::SpawnInterval => UiAction::ApplySpawnInterval(text),
                    _ => UiAction::ApplyWordDuration(text),
                })
            }
            KeyCode::Esc => {
                self.focus = Focus::Field;
                None
            }
            _ => None,
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        if key.code == KeyCode::Esc {
            if self.stopped {
                return Some(UiAction::Quit);
            }
            self.stopped = true;
            return Some(UiAction::Stop);
        }
        Some(UiAction::Type(typing_key(key)))
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(r: &mut InputRouter, code: KeyCode) -> Option<UiAction> {
        r.handle_key_press(KeyEvent::from(code))
    }

    #[test]
    fn test_field_keys_type() {
        let mut r = InputRouter::new();
        assert_eq!(
            press(&mut r, KeyCode::Char('x')),
            Some(UiAction::Type(TypingKey::Letter(b'X')))
        );
        assert_eq!(
            press(&mut r, KeyCode::Backspace),
            Some(UiAction::Type(TypingKey::Backspace))
        );
        assert_eq!(
            press(&mut r, KeyCode::Left),
            Some(UiAction::Type(TypingKey::Other))
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut r = InputRouter::new();
        assert_eq!(r.focus(), Focus::Field);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.focus(), Focus::SpawnInterval);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.focus(), Focus::WordDuration);
        press(&mut r, KeyCode::Tab);
        assert_eq!(r.focus(), Focus::Field);
        press(&mut r, KeyCode::BackTab);
        assert_eq!(r.focus(), Focus::WordDuration);
    }

    #[test]
    fn test_prompt_edit_and_apply() {
        let mut r = InputRouter::new();
        assert_eq!(r.spawn_interval_text(), "3");

        press(&mut r, KeyCode::Tab);
        assert_eq!(press(&mut r, KeyCode::Backspace), None);
        assert_eq!(press(&mut r, KeyCode::Char('5')), None);
        assert_eq!(
            press(&mut r, KeyCode::Enter),
            Some(UiAction::ApplySpawnInterval("5".to_string()))
        );

        press(&mut r, KeyCode::Tab);
        for c in "abc".chars() {
            press(&mut r, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut r, KeyCode::Enter),
            Some(UiAction::ApplyWordDuration("10abc".to_string()))
        );
    }

    #[test]
    fn test_prompt_letters_do_not_type() {
        let mut r = InputRouter::new();
        press(&mut r, KeyCode::Tab);
        assert_eq!(press(&mut r, KeyCode::Char('a')), None);
        assert_eq!(r.spawn_interval_text(), "3a");
    }

    #[test]
    fn test_esc_leaves_prompt_then_stops_then_quits() {
        let mut r = InputRouter::new();
        press(&mut r, KeyCode::Tab);
        assert_eq!(press(&mut r, KeyCode::Esc), None);
        assert_eq!(r.focus(), Focus::Field);

        assert_eq!(press(&mut r, KeyCode::Esc), Some(UiAction::Stop));
        assert!(r.stopped());
        assert_eq!(press(&mut r, KeyCode::Esc), Some(UiAction::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut r = InputRouter::new();
        press(&mut r, KeyCode::Tab);
        assert_eq!(
            r.handle_key_press(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiAction::Quit)
        );
    }

    #[test]
    fn test_prompt_is_bounded_and_resettable() {
        let mut r = InputRouter::new();
        press(&mut r, KeyCode::Tab);
        for _ in 0..20 {
            press(&mut r, KeyCode::Char('9'));
        }
        assert_eq!(r.spawn_interval_text().chars().count(), PROMPT_CAPACITY);

        r.set_prompt_text(Focus::SpawnInterval, "3");
        assert_eq!(r.spawn_interval_text(), "3");
    }
}
