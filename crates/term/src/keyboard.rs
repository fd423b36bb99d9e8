//! On-screen keyboard: three QWERTY letter rows whose keys light up briefly
//! when pressed.

use crate::types::KEY_FLASH_MS;

pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, Default)]
pub struct KeyboardFlash {
    /// Remaining flash time per letter, indexed A..Z.
    remaining_ms: [u32; 26],
}

impl KeyboardFlash {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| (letter.to_ascii_uppercase() - b'A') as usize)
    }

    /// Light up `letter`; non-letters are ignored.
    pub fn press(&mut self, letter: u8) {
        if let Some(i) = Self::slot(letter) {
            self.remaining_ms[i] = KEY_FLASH_MS;
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        for r in self.remaining_ms.iter_mut() {
            *r = r.saturating_sub(elapsed_ms);
        }
    }

    pub fn is_lit(&self, letter: u8) -> bool {
        Self::slot(letter).is_some_and(|i| self.remaining_ms[i] > 0)
    }
}
