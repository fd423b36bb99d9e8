//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Field Geometry
//!
//! Words live in a logical play field, independent of the terminal size:
//!
//! - **Width**: 600 units
//! - **Height**: 200 units
//!
//! The terminal view scales this space into whatever cells are available.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_SPAWN_INTERVAL_SECS` | 3 | Seconds between spawns |
//! | `DEFAULT_WORD_DURATION_SECS` | 10 | Seconds a word drifts before expiring |
//! | `MATCH_FADE_MS` | 1000 | Cosmetic delay before a matched word disappears |
//! | `KEY_FLASH_MS` | 200 | On-screen keyboard flash on key press |
//!
//! # Examples
//!
//! ```
//! use key_shooter_types::{Position, TypingKey, WordId};
//!
//! assert_eq!(TypingKey::from_char('q'), TypingKey::Letter(b'Q'));
//! assert_eq!(TypingKey::from_char('7'), TypingKey::Other);
//!
//! let a = WordId::new(1);
//! let b = a.next();
//! assert!(a < b);
//!
//! let p = Position::new(10.0, 20.0).lerp(Position::new(30.0, 40.0), 0.5);
//! assert_eq!(p, Position::new(20.0, 30.0));
//! ```

/// Logical play field width.
pub const FIELD_WIDTH: f32 = 600.0;

/// Logical play field height.
pub const FIELD_HEIGHT: f32 = 200.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default spawn interval in seconds.
pub const DEFAULT_SPAWN_INTERVAL_SECS: u32 = 3;

/// Default word duration in seconds.
pub const DEFAULT_WORD_DURATION_SECS: u32 = 10;

/// Upper bound accepted for either runtime control, in seconds.
pub const MAX_CONTROL_SECS: u32 = 3600;

/// How long a matched word stays on screen (frozen, green) before it is gone.
pub const MATCH_FADE_MS: u32 = 1000;

/// Duration of the on-screen keyboard flash.
pub const KEY_FLASH_MS: u32 = 200;

/// Maximum number of letters held in the typed buffer.
pub const MAX_TYPED_LEN: usize = 32;

/// Horizontal start offsets a word can spawn at, as distances from the left edge.
///
/// Offsets greater than [`SPAWN_X_CLAMP_ABOVE`] are pulled back to
/// [`SPAWN_X_CLAMPED`], which keeps right-edge words readable.
pub const SPAWN_X_LEFT_OFFSETS: [f32; 4] = [15.0, 25.0, 35.0, 45.0];

/// Right-edge start offsets, as distances in from the right edge.
pub const SPAWN_X_RIGHT_INSETS: [f32; 4] = [60.0, 75.0, 80.0, 90.0];

pub const SPAWN_X_CLAMP_ABOVE: f32 = 500.0;
pub const SPAWN_X_CLAMPED: f32 = 400.0;

/// Start rows below this are pushed down to [`SPAWN_Y_TOP_CLAMPED`].
pub const SPAWN_Y_MIN: f32 = 20.0;
pub const SPAWN_Y_TOP_CLAMPED: f32 = 60.0;

/// Start rows above this are pulled up to [`SPAWN_Y_BOTTOM_CLAMPED`].
pub const SPAWN_Y_MAX: f32 = 200.0;
pub const SPAWN_Y_BOTTOM_CLAMPED: f32 = 100.0;

/// Fraction of the start coordinate used to bias the target away from the midpoint.
pub const TARGET_BIAS: f32 = 0.25;

/// Opaque identity of one spawned word.
///
/// Ids are handed out in increasing order, so ordering by id is spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u64);

impl WordId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point in the logical play field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Position, t: f32) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// A key as seen by the typing engine.
///
/// Only letters and backspace affect the typed buffer. Everything else
/// (arrows, function keys, digits, punctuation) maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingKey {
    /// An ASCII letter, already uppercased.
    Letter(u8),
    Backspace,
    Other,
}

impl TypingKey {
    /// Classify a character key.
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            TypingKey::Letter(c.to_ascii_uppercase() as u8)
        } else {
            TypingKey::Other
        }
    }
}

/// Why a word left the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    Matched,
    Expired,
}

impl RemovalReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalReason::Matched => "matched",
            RemovalReason::Expired => "expired",
        }
    }
}

/// Presentation events emitted by the word field.
///
/// `Matched` fires at the moment of the match; the matching `Removed` follows
/// once the cosmetic fade is over. Expired words get a single `Removed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEvent {
    Spawned { id: WordId, position: Position },
    Moved { id: WordId, position: Position },
    Matched { id: WordId },
    Removed { id: WordId, reason: RemovalReason },
}
