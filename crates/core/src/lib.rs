//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the word lifecycle and input-matching engine. It has
//! **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and the same tick/key sequence produce the same game
//! - **Testable**: Every timer is driven by explicit elapsed time, never the wall clock
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: Word list loading and uniform random picks
//! - [`motion`]: Per-word linear drift towards a biased target, with completion
//! - [`spawn`]: Periodic spawn timer, reconfigurable at runtime
//! - [`field`]: Active words, score, expiry and match rules
//! - [`matcher`]: Typed buffer and the EMPTY/TYPING state machine
//! - [`controls`]: Runtime spawn interval / word duration with validation
//! - [`session`]: Start/stop lifecycle, seconds counter and the WPM summary
//!
//! # Game Rules
//!
//! - A word spawns every spawn interval (3s by default) at one of a fixed set of
//!   edge offsets, then drifts towards the middle for the word duration (10s by
//!   default) and expires when it arrives.
//! - Typing a word's exact text (case-insensitive) scores one point, removes it
//!   from play immediately and clears the typed buffer.
//! - When two words share the same text the older one is matched first.
//!
//! # Example
//!
//! ```
//! use key_shooter_core::{Controls, GameSession, WordCatalog};
//! use key_shooter_types::TypingKey;
//!
//! let catalog = WordCatalog::from_text("test\n");
//! // Long spawn interval: only the first word is on screen.
//! let mut session = GameSession::new(catalog, Controls::new(60, 10), 7);
//! session.start().unwrap();
//!
//! // Half way through the word's flight.
//! for _ in 0..(5000 / 16) {
//!     session.tick(16).unwrap();
//!     session.drain_events();
//! }
//!
//! for c in "test".chars() {
//!     session.handle_key(TypingKey::from_char(c));
//! }
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.typed(), "");
//! assert_eq!(session.field().active_len(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) every frame with the
//! elapsed milliseconds (16ms at ~60 FPS), then take the queued field events
//! with [`GameSession::drain_events`](session::GameSession::drain_events).

pub mod catalog;
pub mod controls;
pub mod error;
pub mod field;
pub mod matcher;
pub mod motion;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use key_shooter_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Word, WordCatalog};
pub use controls::{parse_seconds, Controls};
pub use error::{ConfigError, EmptyCatalogError, ResourceError};
pub use field::{ActiveWord, WordField};
pub use matcher::{InputMatcher, MatcherState};
pub use motion::{target_for, MotionScheduler};
pub use rng::SimpleRng;
pub use session::{GameSession, SessionPhase, SessionSummary};
pub use snapshot::{GameSnapshot, WordView};
pub use spawn::SpawnScheduler;
