//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::TypingKey`] and routes key
//! presses between the word field and the two control prompts.

pub mod handler;
pub mod map;

pub use key_shooter_types as types;

pub use handler::{Focus, InputRouter, UiAction};
pub use map::{should_quit, typing_key};
