//! Terminal rendering for the typing game.
//!
//! Everything draws into a plain [`FrameBuffer`]; [`TerminalRenderer`] flushes
//! it to the terminal, sending only changed cells after the first frame.

pub mod fb;
pub mod game_view;
pub mod keyboard;
pub mod renderer;

pub use key_shooter_core as core;
pub use key_shooter_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{word_cell, ControlSlot, ControlsView, GameView, Layout, Viewport};
pub use keyboard::{KeyboardFlash, KEY_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
