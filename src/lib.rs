//! Key Shooter (workspace facade crate).
//!
//! Re-exports the member crates under `key_shooter::{core,input,term,types}`
//! and hosts the binary's ambient pieces: configuration, logging and the
//! session summary export.

pub use key_shooter_core as core;
pub use key_shooter_input as input;
pub use key_shooter_term as term;
pub use key_shooter_types as types;

pub mod config;
pub mod logging;
pub mod summary;
