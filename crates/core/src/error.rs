//! Error taxonomy for the word engine.
//!
//! - [`ResourceError`]: the word list cannot be used. Fatal at startup.
//! - [`ConfigError`]: a runtime control got bad input. Recovered by keeping the
//!   previous value.
//! - [`EmptyCatalogError`]: a spawn was attempted with no words to pick from.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{control} must be a whole number of seconds, got {input:?}")]
    NotANumber { control: &'static str, input: String },
    #[error("{control} must be at least 1 second, got {value}")]
    NonPositive { control: &'static str, value: i64 },
    #[error("{control} must be at most {max} seconds, got {value}")]
    TooLarge {
        control: &'static str,
        value: i64,
        max: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("word catalog is empty")]
pub struct EmptyCatalogError;
