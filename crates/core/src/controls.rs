//! Runtime controls - spawn interval and word duration.
//!
//! Both are whole seconds typed by the player. Bad input is rejected with a
//! [`ConfigError`] and the previous value stays in force.

use crate::error::ConfigError;
use crate::types::{DEFAULT_SPAWN_INTERVAL_SECS, DEFAULT_WORD_DURATION_SECS, MAX_CONTROL_SECS};

pub const SPAWN_INTERVAL: &str = "spawn interval";
pub const WORD_DURATION: &str = "word duration";

/// Parse a positive whole number of seconds for `control`.
pub fn parse_seconds(control: &'static str, input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| ConfigError::NotANumber {
        control,
        input: input.to_string(),
    })?;

    if value <= 0 {
        return Err(ConfigError::NonPositive { control, value });
    }
    if value > MAX_CONTROL_SECS as i64 {
        return Err(ConfigError::TooLarge {
            control,
            value,
            max: MAX_CONTROL_SECS,
        });
    }
    Ok(value as u32)
}

/// Current values of both controls, always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    spawn_interval_secs: u32,
    word_duration_secs: u32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            word_duration_secs: DEFAULT_WORD_DURATION_SECS,
        }
    }
}

impl Controls {
    /// Build from already-validated values; zero or oversized values fall back
    /// to the defaults.
    pub fn new(spawn_interval_secs: u32, word_duration_secs: u32) -> Self {
        let in_range = |v: u32| (1..=MAX_CONTROL_SECS).contains(&v);
        let defaults = Self::default();
        Self {
            spawn_interval_secs: if in_range(spawn_interval_secs) {
                spawn_interval_secs
            } else {
                defaults.spawn_interval_secs
            },
            word_duration_secs: if in_range(word_duration_secs) {
                word_duration_secs
            } else {
                defaults.word_duration_secs
            },
        }
    }

    pub fn spawn_interval_secs(&self) -> u32 {
        self.spawn_interval_secs
    }

    pub fn word_duration_secs(&self) -> u32 {
        self.word_duration_secs
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_interval_secs * 1000
    }

    pub fn word_duration_ms(&self) -> u32 {
        self.word_duration_secs * 1000
    }

    /// Apply typed spawn-interval text; on error the old value is kept.
    pub fn set_spawn_interval(&mut self, input: &str) -> Result<u32, ConfigError> {
        let secs = parse_seconds(SPAWN_INTERVAL, input)?;
        self.spawn_interval_secs = secs;
        Ok(secs)
    }

    /// Apply typed word-duration text; on error the old value is kept.
    pub fn set_word_duration(&mut self, input: &str) -> Result<u32, ConfigError> {
        let secs = parse_seconds(WORD_DURATION, input)?;
        self.word_duration_secs = secs;
        Ok(secs)
    }
}
