//! Runtime configuration: environment variables first, then CLI flags.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::controls::{parse_seconds, SPAWN_INTERVAL, WORD_DURATION};
use crate::core::Controls;
use crate::types::{DEFAULT_SPAWN_INTERVAL_SECS, DEFAULT_WORD_DURATION_SECS};

pub const DEFAULT_WORDS_PATH: &str = "assets/words.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub words_path: PathBuf,
    pub controls: Controls,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
    /// Problems found while reading the environment. Logged once the logger
    /// is up, since the log target itself comes from this config.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            controls: Controls::default(),
            seed: time_seed(),
            log_path: None,
            summary_path: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from `KEY_SHOOTER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(path) = var("KEY_SHOOTER_WORDS") {
            config.words_path = PathBuf::from(path);
        }

        let spawn_interval = match var("KEY_SHOOTER_SPAWN_INTERVAL") {
            Some(s) => parse_seconds(SPAWN_INTERVAL, &s).unwrap_or_else(|e| {
                config.warnings.push(format!("KEY_SHOOTER_SPAWN_INTERVAL: {e}"));
                DEFAULT_SPAWN_INTERVAL_SECS
            }),
            None => DEFAULT_SPAWN_INTERVAL_SECS,
        };
        let word_duration = match var("KEY_SHOOTER_WORD_DURATION") {
            Some(s) => parse_seconds(WORD_DURATION, &s).unwrap_or_else(|e| {
                config.warnings.push(format!("KEY_SHOOTER_WORD_DURATION: {e}"));
                DEFAULT_WORD_DURATION_SECS
            }),
            None => DEFAULT_WORD_DURATION_SECS,
        };
        config.controls = Controls::new(spawn_interval, word_duration);

        if let Some(s) = var("KEY_SHOOTER_SEED") {
            match s.parse::<u32>() {
                Ok(seed) => config.seed = seed,
                Err(_) => config
                    .warnings
                    .push(format!("KEY_SHOOTER_SEED: not a valid seed: {s:?}")),
            }
        }

        config.log_path = var("KEY_SHOOTER_LOG_PATH").map(PathBuf::from);
        config.summary_path = var("KEY_SHOOTER_SUMMARY_PATH").map(PathBuf::from);
        config
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--words" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --words"))?;
                    self.words_path = PathBuf::from(v);
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
