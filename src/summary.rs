//! JSON-lines export of finished sessions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Controls, SessionSummary};

/// One line of the summary file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub score: u32,
    pub elapsed_ms: u64,
    pub words_per_minute: f64,
    pub spawn_interval_secs: u32,
    pub word_duration_secs: u32,
}

impl SummaryRecord {
    pub fn new(summary: &SessionSummary, controls: &Controls) -> Self {
        Self {
            score: summary.score,
            elapsed_ms: summary.elapsed_ms,
            words_per_minute: summary.words_per_minute(),
            spawn_interval_secs: controls.spawn_interval_secs(),
            word_duration_secs: controls.word_duration_secs(),
        }
    }
}

/// Append one record to `path`, creating the file if needed.
pub fn append_summary(path: &Path, summary: &SessionSummary, controls: &Controls) -> Result<()> {
    let record = SummaryRecord::new(summary, controls);
    let mut line = serde_json::to_string(&record)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open summary file {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("write summary file {}", path.display()))?;
    Ok(())
}
