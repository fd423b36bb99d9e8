//! Game session - one play-through from start to stop
//!
//! The session owns every timer and the only entry points that mutate game
//! state: [`GameSession::tick`] for time and [`GameSession::handle_key`] for
//! input. Both take `&mut self`, so events are applied strictly one at a time.
//!
//! Stopping halts new spawns and freezes the elapsed clock used for the
//! summary. Words already on screen keep moving and can still be matched or
//! expire.

use crate::catalog::WordCatalog;
use crate::controls::Controls;
use crate::error::{ConfigError, EmptyCatalogError};
use crate::field::WordField;
use crate::matcher::InputMatcher;
use crate::snapshot::GameSnapshot;
use crate::spawn::SpawnScheduler;
use crate::types::{FieldEvent, TypingKey, WordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Running,
    Stopped,
}

/// Result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    /// Time from start to stop.
    pub elapsed_ms: u64,
}

impl SessionSummary {
    /// Words per minute; zero when no time has passed.
    pub fn words_per_minute(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        let minutes = self.elapsed_ms as f64 / 60_000.0;
        self.score as f64 / minutes
    }

    /// Whole words per minute, truncated.
    pub fn wpm(&self) -> u32 {
        self.words_per_minute() as u32
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Results: {} WPM", self.wpm())
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    field: WordField,
    matcher: InputMatcher,
    spawner: SpawnScheduler,
    controls: Controls,
    phase: SessionPhase,
    elapsed_ms: u64,
    second_timer_ms: u32,
    seconds: u32,
    summary: Option<SessionSummary>,
}

impl GameSession {
    pub fn new(catalog: WordCatalog, controls: Controls, seed: u32) -> Self {
        Self {
            field: WordField::new(catalog, seed),
            matcher: InputMatcher::new(),
            spawner: SpawnScheduler::new(controls.spawn_interval_ms()),
            controls,
            phase: SessionPhase::Ready,
            elapsed_ms: 0,
            second_timer_ms: 0,
            seconds: 0,
            summary: None,
        }
    }

    /// Spawn the first word and start the spawn timer. Only the first call
    /// has any effect.
    pub fn start(&mut self) -> Result<(), EmptyCatalogError> {
        if self.phase != SessionPhase::Ready {
            return Ok(());
        }
        self.field.spawn(self.controls.word_duration_ms())?;
        self.spawner.start(self.controls.spawn_interval_ms());
        self.phase = SessionPhase::Running;
        log::info!(
            "session started: spawn every {}s, words last {}s",
            self.controls.spawn_interval_secs(),
            self.controls.word_duration_secs()
        );
        Ok(())
    }

    /// Stop spawning and report the summary. Repeated calls return the first
    /// summary.
    pub fn stop(&mut self) -> SessionSummary {
        if let Some(summary) = self.summary {
            return summary;
        }

        self.spawner.stop();
        self.phase = SessionPhase::Stopped;
        let summary = SessionSummary {
            score: self.field.score(),
            elapsed_ms: self.elapsed_ms,
        };
        self.summary = Some(summary);
        log::info!(
            "session stopped after {}ms with score {}: {}",
            summary.elapsed_ms,
            summary.score,
            summary
        );
        summary
    }

    /// Advance all timers by `elapsed_ms`.
    ///
    /// Existing words move (and may expire) first; spawns requested in this
    /// step are created afterwards, so new words start at their start point.
    ///
    /// Field events pile up until [`GameSession::drain_events`] is called;
    /// drain once per tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<(), EmptyCatalogError> {
        self.field.tick(elapsed_ms);

        if self.phase != SessionPhase::Running {
            return Ok(());
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        self.second_timer_ms = self.second_timer_ms.saturating_add(elapsed_ms);
        while self.second_timer_ms >= 1000 {
            self.second_timer_ms -= 1000;
            self.seconds += 1;
        }

        let requests = self.spawner.advance(elapsed_ms);
        for _ in 0..requests {
            self.field.spawn(self.controls.word_duration_ms())?;
        }
        Ok(())
    }

    /// Feed one key through the matcher. Returns the matched word, if any.
    pub fn handle_key(&mut self, key: TypingKey) -> Option<WordId> {
        self.matcher.on_key(key, &mut self.field)
    }

    /// Apply typed spawn-interval text. On success the spawn timer is replaced
    /// at the new interval; on error nothing changes.
    pub fn apply_spawn_interval(&mut self, input: &str) -> Result<u32, ConfigError> {
        match self.controls.set_spawn_interval(input) {
            Ok(secs) => {
                self.spawner.reconfigure(self.controls.spawn_interval_ms());
                log::info!("spawn interval set to {}s", secs);
                Ok(secs)
            }
            Err(err) => {
                log::warn!(
                    "{}; keeping {}s",
                    err,
                    self.controls.spawn_interval_secs()
                );
                Err(err)
            }
        }
    }

    /// Apply typed word-duration text. Only words spawned afterwards use the
    /// new duration; on error nothing changes.
    pub fn apply_word_duration(&mut self, input: &str) -> Result<u32, ConfigError> {
        match self.controls.set_word_duration(input) {
            Ok(secs) => {
                log::info!("word duration set to {}s", secs);
                Ok(secs)
            }
            Err(err) => {
                log::warn!("{}; keeping {}s", err, self.controls.word_duration_secs());
                Err(err)
            }
        }
    }

    /// Clear the typed buffer.
    pub fn reset_input(&mut self) {
        self.matcher.reset();
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.field.score()
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn typed(&self) -> &str {
        self.matcher.typed()
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.summary
    }

    pub fn field(&self) -> &WordField {
        &self.field
    }

    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Take the field events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<FieldEvent> {
        self.field.drain_events()
    }

    /// Fill `out` with the current render state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.words.clear();
        self.field.views_into(&mut out.words);
        out.score = self.field.score();
        out.typed.clear();
        out.typed.push_str(self.matcher.typed());
        out.seconds = self.seconds;
        out.spawn_interval_secs = self.controls.spawn_interval_secs();
        out.word_duration_secs = self.controls.word_duration_secs();
        out.phase = self.phase;
        out.summary = self.summary;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
