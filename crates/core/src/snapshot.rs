use crate::catalog::Word;
use crate::session::{SessionPhase, SessionSummary};
use crate::types::{Position, WordId};

/// One visible word, as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct WordView {
    pub id: WordId,
    pub text: Word,
    pub position: Position,
    /// Matched and waiting out the cosmetic fade.
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub words: Vec<WordView>,
    pub score: u32,
    pub typed: String,
    pub seconds: u32,
    pub spawn_interval_secs: u32,
    pub word_duration_secs: u32,
    pub phase: SessionPhase,
    pub summary: Option<SessionSummary>,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            score: 0,
            typed: String::new(),
            seconds: 0,
            spawn_interval_secs: 0,
            word_duration_secs: 0,
            phase: SessionPhase::Ready,
            summary: None,
        }
    }
}
