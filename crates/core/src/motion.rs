//! Motion scheduler - per-word linear drift with a completion signal
//!
//! Each track interpolates from its start to its target over a fixed duration.
//! Tracks are keyed by [`WordId`]; once a track is cancelled or completes it is
//! gone, so nothing can touch a word after it left the field.

use std::collections::BTreeMap;

use crate::types::{Position, WordId, FIELD_HEIGHT, FIELD_WIDTH, TARGET_BIAS};

/// Target point for a word starting at `start`.
///
/// Per axis: the field midpoint, pushed back by a quarter of the start
/// coordinate towards the side the word came from.
pub fn target_for(start: Position) -> Position {
    Position::new(
        biased_target(start.x, FIELD_WIDTH / 2.0),
        biased_target(start.y, FIELD_HEIGHT / 2.0),
    )
}

fn biased_target(start: f32, mid: f32) -> f32 {
    if start > mid {
        mid - TARGET_BIAS * start
    } else {
        mid + TARGET_BIAS * start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    start: Position,
    target: Position,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl Track {
    fn position(&self) -> Position {
        if self.duration_ms == 0 {
            return self.target;
        }
        let t = self.elapsed_ms as f32 / self.duration_ms as f32;
        self.start.lerp(self.target, t)
    }

    fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionScheduler {
    tracks: BTreeMap<WordId, Track>,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a track. Re-registering an id replaces its track.
    pub fn schedule(&mut self, id: WordId, start: Position, target: Position, duration_ms: u32) {
        self.tracks.insert(
            id,
            Track {
                start,
                target,
                duration_ms,
                elapsed_ms: 0,
            },
        );
    }

    /// Drop a track. Returns whether one was pending.
    pub fn cancel(&mut self, id: WordId) -> bool {
        self.tracks.remove(&id).is_some()
    }

    pub fn is_scheduled(&self, id: WordId) -> bool {
        self.tracks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Remaining time before `id` completes.
    pub fn remaining_ms(&self, id: WordId) -> Option<u32> {
        self.tracks
            .get(&id)
            .map(|t| t.duration_ms.saturating_sub(t.elapsed_ms))
    }

    /// Advance every track by `elapsed_ms`.
    ///
    /// New positions are appended to `moved` (in id order); completed tracks
    /// are removed and their ids appended to `finished`. A completed track
    /// reports its exact target as its last position.
    pub fn advance_into(
        &mut self,
        elapsed_ms: u32,
        moved: &mut Vec<(WordId, Position)>,
        finished: &mut Vec<WordId>,
    ) {
        let first_finished = finished.len();
        for (&id, track) in self.tracks.iter_mut() {
            track.elapsed_ms = track.elapsed_ms.saturating_add(elapsed_ms);
            moved.push((id, track.position()));
            if track.finished() {
                finished.push(id);
            }
        }

        for id in &finished[first_finished..] {
            self.tracks.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(m: &mut MotionScheduler, ms: u32) -> (Vec<(WordId, Position)>, Vec<WordId>) {
        let mut moved = Vec::new();
        let mut finished = Vec::new();
        m.advance_into(ms, &mut moved, &mut finished);
        (moved, finished)
    }

    #[test]
    fn test_target_biases_towards_start_side() {
        // Left edge: pushed right of the midpoint by a quarter of x.
        let t = target_for(Position::new(40.0, 60.0));
        assert_eq!(t, Position::new(300.0 + 10.0, 100.0 + 15.0));

        // Right of the midpoint: pulled left by a quarter of x.
        let t = target_for(Position::new(400.0, 150.0));
        assert_eq!(t, Position::new(300.0 - 100.0, 100.0 - 37.5));
    }

    #[test]
    fn test_target_on_midpoint_uses_positive_bias() {
        let t = target_for(Position::new(300.0, 100.0));
        assert_eq!(t, Position::new(375.0, 125.0));
    }

    #[test]
    fn test_linear_interpolation_halfway() {
        let mut m = MotionScheduler::new();
        let id = WordId::new(1);
        m.schedule(id, Position::new(0.0, 0.0), Position::new(100.0, 40.0), 1000);

        let (moved, finished) = advance(&mut m, 500);
        assert_eq!(moved, vec![(id, Position::new(50.0, 20.0))]);
        assert!(finished.is_empty());
        assert_eq!(m.remaining_ms(id), Some(500));
    }

    #[test]
    fn test_completion_lands_on_target_and_removes_track() {
        let mut m = MotionScheduler::new();
        let id = WordId::new(3);
        let target = Position::new(210.0, 90.0);
        m.schedule(id, Position::new(15.0, 60.0), target, 1000);

        let (moved, finished) = advance(&mut m, 1500);
        assert_eq!(moved, vec![(id, target)]);
        assert_eq!(finished, vec![id]);
        assert!(!m.is_scheduled(id));

        // Nothing more is reported for a completed track.
        let (moved, finished) = advance(&mut m, 1000);
        assert!(moved.is_empty());
        assert!(finished.is_empty());
    }

    #[test]
    fn test_cancelled_track_is_never_reported() {
        let mut m = MotionScheduler::new();
        let a = WordId::new(1);
        let b = WordId::new(2);
        m.schedule(a, Position::default(), Position::new(10.0, 10.0), 100);
        m.schedule(b, Position::default(), Position::new(10.0, 10.0), 100);

        assert!(m.cancel(a));
        assert!(!m.cancel(a));

        let (moved, finished) = advance(&mut m, 100);
        assert!(moved.iter().all(|(id, _)| *id == b));
        assert_eq!(finished, vec![b]);
    }

    #[test]
    fn test_tracks_keep_their_own_duration() {
        let mut m = MotionScheduler::new();
        let short = WordId::new(1);
        let long = WordId::new(2);
        m.schedule(short, Position::default(), Position::new(1.0, 1.0), 3000);
        m.schedule(long, Position::default(), Position::new(1.0, 1.0), 5000);

        let (_, finished) = advance(&mut m, 3000);
        assert_eq!(finished, vec![short]);
        let (_, finished) = advance(&mut m, 1999);
        assert!(finished.is_empty());
        let (_, finished) = advance(&mut m, 1);
        assert_eq!(finished, vec![long]);
    }
}
