//! Word field - owns every word on screen, the score, and the match rules
//!
//! The field is the only place words are created or removed. Active words live
//! in an id-keyed map (ids grow with every spawn, so map order is spawn order).
//! Motion tracks are keyed by the same ids and are cancelled in the same call
//! that removes a word, so a removed word can never expire or move again.

use std::collections::BTreeMap;

use crate::catalog::{Word, WordCatalog};
use crate::error::EmptyCatalogError;
use crate::motion::{target_for, MotionScheduler};
use crate::rng::SimpleRng;
use crate::snapshot::WordView;
use crate::types::*;

/// A word currently eligible for matching or expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWord {
    pub id: WordId,
    pub text: Word,
    pub start: Position,
    pub target: Position,
    pub position: Position,
    /// Field clock reading at spawn.
    pub spawned_at_ms: u64,
    pub duration_ms: u32,
}

/// A matched word kept on screen for the cosmetic fade only.
#[derive(Debug, Clone, PartialEq)]
struct FadingWord {
    word: ActiveWord,
    remaining_ms: u32,
}

/// Candidate start columns, left edge first.
pub fn spawn_x_candidates() -> [f32; 8] {
    let mut xs = [0.0; 8];
    for (slot, x) in xs.iter_mut().zip(SPAWN_X_LEFT_OFFSETS) {
        *slot = x;
    }
    for (slot, inset) in xs[4..].iter_mut().zip(SPAWN_X_RIGHT_INSETS) {
        *slot = FIELD_WIDTH - inset;
    }
    xs
}

/// Pick a start position from the edge-bias table.
pub fn choose_start(rng: &mut SimpleRng) -> Position {
    let xs = spawn_x_candidates();
    let mut x = xs[rng.next_range(xs.len() as u32) as usize];
    if x > SPAWN_X_CLAMP_ABOVE {
        x = SPAWN_X_CLAMPED;
    }

    let mut y = rng.next_range(FIELD_HEIGHT as u32) as f32;
    if y < SPAWN_Y_MIN {
        y = SPAWN_Y_TOP_CLAMPED;
    }
    if y > SPAWN_Y_MAX {
        y = SPAWN_Y_BOTTOM_CLAMPED;
    }

    Position::new(x, y)
}

#[derive(Debug, Clone)]
pub struct WordField {
    catalog: WordCatalog,
    rng: SimpleRng,
    active: BTreeMap<WordId, ActiveWord>,
    fading: Vec<FadingWord>,
    motion: MotionScheduler,
    next_id: WordId,
    score: u32,
    clock_ms: u64,
    events: Vec<FieldEvent>,
    moved_scratch: Vec<(WordId, Position)>,
    finished_scratch: Vec<WordId>,
}

impl WordField {
    pub fn new(catalog: WordCatalog, seed: u32) -> Self {
        Self {
            catalog,
            rng: SimpleRng::new(seed),
            active: BTreeMap::new(),
            fading: Vec::new(),
            motion: MotionScheduler::new(),
            next_id: WordId::new(1),
            score: 0,
            clock_ms: 0,
            events: Vec::with_capacity(64),
            moved_scratch: Vec::with_capacity(16),
            finished_scratch: Vec::with_capacity(4),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: WordId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn get(&self, id: WordId) -> Option<&ActiveWord> {
        self.active.get(&id)
    }

    /// Active words in spawn order.
    pub fn active_words(&self) -> impl Iterator<Item = &ActiveWord> {
        self.active.values()
    }

    /// Number of matched words still fading out.
    pub fn fading_len(&self) -> usize {
        self.fading.len()
    }

    /// Whether a motion track is still pending for `id`.
    pub fn has_motion(&self, id: WordId) -> bool {
        self.motion.is_scheduled(id)
    }

    /// Spawn a random catalog word at a random edge position.
    pub fn spawn(&mut self, duration_ms: u32) -> Result<WordId, EmptyCatalogError> {
        let text = self.catalog.pick_random(&mut self.rng)?.clone();
        let start = choose_start(&mut self.rng);
        Ok(self.spawn_word(text, start, duration_ms))
    }

    /// Spawn a specific word at a specific start position.
    pub fn spawn_word(&mut self, text: Word, start: Position, duration_ms: u32) -> WordId {
        let id = self.next_id;
        self.next_id = id.next();

        let target = target_for(start);
        self.motion.schedule(id, start, target, duration_ms);
        log::debug!(
            "spawn {} {:?} at ({:.0}, {:.0}) for {}ms",
            id,
            text.as_str(),
            start.x,
            start.y,
            duration_ms
        );
        self.active.insert(
            id,
            ActiveWord {
                id,
                text,
                start,
                target,
                position: start,
                spawned_at_ms: self.clock_ms,
                duration_ms,
            },
        );
        self.events.push(FieldEvent::Spawned {
            id,
            position: start,
        });
        id
    }

    /// Remove `id` as expired. Absent ids are ignored; returns whether a word
    /// was removed.
    pub fn expire(&mut self, id: WordId) -> bool {
        let Some(word) = self.active.remove(&id) else {
            return false;
        };
        self.motion.cancel(id);
        log::debug!("expire {} {:?}", id, word.text.as_str());
        self.events.push(FieldEvent::Removed {
            id,
            reason: RemovalReason::Expired,
        });
        true
    }

    /// Match typed text against the active words.
    ///
    /// The first equal word in spawn order wins. On a hit the score goes up by
    /// one and the word leaves the active set and its motion track right away;
    /// it stays visible, frozen, for [`MATCH_FADE_MS`].
    pub fn check_match(&mut self, candidate: &str) -> Option<WordId> {
        if candidate.is_empty() {
            return None;
        }

        let id = self
            .active
            .values()
            .find(|w| w.text.matches(candidate))
            .map(|w| w.id)?;

        let word = self.active.remove(&id)?;
        self.motion.cancel(id);
        self.score = self.score.saturating_add(1);
        log::info!("match {} {:?}, score {}", id, word.text.as_str(), self.score);

        self.events.push(FieldEvent::Matched { id });
        self.fading.push(FadingWord {
            word,
            remaining_ms: MATCH_FADE_MS,
        });
        Some(id)
    }

    /// Advance motion, expiries and the cosmetic fade by `elapsed_ms`.
    ///
    /// Every tick queues one `Moved` event per word in flight. The queue is
    /// only emptied by [`WordField::drain_events`], so callers that tick must
    /// also drain.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);

        let mut moved = std::mem::take(&mut self.moved_scratch);
        let mut finished = std::mem::take(&mut self.finished_scratch);
        moved.clear();
        finished.clear();

        self.motion.advance_into(elapsed_ms, &mut moved, &mut finished);

        for &(id, position) in &moved {
            if let Some(word) = self.active.get_mut(&id) {
                word.position = position;
                self.events.push(FieldEvent::Moved { id, position });
            }
        }
        for &id in &finished {
            self.expire(id);
        }

        self.moved_scratch = moved;
        self.finished_scratch = finished;

        let events = &mut self.events;
        self.fading.retain_mut(|f| {
            f.remaining_ms = f.remaining_ms.saturating_sub(elapsed_ms);
            if f.remaining_ms == 0 {
                events.push(FieldEvent::Removed {
                    id: f.word.id,
                    reason: RemovalReason::Matched,
                });
                false
            } else {
                true
            }
        });
    }

    /// Take every event emitted since the last call, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Append render views of every visible word (active, then fading).
    pub fn views_into(&self, out: &mut Vec<WordView>) {
        out.extend(self.active.values().map(|w| WordView {
            id: w.id,
            text: w.text.clone(),
            position: w.position,
            fading: false,
        }));
        out.extend(self.fading.iter().map(|f| WordView {
            id: f.word.id,
            text: f.word.text.clone(),
            position: f.word.position,
            fading: true,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(words: &[&str]) -> WordField {
        WordField::new(WordCatalog::from_words(words.iter().copied()), 12345)
    }

    fn removed(events: &[FieldEvent], id: WordId) -> Vec<RemovalReason> {
        events
            .iter()
            .filter_map(|e| match *e {
                FieldEvent::Removed { id: rid, reason } if rid == id => Some(reason),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_spawn_candidates_match_bias_table() {
        assert_eq!(
            spawn_x_candidates(),
            [15.0, 25.0, 35.0, 45.0, 540.0, 525.0, 520.0, 510.0]
        );
    }

    #[test]
    fn test_choose_start_respects_clamps() {
        let mut rng = SimpleRng::new(777);
        for _ in 0..500 {
            let p = choose_start(&mut rng);
            assert!(
                [15.0, 25.0, 35.0, 45.0, 400.0].contains(&p.x),
                "unexpected x {}",
                p.x
            );
            assert!(p.y >= SPAWN_Y_MIN && p.y < FIELD_HEIGHT, "unexpected y {}", p.y);
        }
    }

    #[test]
    fn test_spawn_adds_active_word_with_motion() {
        let mut f = field(&["cat"]);
        let id = f.spawn(10_000).unwrap();

        let word = f.get(id).unwrap();
        assert_eq!(word.text.as_str(), "CAT");
        assert_eq!(word.position, word.start);
        assert_eq!(word.target, target_for(word.start));
        assert!(f.has_motion(id));
        assert_eq!(
            f.drain_events(),
            vec![FieldEvent::Spawned {
                id,
                position: word_start(&f, id)
            }]
        );
    }

    fn word_start(f: &WordField, id: WordId) -> Position {
        f.get(id).unwrap().start
    }

    #[test]
    fn test_spawn_with_empty_catalog_fails() {
        let mut f = field(&[]);
        assert_eq!(f.spawn(1000), Err(EmptyCatalogError));
        assert_eq!(f.active_len(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut f = field(&["a", "b"]);
        let ids: Vec<WordId> = (0..20).map(|_| f.spawn(1000).unwrap()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_expire_is_idempotent() {
        let mut f = field(&["cat"]);
        let id = f.spawn(1000).unwrap();
        f.drain_events();

        assert!(f.expire(id));
        let after_first = (f.active_len(), f.score(), f.has_motion(id));
        let events_first = f.drain_events();

        assert!(!f.expire(id));
        assert_eq!((f.active_len(), f.score(), f.has_motion(id)), after_first);
        assert!(f.drain_events().is_empty());
        assert_eq!(removed(&events_first, id), vec![RemovalReason::Expired]);
    }

    #[test]
    fn test_tick_expires_word_at_duration() {
        let mut f = field(&["cat"]);
        let id = f.spawn(1000).unwrap();

        f.tick(999);
        assert!(f.is_active(id));
        f.tick(1);
        assert!(!f.is_active(id));
        assert_eq!(
            removed(&f.drain_events(), id),
            vec![RemovalReason::Expired]
        );
    }

    #[test]
    fn test_word_reaches_target_before_expiring() {
        let mut f = field(&["cat"]);
        let id = f.spawn(1000).unwrap();
        let target = f.get(id).unwrap().target;
        f.drain_events();

        f.tick(1000);
        let events = f.drain_events();
        assert!(events.contains(&FieldEvent::Moved {
            id,
            position: target
        }));
    }

    #[test]
    fn test_check_match_case_insensitive() {
        let mut f = field(&["cat"]);
        let id = f.spawn(1000).unwrap();
        assert_eq!(f.check_match("cAt"), Some(id));
        assert_eq!(f.score(), 1);
    }

    #[test]
    fn test_prefix_and_longer_text_do_not_match() {
        let mut f = field(&["cat"]);
        f.spawn(1000).unwrap();
        assert_eq!(f.check_match("CA"), None);
        assert_eq!(f.check_match("CATS"), None);
        assert_eq!(f.check_match(""), None);
        assert_eq!(f.score(), 0);
    }

    #[test]
    fn test_duplicate_text_matches_oldest_first() {
        let mut f = field(&["dog"]);
        let first = f.spawn(1000).unwrap();
        let second = f.spawn(1000).unwrap();

        assert_eq!(f.check_match("DOG"), Some(first));
        assert!(f.is_active(second));
        assert_eq!(f.check_match("DOG"), Some(second));
        assert_eq!(f.score(), 2);
    }

    #[test]
    fn test_matched_word_never_expires() {
        let mut f = field(&["cat"]);
        let id = f.spawn(1000).unwrap();
        f.tick(500);
        f.drain_events();

        assert_eq!(f.check_match("CAT"), Some(id));
        assert!(!f.is_active(id));
        assert!(!f.has_motion(id));

        // A late expiry for the matched id is a no-op.
        assert!(!f.expire(id));

        f.tick(2000);
        let events = f.drain_events();
        assert_eq!(removed(&events, id), vec![RemovalReason::Matched]);
        assert!(!events
            .iter()
            .any(|e| matches!(e, FieldEvent::Moved { id: mid, .. } if *mid == id)));
    }

    #[test]
    fn test_matched_word_fades_for_one_second() {
        let mut f = field(&["cat"]);
        let id = f.spawn(10_000).unwrap();
        f.tick(100);
        let frozen = f.get(id).unwrap().position;
        f.check_match("CAT").unwrap();

        let mut views = Vec::new();
        f.views_into(&mut views);
        assert_eq!(views.len(), 1);
        assert!(views[0].fading);
        assert_eq!(views[0].position, frozen);

        f.tick(MATCH_FADE_MS - 1);
        assert_eq!(f.fading_len(), 1);
        f.tick(1);
        assert_eq!(f.fading_len(), 0);

        views.clear();
        f.views_into(&mut views);
        assert!(views.is_empty());
    }

    #[test]
    fn test_tick_queues_moves_until_drained() {
        let mut f = field(&["cat", "dog"]);
        for _ in 0..3 {
            f.spawn(10_000).unwrap();
        }
        f.drain_events();

        f.tick(16);
        f.tick(16);
        let events = f.drain_events();
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| matches!(e, FieldEvent::Moved { .. })));
        assert!(f.drain_events().is_empty());

        f.tick(16);
        assert_eq!(f.drain_events().len(), 3);
    }

    #[test]
    fn test_each_word_ends_exactly_once() {
        let mut f = field(&["cat", "dog"]);
        let mut ids = Vec::new();
        for step in 0..40u32 {
            ids.push(f.spawn(1000 + step * 37).unwrap());
            if step % 3 == 0 {
                f.check_match("CAT");
            }
            f.tick(250);
        }
        f.tick(60_000);

        let events = f.drain_events();
        for id in ids {
            let ends = events
                .iter()
                .filter(|e| {
                    matches!(e, FieldEvent::Removed { id: rid, .. } if *rid == id)
                })
                .count();
            assert_eq!(ends, 1, "word {} ended {} times", id, ends);
        }
        assert_eq!(f.active_len(), 0);
        assert_eq!(f.fading_len(), 0);
    }
}
