//! Integration tests for the word lifecycle through the public facade.

use key_shooter::core::{
    ConfigError, Controls, GameSession, SessionPhase, Word, WordCatalog, WordField,
};
use key_shooter::types::{FieldEvent, Position, RemovalReason, TypingKey, WordId, TICK_MS};

fn session(words: &[&str], spawn_secs: u32, duration_secs: u32) -> GameSession {
    GameSession::new(
        WordCatalog::from_words(words.iter().copied()),
        Controls::new(spawn_secs, duration_secs),
        7,
    )
}

fn type_text(session: &mut GameSession, text: &str) -> Option<WordId> {
    let mut hit = None;
    for c in text.chars() {
        hit = session.handle_key(TypingKey::from_char(c)).or(hit);
    }
    hit
}

fn run_for(session: &mut GameSession, total_ms: u32) {
    let mut left = total_ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        session.tick(step).unwrap();
        left -= step;
    }
}

#[test]
fn typed_word_scores_halfway_through_its_life() {
    let mut s = session(&["TEST"], 60, 10);
    s.start().unwrap();
    let first = WordId::new(1);
    assert!(s.field().is_active(first));

    run_for(&mut s, 5_000);
    assert!(s.field().is_active(first));

    assert_eq!(type_text(&mut s, "test"), Some(first));
    assert_eq!(s.score(), 1);
    assert_eq!(s.typed(), "");
    assert!(!s.field().is_active(first));
    assert!(!s.field().has_motion(first));
}

#[test]
fn unmatched_word_expires_at_its_duration() {
    let mut s = session(&["TEST"], 60, 2);
    s.start().unwrap();
    let first = WordId::new(1);

    run_for(&mut s, 1_984);
    assert!(s.field().is_active(first));
    run_for(&mut s, 16);
    assert!(!s.field().is_active(first));

    let removed: Vec<_> = s
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, FieldEvent::Removed { .. }))
        .collect();
    assert_eq!(
        removed,
        vec![FieldEvent::Removed {
            id: first,
            reason: RemovalReason::Expired
        }]
    );
}

#[test]
fn reconfiguring_spawn_interval_keeps_in_flight_expiry() {
    let mut s = session(&["TEST"], 3, 10);
    s.start().unwrap();
    let first = WordId::new(1);

    run_for(&mut s, 1_000);
    assert_eq!(s.apply_spawn_interval("5"), Ok(5));

    run_for(&mut s, 8_992);
    assert!(s.field().is_active(first));
    run_for(&mut s, 8);
    assert!(!s.field().is_active(first));
}

#[test]
fn reconfigured_interval_spaces_later_spawns() {
    let mut s = session(&["TEST"], 3, 60);
    s.start().unwrap();

    run_for(&mut s, 1_000);
    s.apply_spawn_interval("5").unwrap();

    // Timer restarts at the new interval from the moment it was applied.
    run_for(&mut s, 4_992);
    assert_eq!(s.field().active_len(), 1);
    run_for(&mut s, 8);
    assert_eq!(s.field().active_len(), 2);
}

#[test]
fn invalid_duration_input_is_rejected_without_change() {
    let mut s = session(&["TEST"], 3, 10);
    let err = s.apply_word_duration("abc").unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { .. }));
    assert_eq!(s.controls().word_duration_secs(), 10);

    assert!(s.apply_spawn_interval("-2").is_err());
    assert!(s.apply_spawn_interval("0").is_err());
    assert_eq!(s.controls().spawn_interval_secs(), 3);
}

#[test]
fn new_duration_applies_only_to_later_words() {
    let mut s = session(&["TEST"], 1, 10);
    s.start().unwrap();
    s.apply_word_duration("2").unwrap();

    run_for(&mut s, 1_000);
    let second = WordId::new(2);
    assert_eq!(s.field().get(second).map(|w| w.duration_ms), Some(2_000));
    assert_eq!(s.field().get(WordId::new(1)).map(|w| w.duration_ms), Some(10_000));
}

#[test]
fn repeated_cat_only_ever_matches_cat() {
    let mut field = WordField::new(WordCatalog::from_words(["CAT", "DOG"]), 99);
    for _ in 0..100 {
        field.spawn(10_000).unwrap();
    }
    let cats = field
        .active_words()
        .filter(|w| w.text.as_str() == "CAT")
        .count();
    let dogs = field.active_len() - cats;

    let mut matched = 0;
    while let Some(id) = field.check_match("cat") {
        assert!(!field.is_active(id));
        matched += 1;
    }

    assert_eq!(matched, cats);
    assert_eq!(field.score() as usize, cats);
    assert_eq!(field.active_len(), dogs);
    assert!(field.active_words().all(|w| w.text.as_str() == "DOG"));
}

#[test]
fn prefixes_and_overtyping_do_not_match() {
    let mut s = session(&["DOG"], 60, 10);
    s.start().unwrap();

    assert_eq!(type_text(&mut s, "do"), None);
    assert_eq!(s.typed(), "DO");
    assert_eq!(type_text(&mut s, "x"), None);
    assert_eq!(s.score(), 0);

    // Fixing the typo completes the word.
    s.handle_key(TypingKey::Backspace);
    assert_eq!(type_text(&mut s, "g"), Some(WordId::new(1)));
    assert_eq!(s.score(), 1);
}

#[test]
fn field_rejects_text_with_trailing_extra_letters() {
    let mut field = WordField::new(WordCatalog::from_words(["DOG"]), 3);
    field.spawn(10_000).unwrap();
    assert_eq!(field.check_match("DOGS"), None);
    assert_eq!(field.check_match("DO"), None);
    assert_eq!(field.check_match("dog"), Some(WordId::new(1)));
}

#[test]
fn backspace_on_empty_buffer_is_noop() {
    let mut s = session(&["DOG"], 60, 10);
    s.start().unwrap();
    assert_eq!(s.handle_key(TypingKey::Backspace), None);
    assert_eq!(s.typed(), "");

    type_text(&mut s, "xy");
    s.handle_key(TypingKey::Backspace);
    assert_eq!(s.typed(), "X");
}

#[test]
fn every_word_ends_exactly_once() {
    let mut s = session(&["CAT", "DOG", "EMU"], 1, 3);
    s.start().unwrap();

    let mut spawned = Vec::new();
    let mut ended = Vec::new();
    for step in 0..1_000u32 {
        s.tick(TICK_MS).unwrap();
        if step % 50 == 0 {
            type_text(&mut s, "cat");
            s.reset_input();
        }
        for event in s.drain_events() {
            match event {
                FieldEvent::Spawned { id, .. } => spawned.push(id),
                FieldEvent::Matched { id } => ended.push(id),
                FieldEvent::Removed {
                    id,
                    reason: RemovalReason::Expired,
                } => ended.push(id),
                _ => {}
            }
        }
    }
    let mut sorted = ended.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ended.len(), "a word ended twice");
    for id in &ended {
        assert!(spawned.contains(id));
    }
    for id in &spawned {
        assert!(ended.contains(id) || s.field().is_active(*id));
    }
}

#[test]
fn stop_freezes_clock_but_not_words() {
    let mut s = session(&["TEST"], 60, 60);
    s.start().unwrap();
    run_for(&mut s, 30_000);
    type_text(&mut s, "test");

    let summary = s.stop();
    assert_eq!(s.phase(), SessionPhase::Stopped);
    assert_eq!(summary.score, 1);
    assert_eq!(summary.elapsed_ms, 30_000);
    assert_eq!(summary.wpm(), 2);
    assert_eq!(summary.to_string(), "Results: 2 WPM");

    let active_before = s.field().active_len();
    run_for(&mut s, 5_000);
    assert_eq!(s.seconds(), 30);
    assert_eq!(s.stop(), summary);
    assert!(s.field().active_len() <= active_before);
}

#[test]
fn spawn_word_moves_toward_center() {
    let mut field = WordField::new(WordCatalog::from_words(["CAT"]), 1);
    let id = field.spawn_word(Word::new("cat"), Position::new(45.0, 150.0), 1_000);
    field.tick(500);
    let word = field.get(id).unwrap();
    assert!(word.position.x > 45.0);
    assert!(word.position.y < 150.0);
}
