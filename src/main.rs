//! Key Shooter terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `key_shooter::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use key_shooter::config::AppConfig;
use key_shooter::core::{GameSession, GameSnapshot, SessionSummary, WordCatalog};
use key_shooter::input::{Focus, InputRouter, UiAction};
use key_shooter::logging;
use key_shooter::summary::append_summary;
use key_shooter::term::{
    ControlSlot, ControlsView, FrameBuffer, GameView, KeyboardFlash, TerminalRenderer, Viewport,
};
use key_shooter::types::{TypingKey, TICK_MS};

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    logging::init(config.log_path.as_deref())?;
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }

    let catalog = WordCatalog::load(&config.words_path).with_context(|| {
        format!(
            "cannot start without a word list ({})",
            config.words_path.display()
        )
    })?;
    let mut session = GameSession::new(catalog, config.controls, config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    println!("{}", summary);
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    config: &AppConfig,
) -> Result<SessionSummary> {
    session.start()?;

    let view = GameView::new();
    let controls = session.controls();
    let mut router = InputRouter::with_values(
        controls.spawn_interval_secs(),
        controls.word_duration_secs(),
    );
    let mut keys = KeyboardFlash::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<String> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let spawn_text = router.spawn_interval_text();
        let duration_text = router.word_duration_text();
        let controls_view = ControlsView {
            spawn_interval: &spawn_text,
            word_duration: &duration_text,
            focused: match router.focus() {
                Focus::Field => None,
                Focus::SpawnInterval => Some(ControlSlot::SpawnInterval),
                Focus::WordDuration => Some(ControlSlot::WordDuration),
            },
            status: status.as_deref(),
        };
        view.render_into(&snap, &controls_view, &keys, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match router.handle_key_press(key) {
                        Some(UiAction::Type(typing)) => {
                            if let TypingKey::Letter(letter) = typing {
                                keys.press(letter);
                            }
                            session.handle_key(typing);
                        }
                        Some(UiAction::ApplySpawnInterval(text)) => {
                            status = session
                                .apply_spawn_interval(&text)
                                .err()
                                .map(|e| e.to_string());
                            let current = session.controls().spawn_interval_secs().to_string();
                            router.set_prompt_text(Focus::SpawnInterval, &current);
                        }
                        Some(UiAction::ApplyWordDuration(text)) => {
                            status = session
                                .apply_word_duration(&text)
                                .err()
                                .map(|e| e.to_string());
                            let current = session.controls().word_duration_secs().to_string();
                            router.set_prompt_text(Focus::WordDuration, &current);
                        }
                        Some(UiAction::Stop) => {
                            finish(session, config);
                        }
                        Some(UiAction::Quit) => {
                            return Ok(finish(session, config));
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the measured time so a slow frame does not slow the game.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = u32::try_from(last_tick.elapsed().as_millis()).unwrap_or(u32::MAX);
            last_tick = Instant::now();

            session.tick(elapsed_ms)?;
            keys.tick(elapsed_ms);
            for event in session.drain_events() {
                log::trace!("field event: {:?}", event);
            }
        }
    }
}

/// Stop the session once and export its summary.
fn finish(session: &mut GameSession, config: &AppConfig) -> SessionSummary {
    let first_stop = session.summary().is_none();
    let summary = session.stop();
    if first_stop {
        if let Some(path) = config.summary_path.as_deref() {
            if let Err(err) = append_summary(path, &summary, &session.controls()) {
                log::warn!("summary export failed: {:#}", err);
            }
        }
    }
    summary
}
