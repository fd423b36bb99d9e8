//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!                 Score: 3
//!                   CA
//! ┌──────────────────────────────────────┐
//! │  DOG                                 │
//! │                  CAT                 │
//! └──────────────────────────────────────┘
//! Spawn Rate:    [3         ] Enter: CHANGE
//! Text Duration: [10        ] Enter: CHANGE
//! Tab: controls  Esc: leave prompt
//!
//!      Q  W  E  R  T  Y  U  I  O  P
//!       A  S  D  F  G  H  J  K  L
//!         Z  X  C  V  B  N  M
//! Esc: STOP    12 seconds
//! ```

use crate::core::{GameSnapshot, SessionPhase, WordView};
use crate::fb::{palette, CellStyle, FrameBuffer, Rgb};
use crate::keyboard::{KeyboardFlash, KEY_ROWS};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSlot {
    SpawnInterval,
    WordDuration,
}

/// State of the two control prompts, owned by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView<'a> {
    pub spawn_interval: &'a str,
    pub word_duration: &'a str,
    pub focused: Option<ControlSlot>,
    /// Last warning to show (e.g. rejected control input).
    pub status: Option<&'a str>,
}

/// Rows below the field frame: 3 control rows, a gap, 3 keyboard rows, the bottom bar.
const ROWS_BELOW_FIELD: u16 = 8;
/// Score and typed rows above the field frame.
const ROWS_ABOVE_FIELD: u16 = 2;
const MIN_FRAME_H: u16 = 3;
const PROMPT_W: u16 = 10;
const KEY_W: u16 = 3;

/// Where each part of the screen goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_y: u16,
    pub frame_h: u16,
    pub controls_y: u16,
    pub keyboard_y: u16,
    pub bottom_y: u16,
}

impl Layout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let frame_y = ROWS_ABOVE_FIELD;
        let frame_h = viewport
            .height
            .saturating_sub(ROWS_ABOVE_FIELD + ROWS_BELOW_FIELD)
            .max(MIN_FRAME_H);
        let controls_y = frame_y + frame_h;
        let keyboard_y = controls_y + 4;
        Self {
            frame_y,
            frame_h,
            controls_y,
            keyboard_y,
            bottom_y: keyboard_y + 3,
        }
    }

    /// Inner field size in cells.
    pub fn field_size(&self, viewport: Viewport) -> (u16, u16) {
        (
            viewport.width.saturating_sub(2),
            self.frame_h.saturating_sub(2),
        )
    }
}

/// Cell (relative to the field interior) where a word of `len` chars starts.
///
/// Words are kept fully inside the field.
pub fn word_cell(view: &WordView, inner_w: u16, inner_h: u16) -> (u16, u16) {
    let len = view.text.len() as u16;
    let fx = (view.position.x / FIELD_WIDTH).clamp(0.0, 1.0);
    let fy = (view.position.y / FIELD_HEIGHT).clamp(0.0, 1.0);
    let x = ((fx * inner_w as f32) as u16).min(inner_w.saturating_sub(len));
    let y = ((fy * inner_h as f32) as u16).min(inner_h.saturating_sub(1));
    (x, y)
}

/// A lightweight terminal renderer for the typing game.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        controls: &ControlsView<'_>,
        keys: &KeyboardFlash,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = Layout::for_viewport(viewport);

        fb.put_str_centered(
            0,
            &format!("Score: {}", snap.score),
            CellStyle::default().bold(),
        );
        fb.put_str_centered(
            1,
            &snap.typed,
            CellStyle::on(palette::TYPED, palette::BACKGROUND).bold(),
        );

        self.draw_field(fb, snap, viewport, &layout);
        self.draw_controls(fb, controls, &layout);
        self.draw_keyboard(fb, keys, viewport, &layout);
        self.draw_bottom_bar(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        controls: &ControlsView<'_>,
        keys: &KeyboardFlash,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, controls, keys, viewport, &mut fb);
        fb
    }

    fn draw_field(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let (inner_w, inner_h) = layout.field_size(viewport);
        let field_bg = CellStyle::on(palette::MUTED, palette::FIELD);

        fb.fill_rect(1, layout.frame_y + 1, inner_w, inner_h, ' ', field_bg);
        fb.draw_frame(
            0,
            layout.frame_y,
            viewport.width,
            layout.frame_h,
            CellStyle::on(palette::BORDER, palette::BACKGROUND),
        );

        // Views list fading words last, so matched words draw on top.
        for view in &snap.words {
            let (x, y) = word_cell(view, inner_w, inner_h);
            let fg = if view.fading {
                palette::MATCHED
            } else {
                palette::WORD
            };
            fb.put_str(
                1 + x,
                layout.frame_y + 1 + y,
                view.text.as_str(),
                CellStyle::on(fg, palette::FIELD).bold(),
            );
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, controls: &ControlsView<'_>, layout: &Layout) {
        let rows = [
            (
                "Spawn Rate:    ",
                controls.spawn_interval,
                ControlSlot::SpawnInterval,
            ),
            (
                "Text Duration: ",
                controls.word_duration,
                ControlSlot::WordDuration,
            ),
        ];

        for (row, (label, text, slot)) in rows.into_iter().enumerate() {
            let y = layout.controls_y + row as u16;
            let focused = controls.focused == Some(slot);
            let x = fb.put_str(0, y, label, CellStyle::default().bold());

            let box_style = if focused {
                CellStyle::on(palette::FOCUS, palette::FIELD).bold()
            } else {
                CellStyle::on(palette::TEXT, palette::FIELD)
            };
            fb.put_char(x, y, '[', CellStyle::default());
            fb.fill_rect(x + 1, y, PROMPT_W, 1, ' ', box_style);
            let end = fb.put_str(x + 1, y, text, box_style);
            if focused && end < x + 1 + PROMPT_W {
                fb.put_char(end, y, '_', box_style);
            }
            fb.put_char(x + 1 + PROMPT_W, y, ']', CellStyle::default());

            let hint = if focused { " Enter: CHANGE" } else { "" };
            fb.put_str(
                x + 2 + PROMPT_W,
                y,
                hint,
                CellStyle::on(palette::MUTED, palette::BACKGROUND),
            );
        }

        let status_y = layout.controls_y + 2;
        match controls.status {
            Some(status) => {
                fb.put_str(
                    0,
                    status_y,
                    status,
                    CellStyle::on(palette::WARNING, palette::BACKGROUND),
                );
            }
            None => {
                fb.put_str(
                    0,
                    status_y,
                    "Tab: controls  Esc: leave prompt",
                    CellStyle::on(palette::MUTED, palette::BACKGROUND).dim(),
                );
            }
        }
    }

    fn draw_keyboard(
        &self,
        fb: &mut FrameBuffer,
        keys: &KeyboardFlash,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let idle = CellStyle::on(Rgb::new(20, 20, 20), palette::KEY);
        let lit = CellStyle::on(palette::KEY, palette::KEY_LIT).bold();

        for (row, letters) in KEY_ROWS.iter().enumerate() {
            let y = layout.keyboard_y + row as u16;
            let count = letters.len() as u16;
            let row_w = count * KEY_W + count.saturating_sub(1);
            let mut x = viewport.width.saturating_sub(row_w) / 2;

            for letter in letters.bytes() {
                let style = if keys.is_lit(letter) { lit } else { idle };
                fb.put_char(x, y, ' ', style);
                fb.put_char(x + 1, y, letter as char, style);
                fb.put_char(x + 2, y, ' ', style);
                x += KEY_W + 1;
            }
        }
    }

    fn draw_bottom_bar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let y = layout.bottom_y;
        let action = match snap.phase {
            SessionPhase::Stopped => "Esc: QUIT",
            _ => "Esc: STOP",
        };
        let mut x = fb.put_str(0, y, action, CellStyle::default().bold());
        x = fb.put_str(
            x + 4,
            y,
            &format!("{} seconds", snap.seconds),
            CellStyle::on(palette::TIMER, palette::BACKGROUND).bold(),
        );
        if let Some(summary) = snap.summary {
            fb.put_str(
                x + 4,
                y,
                &summary.to_string(),
                CellStyle::on(palette::RESULTS, palette::BACKGROUND).bold(),
            );
        }
    }
}
