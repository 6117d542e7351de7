//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The snapshot is in arena pixels; the framebuffer is in cells. A shape
//! covers a cell when its pixel extent overlaps the cell's pixel rectangle.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::*;

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

const BACKGROUND: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK);
const PADDLE: CellStyle = CellStyle::new(Rgb::GREEN, Rgb::BLACK);
const BALL: CellStyle = CellStyle::new(Rgb::RED, Rgb::BLACK);
const TEXT: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
const PROMPT: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK);

const SOLID: char = '█';

/// A lightweight terminal renderer for the arena.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    scale: CellScale,
}

impl GameView {
    pub fn new(scale: CellScale) -> Self {
        Self { scale }
    }

    /// Cells needed to show the whole arena.
    pub fn viewport_for(&self, arena: Arena) -> Viewport {
        let (w, h) = self.scale.viewport_for(arena);
        Viewport::new(w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is only resized if the arena changes.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let vp = self.viewport_for(snap.arena);
        fb.resize(vp.width, vp.height);
        fb.clear(BACKGROUND.into_cell(' '));

        let paddle = snap.paddle;
        self.fill_px_rect(fb, paddle.x, paddle.y, paddle.width(), paddle.height(), PADDLE);

        let ball = snap.ball;
        self.fill_px_circle(fb, ball.x, ball.y, ball.diameter(), BALL);

        let (sx, sy) = SCORE_ANCHOR;
        let col = self.scale.px_to_col(sx);
        let row = self.scale.px_to_row(sy);
        let end = fb.put_str(col, row, "Score: ", TEXT);
        fb.put_u32(end, row, snap.score, TEXT);

        if snap.status.is_over() {
            self.draw_game_over(fb, snap);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let vp = self.viewport_for(snap.arena);
        let mut fb = FrameBuffer::new(vp.width, vp.height);
        self.render_into(snap, &mut fb);
        fb
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let arena = snap.arena;
        let center_col = self.scale.px_to_col(arena.center().0);

        self.overlay_line(fb, arena, HEADLINE_OFFSET_Y, GAME_OVER_TEXT, TEXT);

        let label = "Your Score: ";
        let width = label.chars().count() as i32 + decimal_width(snap.score);
        let row = self.scale.overlay_row(arena, FINAL_SCORE_OFFSET_Y);
        let end = fb.put_str(center_col - width / 2, row, label, PROMPT);
        fb.put_u32(end, row, snap.score, PROMPT);

        if snap.show_reset_prompt {
            self.overlay_line(fb, arena, RESET_PROMPT_OFFSET_Y, RESET_PROMPT_TEXT, PROMPT);
        }
        if snap.show_quit_prompt {
            self.overlay_line(fb, arena, QUIT_PROMPT_OFFSET_Y, QUIT_PROMPT_TEXT, PROMPT);
        }
    }

    fn overlay_line(&self, fb: &mut FrameBuffer, arena: Arena, offset_y: i32, text: &str, style: CellStyle) {
        let (start, _) = self.scale.overlay_span(arena, text);
        fb.put_str(start, self.scale.overlay_row(arena, offset_y), text, style);
    }

    /// Fill every cell overlapped by the pixel rectangle `[x, x+w) x [y, y+h)`.
    fn fill_px_rect(&self, fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        if w <= 0 || h <= 0 {
            return;
        }
        let s = self.scale;
        fb.fill_span(
            s.px_to_col(x),
            s.px_to_row(y),
            s.px_to_col(x + w - 1),
            s.px_to_row(y + h - 1),
            SOLID,
            style,
        );
    }

    /// Fill every cell the circle inscribed in the `d x d` box at (`x`, `y`) reaches into.
    fn fill_px_circle(&self, fb: &mut FrameBuffer, x: i32, y: i32, d: i32, style: CellStyle) {
        if d <= 0 {
            return;
        }
        let s = self.scale;
        let cw = s.cell_w as i64;
        let ch = s.cell_h as i64;
        // Doubled coordinates keep the center and radius integral.
        let cx2 = 2 * x as i64 + d as i64;
        let cy2 = 2 * y as i64 + d as i64;
        let r2 = d as i64;

        let col0 = s.px_to_col(x).max(0);
        let row0 = s.px_to_row(y).max(0);
        let col1 = s.px_to_col(x + d - 1).min(fb.width() as i32 - 1);
        let row1 = s.px_to_row(y + d - 1).min(fb.height() as i32 - 1);

        for row in row0..=row1 {
            let top = 2 * row as i64 * ch;
            let bottom = 2 * ((row as i64 + 1) * ch - 1);
            let dy = cy2 - cy2.clamp(top, bottom);
            for col in col0..=col1 {
                let left = 2 * col as i64 * cw;
                let right = 2 * ((col as i64 + 1) * cw - 1);
                let dx = cx2 - cx2.clamp(left, right);
                if dx * dx + dy * dy < r2 * r2 {
                    fb.put_char(col, row, SOLID, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, GameState, TickInput};

    const ARENA: Arena = Arena::new(640, 384);

    fn view() -> GameView {
        GameView::new(CellScale::new(8, 16))
    }

    fn row_text(fb: &FrameBuffer, row: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, row).unwrap().ch).collect()
    }

    #[test]
    fn viewport_matches_arena() {
        assert_eq!(view().viewport_for(ARENA), Viewport::new(80, 24));
    }

    #[test]
    fn paddle_covers_overlapped_cells() {
        let mut state = GameState::new(ARENA);
        state.tick(TickInput::new(0));
        let fb = view().render(&state.snapshot());

        // Paddle y=334..343 lies in row 20 (320..335) and row 21 (336..351).
        // x=0..99 covers columns 0..=12.
        for row in [20u16, 21] {
            let cell = fb.get(12, row).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, Rgb::GREEN);
            assert_eq!(fb.get(13, row).unwrap().ch, ' ');
        }
        assert_eq!(fb.get(0, 19).unwrap().ch, ' ');
    }

    #[test]
    fn ball_is_drawn_red_inside_its_box() {
        let state = GameState::with_ball(ARENA, Ball::new(320, 192, 3, 3));
        let fb = view().render(&state.snapshot());

        // Box 320..339 x 192..211: columns 40..=42, row 12 (192..207) and row 13.
        let center = fb.get(41, 12).unwrap();
        assert_eq!(center.ch, '█');
        assert_eq!(center.style.fg, Rgb::RED);
        assert_eq!(fb.get(39, 12).unwrap().ch, ' ');
        assert_eq!(fb.get(43, 12).unwrap().ch, ' ');
        assert_eq!(fb.get(41, 11).unwrap().ch, ' ');
    }

    #[test]
    fn ball_corners_outside_circle_stay_empty() {
        // Box 318..337 x 190..209, center (328, 200). Cell (42, 13) spans
        // 336..343 x 208..223: its nearest point (336, 208) is outside r=10.
        let state = GameState::with_ball(ARENA, Ball::new(318, 190, 3, 3));
        let fb = view().render(&state.snapshot());
        assert_eq!(fb.get(42, 13).unwrap().ch, ' ');
        assert_eq!(fb.get(41, 12).unwrap().ch, '█');
    }

    #[test]
    fn score_is_drawn_at_top_left() {
        let state = GameState::new(ARENA);
        let mut snap = state.snapshot();
        snap.score = 42;
        let fb = view().render(&snap);
        assert!(row_text(&fb, 0).starts_with(" Score: 42 "));
    }

    #[test]
    fn game_over_overlay_only_after_loss() {
        let playing = view().render(&GameState::new(ARENA).snapshot());
        assert!(!playing.to_text().contains(GAME_OVER_TEXT));

        let mut state = GameState::with_ball(ARENA, Ball::new(300, 382, 3, 3));
        state.tick(TickInput::new(0));
        let fb = view().render(&state.snapshot());

        // Center y=192: rows (192-60)/16=8, 172/16=10, 212/16=13, 252/16=15.
        assert!(row_text(&fb, 8).contains(GAME_OVER_TEXT));
        assert!(row_text(&fb, 10).contains("Your Score: 0"));
        assert!(row_text(&fb, 13).contains(RESET_PROMPT_TEXT));
        assert!(row_text(&fb, 15).contains(QUIT_PROMPT_TEXT));
    }

    #[test]
    fn overlay_text_is_centered() {
        let mut state = GameState::with_ball(ARENA, Ball::new(300, 382, 3, 3));
        state.tick(TickInput::new(0));
        let fb = view().render(&state.snapshot());

        // "Click to Reset" is 14 wide, center column 40 => starts at 33.
        let row = row_text(&fb, 13);
        assert_eq!(row.find(RESET_PROMPT_TEXT), Some(33));
    }

    #[test]
    fn render_into_reuses_buffer() {
        let v = view();
        let mut fb = FrameBuffer::new(1, 1);
        let mut state = GameState::new(ARENA);
        v.render_into(&state.snapshot(), &mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 24));

        state.tick(TickInput::new(0));
        v.render_into(&state.snapshot(), &mut fb);
        assert_eq!(fb, v.render(&state.snapshot()));
    }
}
