//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Units
//!
//! Every position, size and velocity is measured in **pixels**. On a terminal
//! the pixels are virtual: each character cell spans [`CellScale`] pixels, so the
//! simulation is identical whatever the backing surface is.
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_WIDTH` | 100 | Paddle width |
//! | `PADDLE_HEIGHT` | 10 | Paddle height |
//! | `PADDLE_BOTTOM_MARGIN` | 50 | Paddle top edge sits at `height - 50` |
//! | `BALL_DIAMETER` | 20 | Ball bounding box edge |
//! | `BALL_START_SPEED` | 3 | Initial `vx` and `vy` after a reset |
//!
//! # Timing
//!
//! - `TICK_HZ`: 60 ticks per second
//! - `TICK_MS`: 16ms per tick (integer division, as the loop sleeps in whole ms)
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Arena, CellScale, PADDLE_WIDTH};
//!
//! let arena = Arena::new(800, 600);
//! assert_eq!(arena.paddle_y(), 550);
//! assert_eq!(arena.max_paddle_x(), 800 - PADDLE_WIDTH);
//!
//! // An 80x24 terminal with 8x16 pixel cells.
//! let scale = CellScale::default();
//! assert_eq!(scale.arena_for(80, 24), Arena::new(640, 384));
//! ```

/// Paddle width in pixels
pub const PADDLE_WIDTH: i32 = 100;

/// Paddle height in pixels
pub const PADDLE_HEIGHT: i32 = 10;

/// Distance from the paddle's top edge to the bottom of the arena
pub const PADDLE_BOTTOM_MARGIN: i32 = 50;

/// Ball diameter in pixels
pub const BALL_DIAMETER: i32 = 20;

/// Ball speed on both axes after a reset (pixels per tick)
pub const BALL_START_SPEED: i32 = 3;

/// Nominal tick rate
pub const TICK_HZ: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 1000 / TICK_HZ;

/// Default horizontal pixels per terminal column
pub const DEFAULT_CELL_W: u16 = 8;

/// Default vertical pixels per terminal row (glyphs are about twice as tall as wide)
pub const DEFAULT_CELL_H: u16 = 16;

/// Smallest playable arena height.
pub const MIN_ARENA_HEIGHT: i32 = 4 * PADDLE_BOTTOM_MARGIN;

/// Top-left anchor of the score line, in pixels.
pub const SCORE_ANCHOR: (i32, i32) = (10, 10);

/// Vertical offsets of the game-over overlay lines from the arena center.
pub const HEADLINE_OFFSET_Y: i32 = -60;
pub const FINAL_SCORE_OFFSET_Y: i32 = -20;
pub const RESET_PROMPT_OFFSET_Y: i32 = 20;
pub const QUIT_PROMPT_OFFSET_Y: i32 = 60;

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESET_PROMPT_TEXT: &str = "Click to Reset";
pub const QUIT_PROMPT_TEXT: &str = "Click to Quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_geometry_defaults() {
        assert_eq!(PADDLE_WIDTH, 100);
        assert_eq!(PADDLE_HEIGHT, 10);
        assert_eq!(PADDLE_BOTTOM_MARGIN, 50);
        assert_eq!(BALL_DIAMETER, 20);
        assert_eq!(BALL_START_SPEED, 3);
        assert_eq!(TICK_MS, 16);
    }

    #[test]
    fn arena_derived_values() {
        let arena = Arena::new(800, 600);
        assert_eq!(arena.paddle_y(), 550);
        assert_eq!(arena.center(), (400, 300));
        assert_eq!(arena.max_paddle_x(), 700);
        assert!(arena.is_playable());

        let narrow = Arena::new(64, 600);
        assert_eq!(narrow.max_paddle_x(), 0);
        assert!(!narrow.is_playable());
    }

    #[test]
    fn cell_scale_maps_cells_to_pixel_centers() {
        let scale = CellScale::new(8, 16);
        assert_eq!(scale.col_to_px(0), 4);
        assert_eq!(scale.col_to_px(10), 84);
        assert_eq!(scale.row_to_px(2), 40);
        assert_eq!(scale.px_to_col(84), 10);
        assert_eq!(scale.px_to_row(40), 2);
        assert_eq!(scale.px_to_col(-1), -1);
    }

    #[test]
    fn cell_scale_viewport_covers_arena() {
        let scale = CellScale::new(8, 16);
        assert_eq!(scale.viewport_for(Arena::new(640, 384)), (80, 24));
        assert_eq!(scale.viewport_for(Arena::new(641, 385)), (81, 25));
    }

    #[test]
    fn overlay_span_is_centered_on_the_arena() {
        let scale = CellScale::new(8, 16);
        let arena = Arena::new(640, 384);
        assert_eq!(scale.overlay_span(arena, QUIT_PROMPT_TEXT), (34, 46));
        assert_eq!(scale.overlay_span(arena, GAME_OVER_TEXT), (35, 44));
    }

    #[test]
    fn huge_cells_saturate_instead_of_overflowing() {
        let scale = CellScale::new(u16::MAX, u16::MAX);
        assert_eq!(scale.col_to_px(u16::MAX), i32::MAX);
        assert_eq!(scale.arena_for(u16::MAX, u16::MAX), Arena::new(i32::MAX, i32::MAX));
        assert_eq!(scale.px_to_col(i32::MAX), 32768);
        assert_eq!(
            scale.viewport_for(Arena::new(i32::MAX, i32::MAX)),
            (32768, 32768)
        );
    }
}

/// The fixed-size play surface.
///
/// Created once at startup from the display size and never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Y of the paddle's top edge.
    pub const fn paddle_y(&self) -> i32 {
        self.height - PADDLE_BOTTOM_MARGIN
    }

    /// Largest legal paddle x (never negative, even for arenas narrower than the paddle).
    pub fn max_paddle_x(&self) -> i32 {
        (self.width - PADDLE_WIDTH).max(0)
    }

    /// Ball spawn point.
    pub const fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    /// Whether a paddle fits horizontally and the paddle row leaves room to play.
    pub fn is_playable(&self) -> bool {
        self.width >= PADDLE_WIDTH && self.height >= MIN_ARENA_HEIGHT
    }
}

/// Pixel size of one terminal cell.
///
/// Maps between terminal cell coordinates and arena pixels in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellScale {
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            cell_w: DEFAULT_CELL_W,
            cell_h: DEFAULT_CELL_H,
        }
    }
}

impl CellScale {
    /// Create a scale; zero dimensions are bumped to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Arena covering a `cols x rows` terminal.
    pub fn arena_for(&self, cols: u16, rows: u16) -> Arena {
        Arena::new(
            (cols as i32).saturating_mul(self.cell_w as i32),
            (rows as i32).saturating_mul(self.cell_h as i32),
        )
    }

    /// Terminal size needed to show the whole arena.
    pub fn viewport_for(&self, arena: Arena) -> (u16, u16) {
        let w = self.cell_w as i32;
        let h = self.cell_h as i32;
        let cols = arena.width.max(0).saturating_add(w - 1) / w;
        let rows = arena.height.max(0).saturating_add(h - 1) / h;
        (
            cols.min(u16::MAX as i32) as u16,
            rows.min(u16::MAX as i32) as u16,
        )
    }

    /// Pixel x at the horizontal center of a column.
    pub fn col_to_px(&self, col: u16) -> i32 {
        (col as i32)
            .saturating_mul(self.cell_w as i32)
            .saturating_add(self.cell_w as i32 / 2)
    }

    /// Pixel y at the vertical center of a row.
    pub fn row_to_px(&self, row: u16) -> i32 {
        (row as i32)
            .saturating_mul(self.cell_h as i32)
            .saturating_add(self.cell_h as i32 / 2)
    }

    /// Column containing pixel x (may be negative or past the viewport).
    pub fn px_to_col(&self, x: i32) -> i32 {
        x.div_euclid(self.cell_w as i32)
    }

    /// Row containing pixel y (may be negative or past the viewport).
    pub fn px_to_row(&self, y: i32) -> i32 {
        y.div_euclid(self.cell_h as i32)
    }

    /// Row of an overlay line placed `offset_y` pixels from the arena center.
    ///
    /// Shared by the renderer and the click hit-test so both agree on where
    /// the prompts are.
    pub fn overlay_row(&self, arena: Arena, offset_y: i32) -> i32 {
        self.px_to_row(arena.center().1 + offset_y)
    }

    /// Inclusive column span of `text` centered under the arena center.
    ///
    /// Overlay lines are drawn on exactly these cells.
    pub fn overlay_span(&self, arena: Arena, text: &str) -> (i32, i32) {
        let width = text.chars().count() as i32;
        let start = self.px_to_col(arena.center().0) - width / 2;
        (start, start + width - 1)
    }
}

/// Game state machine
///
/// - **Playing**: initial state, and the state re-entered after a reset
/// - **GameOver**: reached when the ball passes the bottom edge; terminal until reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver)
    }
}

/// State machine commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-seed ball and score and return to Playing
    Reset,
    /// Leave the game (exit status 0)
    Quit,
}

/// Core-side event emitted by a tick.
///
/// Observers (logging, the game loop) use it to react to transitions without
/// diffing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// The ball bounced off the paddle; `score` is the new score
    PaddleHit { score: u32 },
    /// The ball left the arena through the bottom edge
    BallLost { score: u32 },
}
